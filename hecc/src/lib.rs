//! Divisor class group of a genus-2 hyperelliptic curve over a 254-bit prime field.
//!
//! Elements are [`MumfordDivisor`]s; the group law is Cantor composition with
//! reduction, exposed through [`curve::Group`] on [`HyperellipticCurve`]. The
//! fixed curve and base divisor used by hybrid nonce derivation live in
//! [`constants`].

pub mod constants;
mod divisor;
mod errors;
mod hyperelliptic;
mod polynomial;


pub use constants::{base_divisor, default_curve, hecc_field};
pub use divisor::MumfordDivisor;
pub use errors::PolynomialError;
pub use hyperelliptic::HyperellipticCurve;
pub use polynomial::{ExtendedGcd, Polynomial, MAX_GCD_ITERATIONS};

use curve::Group;
use num_bigint::BigUint;

/// `k * divisor` on the default curve.
pub fn scalar_mul(k: &BigUint, divisor: &MumfordDivisor) -> MumfordDivisor {
    default_curve().scalar_mul(divisor, k)
}
