//! Prime-field and short-Weierstrass curve arithmetic over `BigUint`.
//!
//! This crate provides a modular-arithmetic context, affine and Jacobian
//! points, a generic [`Group`] trait with double-and-add scalar
//! multiplication, and the secp256k1 domain parameters. The same field and
//! group abstractions back the hyperelliptic divisor group in `hecc`.

mod affine;
mod field;
mod group;
mod jacobian;
mod params;
mod random;
mod weierstrass;

pub use affine::{AffinePoint, UNCOMPRESSED_LEN, UNCOMPRESSED_TAG};
pub use field::{to_be_bytes32, to_be_bytes_padded, PrimeField};
pub use group::Group;
pub use jacobian::JacobianPoint;
pub use params::secp256k1;
pub use random::RandomScalar;
pub use weierstrass::WeierstrassCurve;
