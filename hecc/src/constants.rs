//! Fixed domain parameters of the divisor group used for nonce derivation.

use curve::PrimeField;
use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::One;

use crate::divisor::MumfordDivisor;
use crate::hyperelliptic::HyperellipticCurve;
use crate::polynomial::Polynomial;

/// Genus of the curve; reduced divisors have `deg u <= GENUS`.
pub const GENUS: usize = 2;

/// Coefficients of `f(x) = x^5 + 3x^4 + 14x^3 + 7x^2 + 2x + 1`, lowest degree first.
pub const CURVE_COEFFS: [u64; 6] = [1, 2, 7, 14, 3, 1];

/// Bit length of `HECC_PRIME`.
pub const HECC_PRIME_BITS: u64 = 254;

lazy_static! {
    /// `p = 2^254 - 245`, the largest prime below `2^254`.
    pub static ref HECC_PRIME: BigUint = (BigUint::one() << 254u32) - 245u32;

    static ref HECC_FIELD: PrimeField = PrimeField::new(HECC_PRIME.clone());

    static ref DEFAULT_CURVE: HyperellipticCurve = HyperellipticCurve::new(
        HECC_FIELD.clone(),
        Polynomial::from_u64s(&CURVE_COEFFS, &HECC_FIELD),
        GENUS,
    );

    /// `u = x, v = 1`: the degree-one divisor of the point `(0, 1)`.
    static ref BASE_DIVISOR: MumfordDivisor = MumfordDivisor::new(
        Polynomial::x(),
        Polynomial::one(),
    );
}

pub fn hecc_field() -> &'static PrimeField {
    &HECC_FIELD
}

/// The process-wide curve `y^2 = f(x)` over `F_p`.
pub fn default_curve() -> &'static HyperellipticCurve {
    &DEFAULT_CURVE
}

pub fn base_divisor() -> &'static MumfordDivisor {
    &BASE_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_parameters() {
        assert_eq!(HECC_PRIME.bits(), HECC_PRIME_BITS);
        assert_eq!(hecc_field().modulus(), &*HECC_PRIME);
        // 2^254 - 189 has small factors; the field uses the prime below it.
        let composite = (BigUint::one() << 254u32) - 189u32;
        assert_eq!(&composite % 5u32, BigUint::from(0u8));
        assert_ne!(&*HECC_PRIME % 5u32, BigUint::from(0u8));
    }

    #[test]
    fn test_default_curve_shape() {
        let curve = default_curve();
        assert_eq!(curve.genus(), GENUS);
        assert_eq!(curve.f().degree(), 5);
        assert_eq!(curve.f().coeff(4), BigUint::from(3u8));
    }
}
