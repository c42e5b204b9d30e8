//! Named curve domain parameters.

use hex_literal::hex;
use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::affine::AffinePoint;
use crate::weierstrass::WeierstrassCurve;

lazy_static! {
    /// secp256k1 (SEC 2, section 2.4.1): `y^2 = x^3 + 7` over
    /// `p = 2^256 - 2^32 - 977`, prime order `n`, cofactor 1.
    static ref SECP256K1: WeierstrassCurve = WeierstrassCurve::new(
        "secp256k1",
        BigUint::from_bytes_be(&hex!(
            "FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE FFFFFC2F"
        )),
        BigUint::zero(),
        BigUint::from(7u32),
        BigUint::from_bytes_be(&hex!(
            "FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141"
        )),
        AffinePoint::new(
            BigUint::from_bytes_be(&hex!(
                "79BE667E F9DCBBAC 55A06295 CE870B07 029BFCDB 2DCE28D9 59F2815B 16F81798"
            )),
            BigUint::from_bytes_be(&hex!(
                "483ADA77 26A3C465 5DA4FBFC 0E1108A8 FD17B448 A6855419 9C47D08F FB10D4B8"
            )),
        ),
    );
}

/// The process-wide secp256k1 instance.
pub fn secp256k1() -> &'static WeierstrassCurve {
    &SECP256K1
}
