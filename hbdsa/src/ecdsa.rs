//! ECDSA signing and verification over a digest scalar.
//!
//! These functions take the nonce from the caller; choosing it is the job of
//! a [`crate::NonceFunction`].

use curve::{JacobianPoint, WeierstrassCurve};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::errors::SignatureError;
use crate::signatures::Signature;

/// `SHA-256(message) mod order`, with zero mapped to one.
///
/// Sign and verify both go through this mapping, so they always agree on the
/// digest scalar.
pub fn hash_to_scalar(message: &[u8], order: &BigUint) -> BigUint {
    let e = BigUint::from_bytes_be(&Sha256::digest(message)) % order;
    if e.is_zero() { BigUint::one() } else { e }
}

/// `r = x(k*G) mod n`, `s = k^-1 (e + d*r) mod n`.
///
/// Returns [`SignatureError::DegenerateNonce`] when `k*G` is the point at
/// infinity, or when `r` or `s` is zero.
pub fn sign_digest(
    curve: &WeierstrassCurve,
    secret: &BigUint,
    e: &BigUint,
    k: &BigUint,
) -> Result<Signature, SignatureError> {
    let n = curve.scalar_field();

    let point = curve.mul_generator(k);
    let Some(affine) = curve.to_affine(&point) else {
        warn!("nonce point is at infinity");
        return Err(SignatureError::DegenerateNonce);
    };

    let r = n.reduce(&affine.x);
    if r.is_zero() {
        warn!("nonce produced r = 0");
        return Err(SignatureError::DegenerateNonce);
    }

    let Some(k_inv) = n.inverse(k) else {
        warn!("nonce is not invertible modulo the group order");
        return Err(SignatureError::DegenerateNonce);
    };
    let s = n.mul(&k_inv, &n.add(&n.reduce(e), &n.mul(secret, &r)));
    if s.is_zero() {
        warn!("nonce produced s = 0");
        return Err(SignatureError::DegenerateNonce);
    }

    Ok(Signature { r, s })
}

/// Check `x(u1*G + u2*Q) mod n == r` with `w = s^-1`, `u1 = e*w`, `u2 = r*w`.
///
/// Out-of-range components and a resulting point at infinity are rejections,
/// not errors.
pub fn verify_digest(
    curve: &WeierstrassCurve,
    public: &JacobianPoint,
    e: &BigUint,
    signature: &Signature,
) -> bool {
    if !signature.is_well_formed(curve.order()) {
        return false;
    }

    let n = curve.scalar_field();
    let Some(w) = n.inverse(&signature.s) else {
        return false;
    };
    let u1 = n.mul(&n.reduce(e), &w);
    let u2 = n.mul(&signature.r, &w);

    let point = curve.double_scalar_mul_basepoint(&u1, &u2, public);
    match curve.to_affine(&point) {
        Some(affine) => n.reduce(&affine.x) == signature.r,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve::secp256k1;
    use hex_literal::hex;

    fn scalar(bytes: [u8; 32]) -> BigUint {
        BigUint::from_bytes_be(&bytes)
    }

    #[test]
    fn test_hash_to_scalar_in_range() {
        let curve = secp256k1();
        let e = hash_to_scalar(b"abc", curve.order());
        assert!(e < *curve.order());
        assert!(!e.is_zero());

        // Reduction by a tiny order can hit zero, which maps to one.
        let e = hash_to_scalar(b"abc", &BigUint::one());
        assert_eq!(e, BigUint::one());
    }

    #[test]
    fn test_sign_digest_published_vector() {
        let curve = secp256k1();
        let d = BigUint::one();
        let e = hash_to_scalar(b"Satoshi Nakamoto", curve.order());
        let k = scalar(hex!(
            "8f8a276c19f4149656b280621e358cce24f5f52542772691ee69063b74f15d15"
        ));

        let sig = sign_digest(curve, &d, &e, &k).unwrap();
        assert_eq!(
            sig.r,
            scalar(hex!(
                "934b1ea10a4b3c1757e2b0c017d0b6143ce3c9a7e6a4a49860d7a6ab210ee3d8"
            ))
        );
        assert_eq!(
            sig.s,
            scalar(hex!(
                "dbbd3162d46e9f9bef7feb87c16dc13b4f6568a87f4e83f728e2443ba586675c"
            ))
        );

        let public = curve.mul_generator(&d);
        assert!(verify_digest(curve, &public, &e, &sig));
    }

    #[test]
    fn test_zero_nonce_is_degenerate() {
        let curve = secp256k1();
        let e = hash_to_scalar(b"msg", curve.order());
        assert_eq!(
            sign_digest(curve, &BigUint::one(), &e, &BigUint::zero()),
            Err(SignatureError::DegenerateNonce)
        );
        assert_eq!(
            sign_digest(curve, &BigUint::one(), &e, curve.order()),
            Err(SignatureError::DegenerateNonce)
        );
    }

    #[test]
    fn test_verify_rejects_out_of_range_components() {
        let curve = secp256k1();
        let public = curve.mul_generator(&BigUint::one());
        let e = hash_to_scalar(b"msg", curve.order());
        let n = curve.order().clone();

        for (r, s) in [
            (BigUint::zero(), BigUint::one()),
            (BigUint::one(), BigUint::zero()),
            (n.clone(), BigUint::one()),
            (BigUint::one(), n.clone()),
        ] {
            assert!(!verify_digest(curve, &public, &e, &Signature { r, s }));
        }
    }
}
