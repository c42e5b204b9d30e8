//! Signature type and its fixed-width encoding.

use curve::to_be_bytes32;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::constants::{SCALAR_SIZE, SIG_SIZE};
use crate::errors::SignatureError;

/// An ECDSA signature `(r, s)` over secp256k1.
///
/// # Structure
///
/// Both components are scalars modulo the group order `n`. A signature is
/// well formed when `1 <= r, s <= n - 1`; decoding does not enforce this,
/// verification does.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// `x(k*G) mod n` for the signing nonce `k`
    pub r: BigUint,
    /// `k^-1 (e + d*r) mod n`
    pub s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// `r || s`, each as a 32-byte big-endian integer.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        out[..SCALAR_SIZE].copy_from_slice(&to_be_bytes32(&self.r));
        out[SCALAR_SIZE..].copy_from_slice(&to_be_bytes32(&self.s));
        out
    }

    /// Parse `r || s`. Only the length is checked.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != SIG_SIZE {
            return Err(SignatureError::InvalidEncoding {
                expected: SIG_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Signature {
            r: BigUint::from_bytes_be(&bytes[..SCALAR_SIZE]),
            s: BigUint::from_bytes_be(&bytes[SCALAR_SIZE..]),
        })
    }

    /// Both components lie in `[1, order - 1]`.
    pub fn is_well_formed(&self, order: &BigUint) -> bool {
        !self.r.is_zero() && !self.s.is_zero() && &self.r < order && &self.s < order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve::secp256k1;

    #[test]
    fn test_encoding_layout() {
        let sig = Signature::new(BigUint::from(0x0102u32), BigUint::from(0x03u32));
        let bytes = sig.to_bytes();
        assert_eq!(&bytes[30..32], &[0x01, 0x02]);
        assert_eq!(bytes[63], 0x03);
        assert_eq!(Signature::from_bytes(&bytes), Ok(sig));
    }

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        assert_eq!(
            Signature::from_bytes(&[0u8; 63]),
            Err(SignatureError::InvalidEncoding {
                expected: 64,
                actual: 63
            })
        );
    }

    #[test]
    fn test_well_formed_bounds() {
        let n = secp256k1().order();
        let one = BigUint::from(1u8);
        let max = n - 1u32;

        assert!(Signature::new(one.clone(), max.clone()).is_well_formed(n));
        assert!(!Signature::new(BigUint::zero(), one.clone()).is_well_formed(n));
        assert!(!Signature::new(one.clone(), n.clone()).is_well_formed(n));
    }
}
