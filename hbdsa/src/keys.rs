//! Signing and verifying keys for secp256k1 ECDSA.

use core::fmt;

use curve::{
    AffinePoint, JacobianPoint, RandomScalar, UNCOMPRESSED_LEN, WeierstrassCurve, secp256k1,
    to_be_bytes32,
};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{PK_SIZE, SK_SIZE};
use crate::ecdsa::{hash_to_scalar, sign_digest, verify_digest};
use crate::errors::SignatureError;
use crate::nonce::{NonceFunction, Rfc6979Nonce};
use crate::signatures::Signature;

/// A secret signing key.
///
/// The signing key is a scalar `d` in `[1, n - 1]` for the secp256k1 group
/// order `n`. It must be kept secret; its `Debug` output is redacted.
///
/// # Example
///
/// ```
/// use hbdsa::SigningKey;
///
/// let mut rng = rand::rng();
/// let signing_key = SigningKey::random(&mut rng);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct SigningKey {
    scalar: BigUint,
}

/// A public verifying key.
///
/// The verifying key is the affine point `Q = d * G`. Construction always
/// checks that the point lies on the curve.
///
/// # Example
///
/// ```
/// use hbdsa::SigningKey;
///
/// let mut rng = rand::rng();
/// let signing_key = SigningKey::random(&mut rng);
/// let verifying_key = signing_key.verifying_key();
/// assert_eq!(verifying_key.to_bytes().len(), 65);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct VerifyingKey {
    point: AffinePoint,
}

impl SigningKey {
    /// Generates a uniformly random signing key.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scalar: secp256k1().scalar_field().random_nonzero(rng),
        }
    }

    /// Wraps a secret scalar, rejecting zero and values not below `n`.
    pub fn from_scalar(scalar: BigUint) -> Result<Self, SignatureError> {
        if scalar.is_zero() || &scalar >= secp256k1().order() {
            return Err(SignatureError::InvalidSecretKey);
        }
        Ok(Self { scalar })
    }

    /// Parses a 32-byte big-endian scalar.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != SK_SIZE {
            return Err(SignatureError::InvalidEncoding {
                expected: SK_SIZE,
                actual: bytes.len(),
            });
        }
        Self::from_scalar(BigUint::from_bytes_be(bytes))
    }

    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        to_be_bytes32(&self.scalar)
    }

    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Derives the public verifying key `Q = d * G`.
    pub fn verifying_key(&self) -> VerifyingKey {
        let curve = secp256k1();
        let point = curve.mul_generator(&self.scalar);
        match curve.to_affine(&point) {
            Some(point) => VerifyingKey { point },
            // d is in [1, n - 1] and G has order n.
            None => unreachable!("nonzero multiple of the generator is at infinity"),
        }
    }

    /// Signs a digest scalar `e` with an explicit nonce `k`.
    ///
    /// # Returns
    ///
    /// Returns [`SignatureError::DegenerateNonce`] if `k` yields `r = 0`,
    /// `s = 0` or the point at infinity.
    pub fn sign_digest(&self, e: &BigUint, k: &BigUint) -> Result<Signature, SignatureError> {
        sign_digest(secp256k1(), &self.scalar, e, k)
    }

    /// Signs `message`, taking the nonce from `nonce_fn`.
    ///
    /// The digest scalar is `SHA-256(message) mod n` (zero mapped to one),
    /// the same mapping [`VerifyingKey::verify`] applies.
    pub fn sign_with_nonce_fn<N: NonceFunction + ?Sized>(
        &self,
        message: &[u8],
        nonce_fn: &N,
    ) -> Result<Signature, SignatureError> {
        let order = secp256k1().order();
        let k = nonce_fn.derive(&self.scalar, message, order);
        self.sign_digest(&hash_to_scalar(message, order), &k)
    }

    /// Plain RFC 6979 ECDSA with SHA-256.
    ///
    /// # Example
    ///
    /// ```
    /// use hbdsa::SigningKey;
    ///
    /// let mut rng = rand::rng();
    /// let signing_key = SigningKey::random(&mut rng);
    /// let signature = signing_key.sign_deterministic(b"hello").expect("signing failed");
    /// assert!(signing_key.verifying_key().verify(b"hello", &signature));
    /// ```
    pub fn sign_deterministic(&self, message: &[u8]) -> Result<Signature, SignatureError> {
        self.sign_with_nonce_fn(message, &Rfc6979Nonce)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

impl TryFrom<Vec<u8>> for SigningKey {
    type Error = SignatureError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bytes(&bytes)
    }
}

impl From<SigningKey> for Vec<u8> {
    fn from(key: SigningKey) -> Self {
        key.to_bytes().to_vec()
    }
}

impl VerifyingKey {
    /// Accepts an affine point if it satisfies the curve equation.
    pub fn from_affine(point: AffinePoint) -> Result<Self, SignatureError> {
        if !secp256k1().is_on_curve(&point) {
            debug!("public key point is not on the curve");
            return Err(SignatureError::InvalidPublicKey);
        }
        Ok(Self { point })
    }

    /// Accepts a Jacobian point, rejecting the point at infinity.
    pub fn from_jacobian(point: &JacobianPoint) -> Result<Self, SignatureError> {
        let Some(affine) = secp256k1().to_affine(point) else {
            return Err(SignatureError::InfinityPublicKey);
        };
        Self::from_affine(affine)
    }

    /// Parses `0x04 || X || Y` (65 bytes) or the untagged `X || Y` (64 bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        let point = match bytes.len() {
            UNCOMPRESSED_LEN => AffinePoint::from_uncompressed(bytes),
            len if len == UNCOMPRESSED_LEN - 1 => AffinePoint::from_raw_coordinates(bytes),
            actual => {
                debug!(actual, "public key has the wrong length");
                return Err(SignatureError::InvalidEncoding {
                    expected: PK_SIZE,
                    actual,
                });
            }
        };

        match point {
            Some(point) => Self::from_affine(point),
            None => {
                debug!(tag = bytes[0], "public key has an unknown tag");
                Err(SignatureError::InvalidPublicKey)
            }
        }
    }

    /// Uncompressed SEC1 encoding.
    pub fn to_bytes(&self) -> [u8; PK_SIZE] {
        self.point.to_uncompressed()
    }

    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    pub fn curve(&self) -> &'static WeierstrassCurve {
        secp256k1()
    }

    /// Verifies a signature over `message`.
    ///
    /// Returns `false` for out-of-range components, a point at infinity or a
    /// mismatched `r`; verification has no error case.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let e = hash_to_scalar(message, self.curve().order());
        self.verify_digest(&e, signature)
    }

    /// Verifies a signature over a digest scalar.
    pub fn verify_digest(&self, e: &BigUint, signature: &Signature) -> bool {
        verify_digest(
            self.curve(),
            &JacobianPoint::from_affine(&self.point),
            e,
            signature,
        )
    }
}

impl From<&SigningKey> for VerifyingKey {
    /// Equivalent to calling `signing_key.verifying_key()`.
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}

impl TryFrom<Vec<u8>> for VerifyingKey {
    type Error = SignatureError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bytes(&bytes)
    }
}

impl From<VerifyingKey> for Vec<u8> {
    fn from(key: VerifyingKey) -> Self {
        key.to_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use num_traits::One;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generator_is_public_key_of_one() {
        let sk = SigningKey::from_scalar(BigUint::one()).unwrap();
        assert_eq!(sk.verifying_key().point(), secp256k1().generator());
    }

    #[test]
    fn test_published_public_key() {
        let sk = SigningKey::from_bytes(&hex!(
            "f8b8af8ce3c7cca5e300d33939540c10d45ce001b8f252bfbc57ba0342904181"
        ))
        .unwrap();
        let pk = sk.verifying_key();
        assert_eq!(
            pk.point().x,
            BigUint::from_bytes_be(&hex!(
                "92df7b245b81aa637ab4e867c8d511008f79161a97d64f2ac709600352f7acbc"
            ))
        );
        assert_eq!(
            pk.point().y,
            BigUint::from_bytes_be(&hex!(
                "e9bfdf1b13fa0cb1de4521e5386cde3a1cd26c5ab584989d07bbed58a5419f62"
            ))
        );
    }

    #[test]
    fn test_secret_key_range() {
        let n = secp256k1().order().clone();
        assert_eq!(
            SigningKey::from_scalar(BigUint::zero()),
            Err(SignatureError::InvalidSecretKey)
        );
        assert_eq!(
            SigningKey::from_scalar(n.clone()),
            Err(SignatureError::InvalidSecretKey)
        );
        assert!(SigningKey::from_scalar(n - 1u32).is_ok());
        assert_eq!(
            SigningKey::from_bytes(&[1u8; 31]),
            Err(SignatureError::InvalidEncoding {
                expected: 32,
                actual: 31
            })
        );
    }

    #[test]
    fn test_public_key_encodings() {
        let mut rng = StdRng::seed_from_u64(42);
        let pk = SigningKey::random(&mut rng).verifying_key();
        let bytes = pk.to_bytes();

        assert_eq!(bytes[0], 0x04);
        assert_eq!(VerifyingKey::from_bytes(&bytes), Ok(pk.clone()));
        assert_eq!(VerifyingKey::from_bytes(&bytes[1..]), Ok(pk));
    }

    #[test]
    fn test_public_key_rejections() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut bytes = SigningKey::random(&mut rng).verifying_key().to_bytes();

        assert_eq!(
            VerifyingKey::from_bytes(&bytes[..33]),
            Err(SignatureError::InvalidEncoding {
                expected: 65,
                actual: 33
            })
        );

        let mut tagged = bytes;
        tagged[0] = 0x02;
        assert_eq!(
            VerifyingKey::from_bytes(&tagged),
            Err(SignatureError::InvalidPublicKey)
        );

        bytes[64] ^= 1;
        assert_eq!(
            VerifyingKey::from_bytes(&bytes),
            Err(SignatureError::InvalidPublicKey)
        );

        assert_eq!(
            VerifyingKey::from_jacobian(&JacobianPoint::infinity()),
            Err(SignatureError::InfinityPublicKey)
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let sk = SigningKey::from_scalar(BigUint::from(0x1234_5678u32)).unwrap();
        let rendered = format!("{sk:?}");
        assert!(!rendered.contains("305419896"));
        assert!(rendered.starts_with("SigningKey"));
    }

    #[test]
    fn test_bincode_roundtrip() {
        let mut rng = StdRng::seed_from_u64(3);
        let sk = SigningKey::random(&mut rng);
        let pk = sk.verifying_key();

        let sk2: SigningKey = bincode::deserialize(&bincode::serialize(&sk).unwrap()).unwrap();
        let pk2: VerifyingKey = bincode::deserialize(&bincode::serialize(&pk).unwrap()).unwrap();
        assert_eq!(sk2, sk);
        assert_eq!(pk2, pk);
    }
}
