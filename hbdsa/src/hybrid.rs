//! Key pair bundled with a nonce strategy.

use num_bigint::BigUint;
use rand::Rng;

use curve::secp256k1;

use crate::constants::PK_SIZE;
use crate::errors::SignatureError;
use crate::keys::{SigningKey, VerifyingKey};
use crate::nonce::{DivisorNonce, NonceFunction};
use crate::signatures::Signature;

/// A key pair that signs with a fixed [`NonceFunction`].
///
/// The default strategy is [`DivisorNonce`]; signatures are ordinary ECDSA
/// signatures and verify with any [`VerifyingKey`], whatever the strategy.
///
/// # Example
///
/// ```
/// use hbdsa::HybridKey;
///
/// let mut rng = rand::rng();
/// let key = HybridKey::random(&mut rng);
/// let signature = key.sign(b"hello").expect("signing failed");
/// assert!(key.verify(b"hello", &signature));
/// ```
#[derive(Clone, Debug)]
pub struct HybridKey<N: NonceFunction = DivisorNonce> {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
    nonce_fn: N,
}

impl HybridKey<DivisorNonce> {
    /// Wraps an existing key with the default divisor nonce.
    pub fn from_signing_key(signing_key: SigningKey) -> Self {
        Self::with_nonce_fn(signing_key, DivisorNonce::default())
    }

    /// Generates a fresh key with the default divisor nonce.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_signing_key(SigningKey::random(rng))
    }
}

impl<N: NonceFunction> HybridKey<N> {
    pub fn with_nonce_fn(signing_key: SigningKey, nonce_fn: N) -> Self {
        let verifying_key = signing_key.verifying_key();
        HybridKey {
            signing_key,
            verifying_key,
            nonce_fn,
        }
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    pub fn nonce_fn(&self) -> &N {
        &self.nonce_fn
    }

    /// 65-byte uncompressed public key.
    pub fn public_key_bytes(&self) -> [u8; PK_SIZE] {
        self.verifying_key.to_bytes()
    }

    /// The nonce this key would use for `message`.
    pub fn derive_nonce(&self, message: &[u8]) -> BigUint {
        self.nonce_fn
            .derive(self.signing_key.scalar(), message, secp256k1().order())
    }

    pub fn sign(&self, message: &[u8]) -> Result<Signature, SignatureError> {
        self.signing_key.sign_with_nonce_fn(message, &self.nonce_fn)
    }

    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.verifying_key.verify(message, signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NonceConfig;
    use crate::nonce::Rfc6979Nonce;
    use num_traits::One;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_nonce_strategies_differ_but_both_verify() {
        let sk = SigningKey::from_scalar(BigUint::one()).unwrap();
        let hybrid = HybridKey::from_signing_key(sk.clone());
        let classic = HybridKey::with_nonce_fn(sk, Rfc6979Nonce);

        let a = hybrid.sign(b"hello").unwrap();
        let b = classic.sign(b"hello").unwrap();
        assert_ne!(a, b);
        assert!(hybrid.verify(b"hello", &b));
        assert!(classic.verify(b"hello", &a));
    }

    #[test]
    fn test_narrow_window_still_signs() {
        let mut rng = StdRng::seed_from_u64(42);
        let nonce = DivisorNonce::new(NonceConfig::new(16).unwrap()).unwrap();
        let key = HybridKey::with_nonce_fn(SigningKey::random(&mut rng), nonce);

        let sig = key.sign(b"narrow").unwrap();
        assert!(key.verify(b"narrow", &sig));
        assert_eq!(key.nonce_fn().config().scalar_bits, 16);
    }

    #[test]
    fn test_public_key_bytes_match_verifying_key() {
        let mut rng = StdRng::seed_from_u64(9);
        let key = HybridKey::random(&mut rng);
        assert_eq!(key.public_key_bytes(), key.verifying_key().to_bytes());
        assert_eq!(
            VerifyingKey::from_bytes(&key.public_key_bytes()).as_ref(),
            Ok(key.verifying_key())
        );
    }
}
