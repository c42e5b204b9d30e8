//! Hybrid ECDSA over secp256k1 with divisor-group nonce derivation.
//!
//! This library implements ECDSA signing where the per-message nonce may come
//! from:
//! - RFC 6979 (HMAC-SHA-256), the classic deterministic construction
//! - A hybrid derivation that blinds the key with HMAC, hashes the message
//!   into an exponent and takes a scalar multiple of a fixed divisor on a
//!   genus-2 hyperelliptic curve (see [`DivisorNonce`])
//!
//! # Overview
//!
//! Only nonce generation differs between the strategies. Signatures are
//! standard `(r, s)` pairs over secp256k1 with a SHA-256 digest, and
//! verification is plain ECDSA.
//!
//! # Example
//!
//! ```
//! use hbdsa::{generate_key, sign, verify};
//!
//! let (signing_key, verifying_key) = generate_key();
//! let signature = sign(&signing_key, b"hello").expect("signing failed");
//! assert!(verify(&verifying_key, b"hello", &signature));
//! ```
//!
//! # Security Considerations
//!
//! - Arithmetic is variable time; branches depend on secret bits
//! - Keep `NonceConfig::scalar_bits` at its default outside of experiments
//! - Protect the signing key from unauthorized access

mod config;
pub mod constants;
mod ecdsa;
mod errors;
mod hybrid;
mod keys;
mod nonce;
mod rfc6979;
mod signatures;


pub use config::NonceConfig;
pub use ecdsa::{hash_to_scalar, sign_digest, verify_digest};
pub use errors::SignatureError;
pub use hybrid::HybridKey;
pub use keys::{SigningKey, VerifyingKey};
pub use nonce::{DivisorNonce, NonceFunction, Rfc6979Nonce};
pub use rfc6979::generate_k;
pub use signatures::Signature;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

/// Generates a key pair from the thread-local CSPRNG.
pub fn generate_key() -> (SigningKey, VerifyingKey) {
    generate_key_with_rng(&mut rand::rng())
}

pub fn generate_key_with_rng<R: Rng + ?Sized>(rng: &mut R) -> (SigningKey, VerifyingKey) {
    let signing_key = SigningKey::random(rng);
    let verifying_key = signing_key.verifying_key();
    (signing_key, verifying_key)
}

/// Signs with the default divisor nonce.
pub fn sign(key: &SigningKey, message: &[u8]) -> Result<Signature, SignatureError> {
    key.sign_with_nonce_fn(message, &DivisorNonce::default())
}

pub fn verify(key: &VerifyingKey, message: &[u8], signature: &Signature) -> bool {
    key.verify(message, signature)
}

/// Divisor nonce for a raw secret scalar with the default configuration.
///
/// `order` must be at least 2 ([`SignatureError::InvalidConfig`] otherwise)
/// and `secret` must lie in `[1, order - 1]` and fit in [`constants::SK_SIZE`]
/// bytes ([`SignatureError::InvalidSecretKey`] otherwise).
pub fn derive_nonce(
    secret: &BigUint,
    message: &[u8],
    order: &BigUint,
) -> Result<BigUint, SignatureError> {
    if order < &BigUint::from(2u8) {
        return Err(SignatureError::InvalidConfig);
    }
    if secret.is_zero() || secret >= order || secret.bits() > 8 * constants::SK_SIZE as u64 {
        return Err(SignatureError::InvalidSecretKey);
    }
    Ok(DivisorNonce::default().derive(secret, message, order))
}
