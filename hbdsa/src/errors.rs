//! Error types for hybrid signing and key handling.

use thiserror::Error;

/// Errors that can occur during key handling and signing.
///
/// Verification never returns an error: malformed or out-of-range signatures
/// simply fail to verify.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The nonce produced `r = 0`, `s = 0` or the point at infinity.
    ///
    /// The probability is negligible for a well-distributed nonce. Recover by
    /// deriving a different nonce, never by retrying with weak randomness.
    #[error("nonce produced a degenerate signature")]
    DegenerateNonce,

    /// A secret scalar was zero or not below the group order.
    #[error("secret scalar is outside [1, n - 1]")]
    InvalidSecretKey,

    /// Decoded public-key coordinates are out of range or not on the curve.
    #[error("public key is not a valid curve point")]
    InvalidPublicKey,

    /// An encoding had the wrong length or tag byte.
    #[error("invalid encoding: expected {expected} bytes, got {actual}")]
    InvalidEncoding { expected: usize, actual: usize },

    /// The public point is the identity.
    #[error("public key is the point at infinity")]
    InfinityPublicKey,

    /// A nonce configuration value is out of its accepted range.
    #[error("invalid nonce configuration")]
    InvalidConfig,
}
