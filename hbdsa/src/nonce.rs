//! Pluggable nonce strategies for the signer.

use curve::{Group, to_be_bytes32};
use hecc::{HyperellipticCurve, MumfordDivisor};
use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use sha2::{Digest, Sha256, Sha512};
use tracing::trace;

use crate::config::NonceConfig;
use crate::errors::SignatureError;
use crate::rfc6979::generate_k;

/// Source of the per-message signing scalar.
///
/// Implementations must be deterministic in `(secret, message, order)` and
/// return a value in `[1, order - 1]`. Callers pass `order >= 2` and a secret
/// in `[1, order - 1]` of at most 32 bytes, as [`crate::SigningKey`]
/// guarantees; other inputs may panic or be truncated.
pub trait NonceFunction: Send + Sync {
    fn derive(&self, secret: &BigUint, message: &[u8], order: &BigUint) -> BigUint;
}

/// RFC 6979 nonce with HMAC-SHA-256 over `SHA-256(message)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rfc6979Nonce;

impl NonceFunction for Rfc6979Nonce {
    fn derive(&self, secret: &BigUint, message: &[u8], order: &BigUint) -> BigUint {
        generate_k::<Sha256>(order, secret, &Sha256::digest(message))
    }
}

/// Nonce derived through a scalar multiplication in the divisor class group.
///
/// The secret only enters the derivation as `SHA-256(secret)`, used as an HMAC
/// key over the message hash. The resulting seed picks an exponent `s`, and
/// the coordinates of `s * base` are hashed into the nonce:
///
/// ```text
/// blind = HMAC-SHA256(SHA256(d), SHA256(m))
/// seed  = SHA512(blind || SHA256(m))
/// s     = ((seed[..32] mod (p - 1)) + 1) mod 2^W + 1
/// k     = SHA256(u1 || u0 || v1 || v0 of s * base) mod n, 0 -> 1
/// ```
#[derive(Clone, Debug)]
pub struct DivisorNonce {
    config: NonceConfig,
    curve: &'static HyperellipticCurve,
    base: &'static MumfordDivisor,
}

impl DivisorNonce {
    /// Divisor nonce on the fixed curve and base divisor.
    pub fn new(config: NonceConfig) -> Result<Self, SignatureError> {
        config.validate()?;
        Ok(DivisorNonce {
            config,
            curve: hecc::default_curve(),
            base: hecc::base_divisor(),
        })
    }

    pub fn config(&self) -> &NonceConfig {
        &self.config
    }

    /// The divisor-group exponent `s` for a key and message.
    pub fn divisor_scalar(&self, secret: &BigUint, message: &[u8]) -> BigUint {
        let message_hash = Sha256::digest(message);
        let key_hash = Sha256::digest(to_be_bytes32(secret));

        let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(&key_hash)
            .expect("HMAC can take key of any size");
        mac.update(&message_hash);
        let blind = mac.finalize().into_bytes();

        let seed = Sha512::new()
            .chain_update(blind)
            .chain_update(message_hash)
            .finalize();

        let p_minus_one = self.curve.field().modulus() - 1u32;
        let s = BigUint::from_bytes_be(&seed[..32]) % &p_minus_one + 1u32;
        let window = BigUint::one() << self.config.scalar_bits;
        s % window + 1u32
    }

    /// `s * base` in the divisor group.
    pub fn divisor(&self, secret: &BigUint, message: &[u8]) -> MumfordDivisor {
        let s = self.divisor_scalar(secret, message);
        self.curve.scalar_mul(self.base, &s)
    }
}

impl Default for DivisorNonce {
    fn default() -> Self {
        DivisorNonce {
            config: NonceConfig::default(),
            curve: hecc::default_curve(),
            base: hecc::base_divisor(),
        }
    }
}

impl NonceFunction for DivisorNonce {
    fn derive(&self, secret: &BigUint, message: &[u8], order: &BigUint) -> BigUint {
        trace!(scalar_bits = self.config.scalar_bits, "deriving divisor nonce");

        let divisor = self.divisor(secret, message);
        let mut hasher = Sha256::new();
        for coord in divisor.coords() {
            hasher.update(to_be_bytes32(&coord));
        }

        let k = BigUint::from_bytes_be(&hasher.finalize()) % order;
        trace!(divisor_degree = divisor.degree(), "divisor nonce derived");
        if k.is_zero() { BigUint::one() } else { k }
    }
}
