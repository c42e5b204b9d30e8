//! Tunables for hybrid nonce derivation.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SCALAR_BITS, MAX_SCALAR_BITS};
use crate::errors::SignatureError;

/// Configuration of the divisor nonce.
///
/// `scalar_bits` caps the exponent used for the divisor-group scalar
/// multiplication at `2^scalar_bits`. Arithmetic always runs over the full
/// 254-bit field; only the exponent is bounded.
///
/// # Security
///
/// The cap bounds the number of distinct nonces a key can produce. Narrow
/// widths (the 16-bit setting used for quick measurements, for instance)
/// leave at most `2^scalar_bits` nonces and make the key recoverable from a
/// handful of signatures. Keep the default outside of experiments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NonceConfig {
    pub scalar_bits: u32,
}

impl NonceConfig {
    /// Validates `scalar_bits` against `1..=256`.
    pub fn new(scalar_bits: u32) -> Result<Self, SignatureError> {
        let config = NonceConfig { scalar_bits };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SignatureError> {
        if self.scalar_bits == 0 || self.scalar_bits > MAX_SCALAR_BITS {
            return Err(SignatureError::InvalidConfig);
        }
        Ok(())
    }
}

impl Default for NonceConfig {
    fn default() -> Self {
        NonceConfig {
            scalar_bits: DEFAULT_SCALAR_BITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full_width() {
        assert_eq!(NonceConfig::default().scalar_bits, 254);
        assert!(NonceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bounds() {
        assert_eq!(NonceConfig::new(0), Err(SignatureError::InvalidConfig));
        assert_eq!(NonceConfig::new(257), Err(SignatureError::InvalidConfig));
        assert_eq!(NonceConfig::new(1).map(|c| c.scalar_bits), Ok(1));
        assert_eq!(NonceConfig::new(256).map(|c| c.scalar_bits), Ok(256));
    }

    #[test]
    fn test_bincode_roundtrip() {
        let config = NonceConfig::new(64).unwrap();
        let encoded = bincode::serialize(&config).unwrap();
        let decoded: NonceConfig = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, config);
    }
}
