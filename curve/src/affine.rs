use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::field::to_be_bytes32;

/// SEC1 tag for an uncompressed point.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// Length of the uncompressed encoding: tag byte plus two 32-byte coordinates.
pub const UNCOMPRESSED_LEN: usize = 65;

/// Affine point `(x, y)` on a short-Weierstrass curve.
///
/// There is no affine point at infinity; conversions that may hit the identity
/// return `Option<AffinePoint>` instead. Curve membership is checked by
/// [`crate::WeierstrassCurve::is_on_curve`], not by this type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AffinePoint {
    pub x: BigUint,
    pub y: BigUint,
}

impl AffinePoint {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        AffinePoint { x, y }
    }

    /// `0x04 || X || Y` with both coordinates as 32-byte big-endian integers.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out[0] = UNCOMPRESSED_TAG;
        out[1..33].copy_from_slice(&to_be_bytes32(&self.x));
        out[33..65].copy_from_slice(&to_be_bytes32(&self.y));
        out
    }

    /// Parse `0x04 || X || Y`. Returns `None` on a wrong length or tag.
    pub fn from_uncompressed(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != UNCOMPRESSED_LEN || bytes[0] != UNCOMPRESSED_TAG {
            return None;
        }
        Self::from_raw_coordinates(&bytes[1..])
    }

    /// Parse the untagged `X || Y` form (64 bytes).
    pub fn from_raw_coordinates(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != UNCOMPRESSED_LEN - 1 {
            return None;
        }
        let x = BigUint::from_bytes_be(&bytes[..32]);
        let y = BigUint::from_bytes_be(&bytes[32..]);
        Some(AffinePoint::new(x, y))
    }
}
