//! Encoding sizes for keys and signatures.

/// Size of a serialized public verifying key in bytes.
///
/// Uncompressed SEC1 encoding: the `0x04` tag followed by the 32-byte
/// big-endian X and Y coordinates.
pub const PK_SIZE: usize = 65;

/// Size of a serialized secret signing key in bytes.
///
/// A signing key is a scalar modulo the secp256k1 group order, encoded as a
/// 32-byte big-endian integer.
pub const SK_SIZE: usize = 32;

/// Size of a serialized signature in bytes.
///
/// A signature consists of:
/// - The scalar r (32 bytes)
/// - The scalar s (32 bytes)
/// Total: 64 bytes
pub const SIG_SIZE: usize = 64;

/// Width of one big-endian scalar or coordinate in every encoding above.
pub const SCALAR_SIZE: usize = 32;

/// Default bit width of the divisor-group exponent in hybrid nonce derivation.
pub const DEFAULT_SCALAR_BITS: u32 = 254;

/// Largest accepted exponent width.
pub const MAX_SCALAR_BITS: u32 = 256;
