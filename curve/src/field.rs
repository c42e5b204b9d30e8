//! Arithmetic modulo a fixed odd prime.
//!
//! Elements are plain `BigUint` residues in `[0, p)`. Every operation reduces
//! its result, so nothing unreduced ever escapes this module. Inversion uses
//! Fermat's little theorem (`a^(p-2)`), which is only correct when the modulus
//! is prime.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Prime field `F_p` described by its modulus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
    /// `p - 2`, the Fermat inversion exponent.
    inverse_exponent: BigUint,
}

impl PrimeField {
    /// Create the field for an odd prime modulus.
    ///
    /// # Panics
    ///
    /// Panics if `modulus < 3`. Primality itself is not checked.
    pub fn new(modulus: BigUint) -> Self {
        assert!(
            modulus > BigUint::from(2u8),
            "field modulus must be an odd prime"
        );
        let inverse_exponent = &modulus - 2u32;
        PrimeField {
            modulus,
            inverse_exponent,
        }
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the modulus.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Whether `a` is already a canonical residue.
    #[inline]
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.modulus
    }

    #[inline]
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.modulus
    }

    #[inline]
    pub fn from_u64(&self, value: u64) -> BigUint {
        self.reduce(&BigUint::from(value))
    }

    #[inline]
    pub fn is_zero(&self, a: &BigUint) -> bool {
        self.reduce(a).is_zero()
    }

    #[inline]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        if a >= b {
            a - b
        } else {
            &self.modulus - b + a
        }
    }

    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = self.reduce(a);
        if a.is_zero() {
            a
        } else {
            &self.modulus - a
        }
    }

    #[inline]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    #[inline]
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    #[inline]
    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.modulus)
    }

    /// Multiplicative inverse, or `None` for zero.
    pub fn inverse(&self, a: &BigUint) -> Option<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return None;
        }
        if a.is_one() {
            return Some(a);
        }
        Some(self.pow(&a, &self.inverse_exponent))
    }
}

/// Big-endian encoding of `value` left-padded to exactly `len` bytes.
///
/// Values wider than `len` bytes keep only their low-order `len` bytes.
pub fn to_be_bytes_padded(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut out = vec![0u8; len];
    if bytes.len() >= len {
        out.copy_from_slice(&bytes[bytes.len() - len..]);
    } else {
        out[len - bytes.len()..].copy_from_slice(&bytes);
    }
    out
}

/// Fixed 32-byte big-endian encoding used for scalars and coordinates.
pub fn to_be_bytes32(value: &BigUint) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&to_be_bytes_padded(value, 32));
    out
}
