use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

use crate::PrimeField;

/// Helper trait for sampling uniformly random nonzero residues.
pub trait RandomScalar {
    /// Uniform element of `[1, n - 1]` by rejection sampling on masked bytes.
    fn random_nonzero<R: Rng + ?Sized>(&self, rng: &mut R) -> BigUint;
}

impl RandomScalar for PrimeField {
    fn random_nonzero<R: Rng + ?Sized>(&self, rng: &mut R) -> BigUint {
        let bits = self.bits() as usize;
        let len = bits.div_ceil(8);
        let excess = len * 8 - bits;
        let mut bytes = vec![0u8; len];

        loop {
            rng.fill(bytes.as_mut_slice());
            bytes[0] &= 0xff >> excess;

            let candidate = BigUint::from_bytes_be(&bytes);
            if !candidate.is_zero() && self.contains(&candidate) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = PrimeField::new(BigUint::from(251u32));
        for _ in 0..500 {
            let sample = field.random_nonzero(&mut rng);
            assert!(!sample.is_zero());
            assert!(field.contains(&sample));
        }
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let field = crate::secp256k1().scalar_field().clone();
        let a = field.random_nonzero(&mut StdRng::seed_from_u64(7));
        let b = field.random_nonzero(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.bits() > 128);
    }
}
