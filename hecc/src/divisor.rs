use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::polynomial::Polynomial;

/// Reduced divisor class in Mumford representation `(u, v)`.
///
/// For a reduced divisor `u` is monic with `deg u <= genus`, `deg v < deg u`,
/// and `u` divides `v^2 - f`. The identity is `u = 1, v = 0`; `u = 0` is
/// accepted as an alternative identity marker.
///
/// A divisor carries no reference to its curve. Arithmetic lives on
/// [`crate::HyperellipticCurve`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MumfordDivisor {
    u: Polynomial,
    v: Polynomial,
}

impl MumfordDivisor {
    pub fn new(u: Polynomial, v: Polynomial) -> Self {
        MumfordDivisor { u, v }
    }

    pub fn identity() -> Self {
        MumfordDivisor {
            u: Polynomial::one(),
            v: Polynomial::zero(),
        }
    }

    pub fn u(&self) -> &Polynomial {
        &self.u
    }

    pub fn v(&self) -> &Polynomial {
        &self.v
    }

    pub fn into_parts(self) -> (Polynomial, Polynomial) {
        (self.u, self.v)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.u.is_one() || self.u.is_zero()
    }

    /// Degree of the divisor, i.e. `deg u`. Zero for the identity.
    pub fn degree(&self) -> usize {
        if self.is_identity() {
            0
        } else {
            self.u.degree()
        }
    }

    /// Low coefficients `[u1, u0, v1, v0]`, zero where absent.
    pub fn coords(&self) -> [BigUint; 4] {
        [
            self.u.coeff(1),
            self.u.coeff(0),
            self.v.coeff(1),
            self.v.coeff(0),
        ]
    }
}

impl Default for MumfordDivisor {
    fn default() -> Self {
        Self::identity()
    }
}
