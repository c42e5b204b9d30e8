//! Error types for polynomial arithmetic.

use thiserror::Error;

/// Failures of polynomial division and the extended Euclidean algorithm.
///
/// Inside divisor composition these indicate a broken invariant (malformed
/// constants or a programming error), not a user condition.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// The divisor passed to polynomial division was the zero polynomial.
    #[error("polynomial division by zero")]
    DivisionByZero,

    /// A division that must be exact left a nonzero remainder.
    #[error("exact polynomial division left a nonzero remainder")]
    InexactDivision,

    /// The Euclidean loop ran past its iteration bound.
    #[error("extended gcd did not converge within {0} iterations")]
    GcdIterationLimit(usize),

    /// Both gcd inputs were zero, so there is no monic gcd.
    #[error("gcd of two zero polynomials is undefined")]
    ZeroGcd,
}
