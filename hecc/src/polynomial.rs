//! Dense univariate polynomials over a prime field.
//!
//! Coefficients are stored from lowest to highest degree:
//! `[a0, a1, a2, ...] = a0 + a1*X + a2*X^2 + ...`. The canonical form has no
//! trailing zero coefficient, and the zero polynomial is the single
//! coefficient `[0]`. Every operation returns a canonical polynomial.

use core::mem;

use curve::PrimeField;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::PolynomialError;

/// Upper bound on Euclidean steps in [`Polynomial::extended_gcd`].
///
/// For the bounded-degree inputs of the divisor group the loop finishes in a
/// handful of steps; hitting the bound means the inputs are malformed.
pub const MAX_GCD_ITERATIONS: usize = 500;

/// Serialized as the bare coefficient vector; decoding goes through
/// `From<Vec<BigUint>>`, so a decoded polynomial is always canonical.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<BigUint>", into = "Vec<BigUint>")]
pub struct Polynomial {
    coeffs: Vec<BigUint>,
}

/// Result of the extended Euclidean algorithm: `s*a + t*b = gcd`, gcd monic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedGcd {
    pub gcd: Polynomial,
    pub s: Polynomial,
    pub t: Polynomial,
}

impl Polynomial {
    /// Build a polynomial, reducing every coefficient into the field.
    pub fn new(coeffs: Vec<BigUint>, field: &PrimeField) -> Self {
        Self::canonical(coeffs.iter().map(|c| field.reduce(c)).collect())
    }

    pub fn from_u64s(coeffs: &[u64], field: &PrimeField) -> Self {
        Self::canonical(coeffs.iter().map(|&c| field.from_u64(c)).collect())
    }

    pub fn zero() -> Self {
        Polynomial {
            coeffs: vec![BigUint::zero()],
        }
    }

    pub fn one() -> Self {
        Polynomial {
            coeffs: vec![BigUint::one()],
        }
    }

    /// The monomial `X`.
    pub fn x() -> Self {
        Polynomial {
            coeffs: vec![BigUint::zero(), BigUint::one()],
        }
    }

    pub fn constant(value: BigUint, field: &PrimeField) -> Self {
        Self::new(vec![value], field)
    }

    /// Strip trailing zeros; an empty or all-zero vector becomes `[0]`.
    fn canonical(mut coeffs: Vec<BigUint>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Zero::is_zero) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(BigUint::zero());
        }
        Polynomial { coeffs }
    }

    /// `len - 1`; the zero polynomial reports degree 0.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    pub fn is_monic(&self) -> bool {
        self.leading_coefficient().is_one()
    }

    pub fn coeffs(&self) -> &[BigUint] {
        &self.coeffs
    }

    /// Coefficient of `X^index`, zero when absent.
    pub fn coeff(&self, index: usize) -> BigUint {
        self.coeffs.get(index).cloned().unwrap_or_default()
    }

    pub fn leading_coefficient(&self) -> &BigUint {
        &self.coeffs[self.coeffs.len() - 1]
    }

    pub fn add(&self, other: &Self, field: &PrimeField) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let zero = BigUint::zero();
        let coeffs = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).unwrap_or(&zero);
                let b = other.coeffs.get(i).unwrap_or(&zero);
                field.add(a, b)
            })
            .collect();
        Self::canonical(coeffs)
    }

    pub fn sub(&self, other: &Self, field: &PrimeField) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let zero = BigUint::zero();
        let coeffs = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).unwrap_or(&zero);
                let b = other.coeffs.get(i).unwrap_or(&zero);
                field.sub(a, b)
            })
            .collect();
        Self::canonical(coeffs)
    }

    pub fn neg(&self, field: &PrimeField) -> Self {
        Self::canonical(self.coeffs.iter().map(|c| field.neg(c)).collect())
    }

    pub fn mul(&self, other: &Self, field: &PrimeField) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut coeffs = vec![BigUint::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = field.add(&coeffs[i + j], &field.mul(a, b));
            }
        }
        Self::canonical(coeffs)
    }

    /// Multiply every coefficient by a field constant.
    pub fn scale(&self, factor: &BigUint, field: &PrimeField) -> Self {
        Self::canonical(self.coeffs.iter().map(|c| field.mul(c, factor)).collect())
    }

    /// Divide by the leading coefficient. The zero polynomial is returned as is.
    pub fn make_monic(&self, field: &PrimeField) -> Self {
        match field.inverse(self.leading_coefficient()) {
            Some(inv) => self.scale(&inv, field),
            None => self.clone(),
        }
    }

    /// Long division: `self = q * divisor + r` with `deg r < deg divisor`
    /// (or `r = 0`).
    pub fn div_rem(
        &self,
        divisor: &Self,
        field: &PrimeField,
    ) -> Result<(Self, Self), PolynomialError> {
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        if self.coeffs.len() < divisor.coeffs.len() {
            return Ok((Self::zero(), self.clone()));
        }

        let lead_inv = field
            .inverse(divisor.leading_coefficient())
            .ok_or(PolynomialError::DivisionByZero)?;
        let dlen = divisor.coeffs.len();
        let mut rem = self.coeffs.clone();
        let mut quot = vec![BigUint::zero(); rem.len() - dlen + 1];

        for i in (0..quot.len()).rev() {
            let q = field.mul(&rem[i + dlen - 1], &lead_inv);
            if !q.is_zero() {
                for (j, d) in divisor.coeffs.iter().enumerate() {
                    rem[i + j] = field.sub(&rem[i + j], &field.mul(&q, d));
                }
            }
            quot[i] = q;
        }

        rem.truncate(dlen - 1);
        Ok((Self::canonical(quot), Self::canonical(rem)))
    }

    /// Remainder of [`Self::div_rem`].
    pub fn rem(&self, divisor: &Self, field: &PrimeField) -> Result<Self, PolynomialError> {
        self.div_rem(divisor, field).map(|(_, r)| r)
    }

    /// Quotient of a division that must leave no remainder.
    pub fn div_exact(&self, divisor: &Self, field: &PrimeField) -> Result<Self, PolynomialError> {
        let (q, r) = self.div_rem(divisor, field)?;
        if !r.is_zero() {
            return Err(PolynomialError::InexactDivision);
        }
        Ok(q)
    }

    /// Horner evaluation at `point`.
    pub fn evaluate(&self, point: &BigUint, field: &PrimeField) -> BigUint {
        self.coeffs
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, c| field.add(&field.mul(&acc, point), c))
    }

    /// Formal derivative.
    pub fn derivative(&self, field: &PrimeField) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| field.mul(c, &field.from_u64(i as u64)))
            .collect();
        Self::canonical(coeffs)
    }

    /// Extended Euclid: monic `gcd` with `s*a + t*b = gcd`.
    ///
    /// The gcd and both cofactors are scaled by the inverse of the gcd's
    /// leading coefficient, so the identity still holds after normalization.
    pub fn extended_gcd(
        a: &Self,
        b: &Self,
        field: &PrimeField,
    ) -> Result<ExtendedGcd, PolynomialError> {
        let (mut old_r, mut r) = (a.clone(), b.clone());
        let (mut old_s, mut s) = (Self::one(), Self::zero());
        let (mut old_t, mut t) = (Self::zero(), Self::one());
        let mut iterations = 0;

        while !r.is_zero() {
            if iterations == MAX_GCD_ITERATIONS {
                return Err(PolynomialError::GcdIterationLimit(MAX_GCD_ITERATIONS));
            }
            iterations += 1;

            let (q, rem) = old_r.div_rem(&r, field)?;
            old_r = mem::replace(&mut r, rem);

            let next_s = old_s.sub(&q.mul(&s, field), field);
            old_s = mem::replace(&mut s, next_s);

            let next_t = old_t.sub(&q.mul(&t, field), field);
            old_t = mem::replace(&mut t, next_t);
        }

        let lead_inv = field
            .inverse(old_r.leading_coefficient())
            .ok_or(PolynomialError::ZeroGcd)?;

        Ok(ExtendedGcd {
            gcd: old_r.scale(&lead_inv, field),
            s: old_s.scale(&lead_inv, field),
            t: old_t.scale(&lead_inv, field),
        })
    }
}

impl From<Vec<BigUint>> for Polynomial {
    /// Canonicalize raw coefficients. They are not reduced into any field.
    fn from(coeffs: Vec<BigUint>) -> Self {
        Self::canonical(coeffs)
    }
}

impl From<Polynomial> for Vec<BigUint> {
    fn from(poly: Polynomial) -> Self {
        poly.coeffs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::hecc_field;
    use curve::RandomScalar;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_poly(rng: &mut StdRng, degree: usize, field: &PrimeField) -> Polynomial {
        let coeffs = (0..=degree).map(|_| field.random_nonzero(rng)).collect();
        Polynomial::new(coeffs, field)
    }

    #[test]
    fn test_canonical_form() {
        let field = hecc_field();
        let p = Polynomial::from_u64s(&[3, 0, 0], field);
        assert_eq!(p.coeffs(), &[BigUint::from(3u8)]);
        assert_eq!(p.degree(), 0);

        let zero = Polynomial::from_u64s(&[0, 0, 0], field);
        assert!(zero.is_zero());
        assert_eq!(zero, Polynomial::zero());
        assert_eq!(Polynomial::new(Vec::new(), field), Polynomial::zero());
    }

    #[test]
    fn test_coefficients_reduced_mod_p() {
        let field = hecc_field();
        let p = Polynomial::new(vec![field.modulus() + 5u32, field.modulus().clone()], field);
        assert_eq!(p, Polynomial::from_u64s(&[5], field));
    }

    #[test]
    fn test_add_cancels_to_zero() {
        let field = hecc_field();
        let a = Polynomial::from_u64s(&[1, 2, 3], field);
        let sum = a.add(&a.neg(field), field);
        assert!(sum.is_zero());
        assert_eq!(a.sub(&a, field), Polynomial::zero());
    }

    #[test]
    fn test_mul_small() {
        let field = hecc_field();
        // (x + 1)(x - 1) = x^2 - 1
        let minus_one = field.neg(&BigUint::one());
        let a = Polynomial::from_u64s(&[1, 1], field);
        let b = Polynomial::new(vec![minus_one.clone(), BigUint::one()], field);
        let expected = Polynomial::new(vec![minus_one, BigUint::zero(), BigUint::one()], field);
        assert_eq!(a.mul(&b, field), expected);
        assert!(a.mul(&Polynomial::zero(), field).is_zero());
    }

    #[test]
    fn test_div_rem_identity_random() {
        let field = hecc_field();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..25 {
            let deg_a = rng.random_range(0..8);
            let deg_b = rng.random_range(0..5);
            let a = random_poly(&mut rng, deg_a, field);
            let b = random_poly(&mut rng, deg_b, field);

            let (q, r) = a.div_rem(&b, field).expect("nonzero divisor");
            assert!(r.is_zero() || r.degree() < b.degree());
            assert_eq!(q.mul(&b, field).add(&r, field), a);
        }
    }

    #[test]
    fn test_div_by_zero() {
        let field = hecc_field();
        let a = Polynomial::from_u64s(&[1, 2], field);
        assert_eq!(
            a.div_rem(&Polynomial::zero(), field),
            Err(PolynomialError::DivisionByZero)
        );
    }

    #[test]
    fn test_div_exact() {
        let field = hecc_field();
        let a = Polynomial::from_u64s(&[2, 3, 1], field); // (x + 1)(x + 2)
        let b = Polynomial::from_u64s(&[1, 1], field);
        assert_eq!(a.div_exact(&b, field), Ok(Polynomial::from_u64s(&[2, 1], field)));

        let c = Polynomial::from_u64s(&[5, 1], field);
        assert_eq!(a.div_exact(&c, field), Err(PolynomialError::InexactDivision));
    }

    #[test]
    fn test_extended_gcd_bezout() {
        let field = hecc_field();
        let mut rng = StdRng::seed_from_u64(7);
        let common = Polynomial::from_u64s(&[11, 1], field);

        for _ in 0..10 {
            let a = random_poly(&mut rng, 3, field).mul(&common, field);
            let b = random_poly(&mut rng, 2, field).mul(&common, field);
            let xgcd = Polynomial::extended_gcd(&a, &b, field).expect("gcd");

            assert!(xgcd.gcd.is_monic());
            assert!(a.rem(&xgcd.gcd, field).expect("rem").is_zero());
            assert!(b.rem(&xgcd.gcd, field).expect("rem").is_zero());
            assert!(common.rem(&xgcd.gcd, field).expect("rem").is_zero());

            let combination = xgcd.s.mul(&a, field).add(&xgcd.t.mul(&b, field), field);
            assert_eq!(combination, xgcd.gcd);
        }
    }

    #[test]
    fn test_extended_gcd_iteration_limit() {
        let field = hecc_field();
        let mut rng = StdRng::seed_from_u64(11);
        // Generic inputs lose one degree per Euclidean step.
        let a = random_poly(&mut rng, 520, field);
        let b = random_poly(&mut rng, 519, field);

        assert_eq!(
            Polynomial::extended_gcd(&a, &b, field),
            Err(PolynomialError::GcdIterationLimit(MAX_GCD_ITERATIONS))
        );
    }

    #[test]
    fn test_deserialize_canonicalizes() {
        let trailing = bincode::serialize(&vec![BigUint::from(5u8), BigUint::zero()]).unwrap();
        let decoded: Polynomial = bincode::deserialize(&trailing).unwrap();
        assert_eq!(decoded, Polynomial::from_u64s(&[5], hecc_field()));
        assert_eq!(decoded.degree(), 0);

        let empty = bincode::serialize(&Vec::<BigUint>::new()).unwrap();
        let decoded: Polynomial = bincode::deserialize(&empty).unwrap();
        assert!(decoded.is_zero());
        assert_eq!(decoded.degree(), 0);
    }

    #[test]
    fn test_extended_gcd_with_zero_operand() {
        let field = hecc_field();
        let a = Polynomial::from_u64s(&[6, 4, 2], field);
        let xgcd = Polynomial::extended_gcd(&a, &Polynomial::zero(), field).expect("gcd");
        assert_eq!(xgcd.gcd, Polynomial::from_u64s(&[3, 2, 1], field));

        assert_eq!(
            Polynomial::extended_gcd(&Polynomial::zero(), &Polynomial::zero(), field),
            Err(PolynomialError::ZeroGcd)
        );
    }

    #[test]
    fn test_evaluate_and_derivative() {
        let field = hecc_field();
        // 1 + 2x + 3x^2
        let p = Polynomial::from_u64s(&[1, 2, 3], field);
        assert_eq!(p.evaluate(&BigUint::from(2u8), field), BigUint::from(17u8));
        assert_eq!(p.derivative(field), Polynomial::from_u64s(&[2, 6], field));
        assert!(Polynomial::one().derivative(field).is_zero());
    }

    #[test]
    fn test_make_monic() {
        let field = hecc_field();
        let p = Polynomial::from_u64s(&[4, 2], field);
        assert_eq!(p.make_monic(field), Polynomial::from_u64s(&[2, 1], field));
        assert!(Polynomial::zero().make_monic(field).is_zero());
    }
}
