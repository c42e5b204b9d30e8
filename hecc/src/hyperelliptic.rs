use curve::{Group, PrimeField};
use tracing::trace;

use crate::divisor::MumfordDivisor;
use crate::errors::PolynomialError;
use crate::polynomial::Polynomial;

/// Imaginary hyperelliptic curve `y^2 = f(x)` over `F_p` with `deg f = 2g + 1`.
///
/// Owns the field and the defining polynomial; the divisor class group of the
/// curve is exposed through [`Group`] with [`MumfordDivisor`] elements.
#[derive(Clone, Debug)]
pub struct HyperellipticCurve {
    field: PrimeField,
    f: Polynomial,
    genus: usize,
}

/// Unwrap a polynomial step inside Cantor's algorithm.
///
/// On reduced inputs every division is by a nonzero polynomial and every
/// exact division is exact, so a failure here is a broken invariant.
fn invariant<T>(result: Result<T, PolynomialError>, step: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("divisor arithmetic invariant violated during {step}: {err}"),
    }
}

impl HyperellipticCurve {
    /// # Panics
    ///
    /// Panics if `f` is not monic of degree `2 * genus + 1`.
    pub fn new(field: PrimeField, f: Polynomial, genus: usize) -> Self {
        assert!(genus > 0, "genus must be positive");
        assert_eq!(
            f.degree(),
            2 * genus + 1,
            "defining polynomial must have degree 2g + 1"
        );
        assert!(f.is_monic(), "defining polynomial must be monic");
        HyperellipticCurve { field, f, genus }
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    pub fn f(&self) -> &Polynomial {
        &self.f
    }

    pub fn genus(&self) -> usize {
        self.genus
    }

    /// `gcd(f, f') = 1`, i.e. the curve is nonsingular in its affine part.
    pub fn is_squarefree(&self) -> bool {
        let derivative = self.f.derivative(&self.field);
        match Polynomial::extended_gcd(&self.f, &derivative, &self.field) {
            Ok(xgcd) => xgcd.gcd.is_one(),
            Err(_) => false,
        }
    }

    /// `u` monic, `deg u <= g`, `deg v < deg u`.
    pub fn is_reduced(&self, divisor: &MumfordDivisor) -> bool {
        if divisor.is_identity() {
            return divisor.v().is_zero();
        }
        let (u, v) = (divisor.u(), divisor.v());
        u.is_monic() && u.degree() <= self.genus && (v.is_zero() || v.degree() < u.degree())
    }

    /// Reduced, and `u | v^2 - f`.
    pub fn is_valid(&self, divisor: &MumfordDivisor) -> bool {
        if !self.is_reduced(divisor) {
            return false;
        }
        if divisor.is_identity() {
            return true;
        }
        let v_squared = divisor.v().mul(divisor.v(), &self.field);
        v_squared
            .sub(&self.f, &self.field)
            .rem(divisor.u(), &self.field)
            .is_ok_and(|r| r.is_zero())
    }

    /// Cantor composition followed by reduction.
    ///
    /// # Panics
    ///
    /// Panics if an intermediate polynomial step fails, which only happens
    /// when an operand is not a valid divisor on this curve.
    pub fn compose(&self, d1: &MumfordDivisor, d2: &MumfordDivisor) -> MumfordDivisor {
        if d1.is_identity() {
            return d2.clone();
        }
        if d2.is_identity() {
            return d1.clone();
        }

        let field = &self.field;
        let (u1, v1) = (d1.u(), d1.v());
        let (u2, v2) = (d2.u(), d2.v());

        // d1 = e1*u1 + e2*u2
        let g1 = invariant(Polynomial::extended_gcd(u1, u2, field), "gcd(u1, u2)");
        // d = c1*d1 + c2*(v1 + v2)
        let v_sum = v1.add(v2, field);
        let g = invariant(
            Polynomial::extended_gcd(&g1.gcd, &v_sum, field),
            "gcd(d1, v1 + v2)",
        );
        let d = &g.gcd;

        let u1u2 = u1.mul(u2, field);
        let u = invariant(u1u2.div_exact(&d.mul(d, field), field), "u1*u2 / d^2");

        let s1 = g.s.mul(&g1.s, field);
        let s2 = g.s.mul(&g1.t, field);
        let s3 = &g.t;

        let numerator = s1
            .mul(u1, field)
            .mul(v2, field)
            .add(&s2.mul(u2, field).mul(v1, field), field)
            .add(&s3.mul(&v1.mul(v2, field).add(&self.f, field), field), field);
        let v = invariant(numerator.div_exact(d, field), "v numerator / d");
        let v = invariant(v.rem(&u, field), "v mod u");

        self.reduce(u, v)
    }

    /// Lower `deg u` to at most the genus and return a reduced divisor.
    ///
    /// # Panics
    ///
    /// Panics if `u` is zero or does not divide `f - v'^2` at some step.
    pub fn reduce(&self, mut u: Polynomial, mut v: Polynomial) -> MumfordDivisor {
        let field = &self.field;

        while u.degree() > self.genus {
            trace!(degree = u.degree(), "reducing divisor");
            let v_next = invariant(v.neg(field).rem(&u, field), "-v mod u");
            let numerator = self.f.sub(&v_next.mul(&v_next, field), field);
            let u_next = invariant(numerator.div_exact(&u, field), "(f - v^2) / u");
            u = u_next.make_monic(field);
            v = v_next;
        }

        if u.is_zero() {
            return MumfordDivisor::identity();
        }
        let v = invariant(v.rem(&u, field), "final v mod u");
        MumfordDivisor::new(u, v)
    }

    /// `(u, -v mod u)`.
    pub fn negate(&self, divisor: &MumfordDivisor) -> MumfordDivisor {
        if divisor.is_identity() {
            return MumfordDivisor::identity();
        }
        let field = &self.field;
        let v = invariant(divisor.v().neg(field).rem(divisor.u(), field), "-v mod u");
        MumfordDivisor::new(divisor.u().clone(), v)
    }
}

impl Group for HyperellipticCurve {
    type Element = MumfordDivisor;

    #[inline]
    fn identity(&self) -> MumfordDivisor {
        MumfordDivisor::identity()
    }

    #[inline]
    fn is_identity(&self, element: &MumfordDivisor) -> bool {
        element.is_identity()
    }

    #[inline]
    fn combine(&self, a: &MumfordDivisor, b: &MumfordDivisor) -> MumfordDivisor {
        self.compose(a, b)
    }

    #[inline]
    fn double(&self, element: &MumfordDivisor) -> MumfordDivisor {
        self.compose(element, element)
    }

    #[inline]
    fn negate(&self, element: &MumfordDivisor) -> MumfordDivisor {
        HyperellipticCurve::negate(self, element)
    }
}
