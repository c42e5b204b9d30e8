use num_bigint::BigUint;
use num_traits::Zero;

use crate::affine::AffinePoint;
use crate::field::PrimeField;
use crate::group::Group;
use crate::jacobian::JacobianPoint;

/// Short-Weierstrass curve `y^2 = x^3 + a*x + b` over `F_p` with a prime-order
/// subgroup generated by `G`.
///
/// Points are [`JacobianPoint`]s; all arithmetic goes through the curve so the
/// points themselves stay plain data.
#[derive(Clone, Debug)]
pub struct WeierstrassCurve {
    name: &'static str,
    base: PrimeField,
    scalars: PrimeField,
    a: BigUint,
    b: BigUint,
    generator: AffinePoint,
}

impl WeierstrassCurve {
    /// # Panics
    ///
    /// Panics if the generator does not satisfy the curve equation.
    pub fn new(
        name: &'static str,
        modulus: BigUint,
        a: BigUint,
        b: BigUint,
        order: BigUint,
        generator: AffinePoint,
    ) -> Self {
        let curve = WeierstrassCurve {
            name,
            base: PrimeField::new(modulus),
            scalars: PrimeField::new(order),
            a,
            b,
            generator,
        };
        assert!(
            curve.is_on_curve(&curve.generator),
            "generator of {name} is not on the curve"
        );
        curve
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field of coordinates, `F_p`.
    pub fn base_field(&self) -> &PrimeField {
        &self.base
    }

    /// Field of scalars, `Z/nZ` for the group order `n`.
    pub fn scalar_field(&self) -> &PrimeField {
        &self.scalars
    }

    pub fn order(&self) -> &BigUint {
        self.scalars.modulus()
    }

    pub fn a(&self) -> &BigUint {
        &self.a
    }

    pub fn b(&self) -> &BigUint {
        &self.b
    }

    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    pub fn generator_jacobian(&self) -> JacobianPoint {
        JacobianPoint::from_affine(&self.generator)
    }

    /// Check `y^2 = x^3 + a*x + b` with both coordinates in range.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        let f = &self.base;
        if !f.contains(&point.x) || !f.contains(&point.y) {
            return false;
        }

        let lhs = f.square(&point.y);
        let x3 = f.mul(&f.square(&point.x), &point.x);
        let rhs = f.add(&f.add(&x3, &f.mul(&self.a, &point.x)), &self.b);

        lhs == rhs
    }

    /// Check `Y^2 = X^3 + a*X*Z^4 + b*Z^6`. Infinity is on every curve.
    pub fn is_on_curve_jacobian(&self, point: &JacobianPoint) -> bool {
        if point.is_infinity() {
            return true;
        }

        let f = &self.base;
        let z2 = f.square(&point.z);
        let z4 = f.square(&z2);
        let z6 = f.mul(&z4, &z2);

        let lhs = f.square(&point.y);
        let x3 = f.mul(&f.square(&point.x), &point.x);
        let ax = f.mul(&f.mul(&self.a, &point.x), &z4);
        let rhs = f.add(&f.add(&x3, &ax), &f.mul(&self.b, &z6));

        lhs == rhs
    }

    /// Convert to affine coordinates with a single inversion of `Z`.
    ///
    /// Returns `None` for the point at infinity, which has no affine form.
    pub fn to_affine(&self, point: &JacobianPoint) -> Option<AffinePoint> {
        let f = &self.base;
        let z_inv = f.inverse(&point.z)?;
        let z_inv2 = f.square(&z_inv);
        let z_inv3 = f.mul(&z_inv2, &z_inv);

        Some(AffinePoint::new(
            f.mul(&point.x, &z_inv2),
            f.mul(&point.y, &z_inv3),
        ))
    }

    /// Group equality: same class of Jacobian representatives.
    pub fn points_equal(&self, p: &JacobianPoint, q: &JacobianPoint) -> bool {
        match (p.is_infinity(), q.is_infinity()) {
            (true, true) => true,
            (false, false) => {
                let f = &self.base;
                let pz2 = f.square(&p.z);
                let qz2 = f.square(&q.z);
                let same_x = f.mul(&p.x, &qz2) == f.mul(&q.x, &pz2);
                let same_y =
                    f.mul(&p.y, &f.mul(&qz2, &q.z)) == f.mul(&q.y, &f.mul(&pz2, &p.z));
                same_x && same_y
            }
            _ => false,
        }
    }

    /// Jacobian addition.
    ///
    /// Equal `x` with different `y` gives infinity; equal points fall back to
    /// [`Self::double`].
    pub fn add(&self, p: &JacobianPoint, q: &JacobianPoint) -> JacobianPoint {
        if p.is_infinity() {
            return q.clone();
        }
        if q.is_infinity() {
            return p.clone();
        }

        let f = &self.base;
        let pz2 = f.square(&p.z);
        let qz2 = f.square(&q.z);
        let u1 = f.mul(&p.x, &qz2);
        let u2 = f.mul(&q.x, &pz2);
        let s1 = f.mul(&p.y, &f.mul(&qz2, &q.z));
        let s2 = f.mul(&q.y, &f.mul(&pz2, &p.z));

        if u1 == u2 {
            if s1 != s2 {
                return JacobianPoint::infinity();
            }
            return self.double(p);
        }

        let h = f.sub(&u2, &u1);
        let r = f.sub(&s2, &s1);
        let h2 = f.square(&h);
        let h3 = f.mul(&h2, &h);
        let v = f.mul(&u1, &h2);

        let x3 = f.sub(&f.sub(&f.square(&r), &h3), &f.add(&v, &v));
        let y3 = f.sub(&f.mul(&r, &f.sub(&v, &x3)), &f.mul(&s1, &h3));
        let z3 = f.mul(&f.mul(&p.z, &q.z), &h);

        JacobianPoint::new(x3, y3, z3)
    }

    /// Jacobian doubling for generic `a`.
    pub fn double(&self, p: &JacobianPoint) -> JacobianPoint {
        if p.is_infinity() || p.y.is_zero() {
            return JacobianPoint::infinity();
        }

        let f = &self.base;
        let y2 = f.square(&p.y);
        let s = f.mul(&f.from_u64(4), &f.mul(&p.x, &y2));
        let z4 = f.square(&f.square(&p.z));
        let m = f.add(
            &f.mul(&f.from_u64(3), &f.square(&p.x)),
            &f.mul(&self.a, &z4),
        );

        let x3 = f.sub(&f.square(&m), &f.add(&s, &s));
        let y3 = f.sub(
            &f.mul(&m, &f.sub(&s, &x3)),
            &f.mul(&f.from_u64(8), &f.square(&y2)),
        );
        let z3 = f.mul(&f.from_u64(2), &f.mul(&p.y, &p.z));

        JacobianPoint::new(x3, y3, z3)
    }

    pub fn negate(&self, p: &JacobianPoint) -> JacobianPoint {
        if p.is_infinity() {
            return p.clone();
        }
        JacobianPoint::new(p.x.clone(), self.base.neg(&p.y), p.z.clone())
    }

    /// `k * P` by least-significant-bit-first double-and-add.
    pub fn multiply(&self, p: &JacobianPoint, k: &BigUint) -> JacobianPoint {
        <Self as Group>::scalar_mul(self, p, k)
    }

    /// `k * G` for the curve generator.
    pub fn mul_generator(&self, k: &BigUint) -> JacobianPoint {
        self.multiply(&self.generator_jacobian(), k)
    }

    /// `a * G + b * P`.
    pub fn double_scalar_mul_basepoint(
        &self,
        a: &BigUint,
        b: &BigUint,
        point: &JacobianPoint,
    ) -> JacobianPoint {
        self.add(&self.mul_generator(a), &self.multiply(point, b))
    }
}

impl Group for WeierstrassCurve {
    type Element = JacobianPoint;

    #[inline]
    fn identity(&self) -> JacobianPoint {
        JacobianPoint::infinity()
    }

    #[inline]
    fn is_identity(&self, element: &JacobianPoint) -> bool {
        element.is_infinity()
    }

    #[inline]
    fn combine(&self, a: &JacobianPoint, b: &JacobianPoint) -> JacobianPoint {
        WeierstrassCurve::add(self, a, b)
    }

    #[inline]
    fn double(&self, element: &JacobianPoint) -> JacobianPoint {
        WeierstrassCurve::double(self, element)
    }

    #[inline]
    fn negate(&self, element: &JacobianPoint) -> JacobianPoint {
        WeierstrassCurve::negate(self, element)
    }
}
