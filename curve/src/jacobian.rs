use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::affine::AffinePoint;

/// Point in Jacobian coordinates `(X : Y : Z)` with `(x, y) = (X/Z^2, Y/Z^3)`.
///
/// `Z = 0` is the point at infinity. Structural equality is not group
/// equality; compare with [`crate::WeierstrassCurve::points_equal`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JacobianPoint {
    pub x: BigUint,
    pub y: BigUint,
    pub z: BigUint,
}

impl JacobianPoint {
    pub fn new(x: BigUint, y: BigUint, z: BigUint) -> Self {
        JacobianPoint { x, y, z }
    }

    /// The point at infinity: (0 : 1 : 0).
    pub fn infinity() -> Self {
        JacobianPoint::new(BigUint::zero(), BigUint::one(), BigUint::zero())
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn from_affine(point: &AffinePoint) -> Self {
        JacobianPoint::new(point.x.clone(), point.y.clone(), BigUint::one())
    }
}

impl From<AffinePoint> for JacobianPoint {
    fn from(point: AffinePoint) -> Self {
        JacobianPoint::new(point.x, point.y, BigUint::one())
    }
}

impl From<&AffinePoint> for JacobianPoint {
    fn from(point: &AffinePoint) -> Self {
        JacobianPoint::from_affine(point)
    }
}
