//! Point helpers for geometry on the unit sphere.

use nalgebra::Point3;
use octasphere_common::Float;

/// The point halfway along the chord between `a` and `b`.
#[inline]
pub fn midpoint<Real: Float>(a: &Point3<Real>, b: &Point3<Real>) -> Point3<Real> {
    nalgebra::center(a, b)
}

/// Project `p` onto the unit sphere by dividing it by its length.
///
/// Returns `None` for (near-)zero `p`, which has no direction to project along.
#[inline]
pub fn spherify<Real: Float>(p: &Point3<Real>) -> Option<Point3<Real>> {
    p.coords.try_normalize(Real::UNIT_TOLERANCE).map(Point3::from)
}

/// How far `p` is from the unit sphere.
#[inline]
pub fn unit_deviation<Real: Float>(p: &Point3<Real>) -> Real {
    (p.coords.norm() - Real::ONE).abs()
}

#[inline]
pub fn is_unit<Real: Float>(p: &Point3<Real>) -> bool {
    unit_deviation(p) <= Real::UNIT_TOLERANCE
}

/// Whether the triangle `[i, j, k]` faces away from the origin, i.e.
/// `(P_j - P_i) × (P_k - P_i) · P_i > 0`.
#[inline]
pub fn is_outward<Real: Float>([i, j, k]: &[Point3<Real>; 3]) -> bool {
    (j - i).cross(&(k - i)).dot(&i.coords) > Real::ZERO
}

/// Whether `p` sits on one of the poles (the `y` axis), where longitude is undefined.
#[inline]
pub fn is_pole<Real: Float>(p: &Point3<Real>) -> bool {
    Real::ONE - p.y.abs() <= Real::UNIT_TOLERANCE
}
