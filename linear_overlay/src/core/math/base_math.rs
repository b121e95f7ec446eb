use super::Vector2;
use crate::core::traits::Real;
use static_aabb2d_index::AABB;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use linear_overlay::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Returns the point on the line segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the parametric value on the line segment going from `p0` to `p1` at the `point` given.
///
/// Assumes the `point` lies on the line. The coordinate axis with the larger extent is used to
/// avoid dividing by a (near) zero delta for vertical and horizontal segments.
///
/// # Examples
///
/// ```
/// # use linear_overlay::core::math::*;
/// # use linear_overlay::core::traits::*;
/// let t = parametric_from_point(vec2(0.0, 0.0), vec2(0.0, 4.0), vec2(0.0, 1.0));
/// assert!(t.fuzzy_eq(0.25));
/// ```
#[inline]
pub fn parametric_from_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    let d = p1 - p0;
    if d.x.abs() < d.y.abs() {
        (point.y - p0.y) / d.y
    } else {
        (point.x - p0.x) / d.x
    }
}

/// Returns `true` if the vertex `p1` between `p0` and `p2` can be removed without changing the
/// path, i.e. all three points are collinear and the path continues in the same direction.
///
/// # Examples
///
/// ```
/// # use linear_overlay::core::math::*;
/// assert!(is_straight_through(vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(3.0, 0.0), 1e-8));
/// // spike doubling back on itself is not straight through
/// assert!(!is_straight_through(vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(1.0, 0.0), 1e-8));
/// ```
#[inline]
pub fn is_straight_through<T>(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>, epsilon: T) -> bool
where
    T: Real,
{
    let v1 = p1 - p0;
    let v2 = p2 - p1;
    let len1 = v1.length();
    let len2 = v2.length();
    if len1.fuzzy_eq_zero_eps(epsilon) || len2.fuzzy_eq_zero_eps(epsilon) {
        return false;
    }

    // perpendicular distance of p2 from the p0->p1 line
    (v1.perp_dot(v2) / len1).fuzzy_eq_zero_eps(epsilon) && v1.dot(v2) > T::zero()
}

/// Bounding box of the line segment `p0` to `p1`.
#[inline]
pub fn seg_bounding_box<T>(p0: Vector2<T>, p1: Vector2<T>) -> AABB<T>
where
    T: Real,
{
    let (min_x, max_x) = min_max(p0.x, p1.x);
    let (min_y, max_y) = min_max(p0.y, p1.y);
    AABB::new(min_x, min_y, max_x, max_y)
}
