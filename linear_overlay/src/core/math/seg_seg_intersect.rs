use super::{base_math::parametric_from_point, point_from_parametric, Vector2};
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two line segments.
#[derive(Debug, Copy, Clone)]
pub enum SegSegIntr<T>
where
    T: Real,
{
    /// No intersect, segments are parallel and not collinear, or collinear and apart.
    NoIntersect,
    /// The segments intersect at a single point.
    TrueIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
    /// Segments are collinear and overlap each other by some non-zero length.
    ///
    /// `seg1_t0` and `seg2_t0` locate the same overlap end point on each segment (and likewise
    /// `seg1_t1` and `seg2_t1`). `seg2_t0 < seg2_t1` always holds, `seg1_t0 > seg1_t1` when the
    /// segments point in opposite directions.
    Overlapping {
        seg1_t0: T,
        seg1_t1: T,
        seg2_t0: T,
        seg2_t1: T,
    },
    /// The infinite lines intersect but one or both of the segments must be extended to reach it.
    FalseIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
}

/// Finds the intersect between the line segments `v1->v2` and `u1->u2`.
///
/// Parametric values use the segment equation `P(t) = p0 + t * (p1 - p0)`. Parametric values are
/// scaled by segment length before fuzzy comparing so `epsilon` is applied at the position scale.
///
/// Degenerate segments (both end points fuzzy equal) are treated as points, a point on the other
/// segment gives a [SegSegIntr::TrueIntersect] and two coincident points give
/// `TrueIntersect { seg1_t: 0, seg2_t: 0 }`.
///
/// Segments are collinear when all four end points lie within `epsilon` of the other segment's
/// line. Collinear segments touching only at an end point give a [SegSegIntr::TrueIntersect], not
/// an overlap. Swapping the segments swaps the parametric values of the result.
///
/// # Examples
///
/// ```
/// # use linear_overlay::core::math::*;
/// # use linear_overlay::core::traits::*;
/// let v1 = vec2(0.0, 0.0);
/// let v2 = vec2(4.0, 0.0);
/// let u1 = vec2(2.0, 0.0);
/// let u2 = vec2(6.0, 0.0);
/// match seg_seg_intr(v1, v2, u1, u2, 1e-8) {
///     SegSegIntr::Overlapping { seg1_t0, seg1_t1, seg2_t0, seg2_t1 } => {
///         assert!(seg1_t0.fuzzy_eq(0.5));
///         assert!(seg1_t1.fuzzy_eq(1.0));
///         assert!(seg2_t0.fuzzy_eq(0.0));
///         assert!(seg2_t1.fuzzy_eq(0.5));
///     }
///     r => unreachable!("expected overlap, got {:?}", r),
/// }
/// ```
pub fn seg_seg_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
    epsilon: T,
) -> SegSegIntr<T>
where
    T: Real,
{
    // parametric form with perpendicular products
    // http://geomalgorithms.com/a05-_intersect-1.html
    use SegSegIntr::*;

    let v = v2 - v1;
    let u = u2 - u1;
    let v_pdot_u = v.perp_dot(u);
    let w = v1 - u1;

    let eps = epsilon;
    let seg1_length = v.length();
    let seg2_length = u.length();

    let v_is_point = seg1_length.fuzzy_eq_zero_eps(eps);
    let u_is_point = seg2_length.fuzzy_eq_zero_eps(eps);

    if v_is_point && u_is_point {
        if v1.fuzzy_eq_eps(u1, eps) {
            return TrueIntersect {
                seg1_t: T::zero(),
                seg2_t: T::zero(),
            };
        }
        return NoIntersect;
    }

    if v_is_point {
        return match point_on_seg_t(u1, u2, seg2_length, v1, eps) {
            Some(seg2_t) => TrueIntersect {
                seg1_t: T::zero(),
                seg2_t,
            },
            None => NoIntersect,
        };
    }

    if u_is_point {
        return match point_on_seg_t(v1, v2, seg1_length, u1, eps) {
            Some(seg1_t) => TrueIntersect {
                seg1_t,
                seg2_t: T::zero(),
            },
            None => NoIntersect,
        };
    }

    // collinear only if every end point lies on the line of the other segment, testing both
    // segments against each other keeps the result independent of argument order
    let collinear = on_line(u1, u2, seg2_length, v1, eps)
        && on_line(u1, u2, seg2_length, v2, eps)
        && on_line(v1, v2, seg1_length, u1, eps)
        && on_line(v1, v2, seg1_length, u2, eps);

    if !collinear {
        if v_pdot_u == T::zero() {
            // parallel and apart
            return NoIntersect;
        }

        let seg1_t = u.perp_dot(w) / v_pdot_u;
        let seg2_t = v.perp_dot(w) / v_pdot_u;
        if !(seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, eps)
            || !(seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, eps)
        {
            return FalseIntersect { seg1_t, seg2_t };
        }

        return TrueIntersect {
            seg1_t: clamp_unit(seg1_t),
            seg2_t: clamp_unit(seg2_t),
        };
    }

    // collinear, find where v1 and v2 sit along u
    let mut seg2_t0 = parametric_from_point(u1, u2, v1);
    let mut seg2_t1 = parametric_from_point(u1, u2, v2);
    if seg2_t0 > seg2_t1 {
        std::mem::swap(&mut seg2_t0, &mut seg2_t1);
    }

    // using threshold check here to make intersect "sticky" to prefer considering it an intersect
    if !(seg2_t0 * seg2_length).fuzzy_lt_eps(seg2_length, eps)
        || !(seg2_t1 * seg2_length).fuzzy_gt_eps(T::zero(), eps)
    {
        return NoIntersect;
    }

    seg2_t0 = clamp_unit(seg2_t0);
    seg2_t1 = clamp_unit(seg2_t1);

    let p0 = point_from_parametric(u1, u2, seg2_t0);
    let p1 = point_from_parametric(u1, u2, seg2_t1);
    let seg1_t0 = clamp_unit(parametric_from_point(v1, v2, p0));
    let seg1_t1 = clamp_unit(parametric_from_point(v1, v2, p1));

    if ((seg2_t1 - seg2_t0) * seg2_length).fuzzy_eq_zero_eps(eps) {
        // segments line up end to end
        return TrueIntersect {
            seg1_t: seg1_t0,
            seg2_t: seg2_t0,
        };
    }

    Overlapping {
        seg1_t0,
        seg1_t1,
        seg2_t0,
        seg2_t1,
    }
}

/// Parametric value of `point` on the segment `p0->p1` if the point lies on it.
#[inline]
fn point_on_seg_t<T>(
    p0: Vector2<T>,
    p1: Vector2<T>,
    seg_length: T,
    point: Vector2<T>,
    eps: T,
) -> Option<T>
where
    T: Real,
{
    if !on_line(p0, p1, seg_length, point, eps) {
        return None;
    }

    let d = p1 - p0;
    let t = d.dot(point - p0) / (seg_length * seg_length);
    if (t * seg_length).fuzzy_in_range_eps(T::zero(), seg_length, eps) {
        Some(clamp_unit(t))
    } else {
        None
    }
}

/// Returns `true` if `point` is within `eps` of the infinite line through `p0` and `p1`.
#[inline]
fn on_line<T>(p0: Vector2<T>, p1: Vector2<T>, seg_length: T, point: Vector2<T>, eps: T) -> bool
where
    T: Real,
{
    ((p1 - p0).perp_dot(point - p0) / seg_length).fuzzy_eq_zero_eps(eps)
}

#[inline]
fn clamp_unit<T>(t: T) -> T
where
    T: Real,
{
    num_traits::real::Real::min(num_traits::real::Real::max(t, T::zero()), T::one())
}
