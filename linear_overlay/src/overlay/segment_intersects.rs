use super::{
    IntersectOptions, IntersectVisitor, IntersectsCollection, OverlappingIntersect,
    PointIntersect, SegIntersect, SegRef,
};
use crate::{
    core::{
        math::{point_from_parametric, seg_bounding_box, seg_seg_intr, SegSegIntr, Vector2},
        traits::{ControlFlow, Real},
        Control,
    },
    geometry::{LineString, Linear},
};
use static_aabb2d_index as aabb_index;
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder};

/// Returns the start and end point of the segment at `seg_index`.
///
/// A linestring with a single point is treated as one zero length segment so it still intersects
/// as a point.
#[inline]
pub fn seg_points<T>(linestring: &LineString<T>, seg_index: usize) -> (Vector2<T>, Vector2<T>)
where
    T: Real,
{
    if linestring.len() == 1 {
        return (linestring[0], linestring[0]);
    }

    (linestring[seg_index], linestring[seg_index + 1])
}

/// Iterate all segment references of a linear geometry in index order.
pub fn iter_seg_refs<'a, T, G>(geom: &'a G) -> impl Iterator<Item = SegRef> + 'a
where
    T: Real,
    G: Linear<T> + ?Sized,
{
    geom.linestrings()
        .iter()
        .enumerate()
        .flat_map(|(ls_index, ls)| {
            let seg_count = if ls.len() == 1 { 1 } else { ls.segment_count() };
            (0..seg_count).map(move |seg_index| SegRef::new(ls_index, seg_index))
        })
}

/// Creates a spatial index of all the segment bounding boxes of a linear geometry.
///
/// Index item `i` is the `i`th segment returned by [iter_seg_refs]. Returns `None` if the geometry
/// has no segments.
///
/// # Panics
///
/// Panics if `T` fails to cast to/from a `u16` while building the index.
pub fn create_segment_aabb_index<T, G>(geom: &G) -> Option<StaticAABB2DIndex<T>>
where
    T: Real,
    G: Linear<T> + ?Sized,
{
    let count = iter_seg_refs(geom).count();
    if count == 0 {
        return None;
    }

    let mut builder = StaticAABB2DIndexBuilder::new(count);
    for seg in iter_seg_refs(geom) {
        let (p0, p1) = seg_points(&geom.linestrings()[seg.linestring_index], seg.seg_index);
        let bb = seg_bounding_box(p0, p1);
        builder.add(bb.min_x, bb.min_y, bb.max_x, bb.max_y);
    }

    Some(unwrap_spatial_index(builder))
}

/// Visits all intersects between the segments of `geom1` and the segments of `geom2`.
///
/// Segments of `geom2` are looked up through a spatial index (taken from `options` or built
/// here). The visitor may return a breaking control flow value to stop early.
///
/// Parametric values and overlap points reported are along the `geom1` segments.
pub fn visit_segment_intersects<T, G1, G2, C, V>(
    geom1: &G1,
    geom2: &G2,
    options: &IntersectOptions<T>,
    visitor: &mut V,
) -> C
where
    T: Real,
    G1: Linear<T> + ?Sized,
    G2: Linear<T> + ?Sized,
    C: ControlFlow,
    V: IntersectVisitor<T, C>,
{
    let seg_refs2: Vec<SegRef> = iter_seg_refs(geom2).collect();
    if seg_refs2.is_empty() {
        return C::continuing();
    }

    let pos_equal_eps = options.pos_equal_eps;
    let constructed_index;
    let geom2_aabb_index = match options.geom2_aabb_index {
        Some(x) => x,
        None => match create_segment_aabb_index(geom2) {
            Some(x) => {
                constructed_index = x;
                &constructed_index
            }
            None => return C::continuing(),
        },
    };

    let linestrings1 = geom1.linestrings();
    let linestrings2 = geom2.linestrings();
    let mut query_stack = Vec::with_capacity(8);
    let mut cf = C::continuing();

    for seg1 in iter_seg_refs(geom1) {
        let (v1, v2) = seg_points(&linestrings1[seg1.linestring_index], seg1.seg_index);
        let mut query_visitor = |hit: usize| {
            let seg2 = seg_refs2[hit];
            let (u1, u2) = seg_points(&linestrings2[seg2.linestring_index], seg2.seg_index);
            match seg_seg_intr(v1, v2, u1, u2, pos_equal_eps) {
                SegSegIntr::NoIntersect | SegSegIntr::FalseIntersect { .. } => {}
                SegSegIntr::TrueIntersect { seg1_t, .. } => {
                    let point = point_from_parametric(v1, v2, seg1_t);
                    cf = visitor.visit_point_intr(PointIntersect::new(seg1, seg2, seg1_t, point));
                }
                SegSegIntr::Overlapping {
                    seg1_t0, seg1_t1, ..
                } => {
                    let (t0, t1) = if seg1_t0 <= seg1_t1 {
                        (seg1_t0, seg1_t1)
                    } else {
                        (seg1_t1, seg1_t0)
                    };
                    cf = visitor.visit_overlapping_intr(OverlappingIntersect::new(
                        seg1,
                        seg2,
                        t0,
                        t1,
                        point_from_parametric(v1, v2, t0),
                        point_from_parametric(v1, v2, t1),
                    ));
                }
            }

            if cf.should_break() {
                return aabb_index::Control::Break(());
            }

            aabb_index::Control::Continue
        };

        let bb = seg_bounding_box(v1, v2);
        geom2_aabb_index.visit_query_with_stack(
            bb.min_x - pos_equal_eps,
            bb.min_y - pos_equal_eps,
            bb.max_x + pos_equal_eps,
            bb.max_y + pos_equal_eps,
            &mut query_visitor,
            &mut query_stack,
        );

        if cf.should_break() {
            break;
        }
    }

    cf
}

/// Find all the segment intersects between `geom1` and `geom2`.
///
/// # Examples
///
/// ```
/// # use linear_overlay::geometry::*;
/// # use linear_overlay::overlay::*;
/// # use linear_overlay::linestring;
/// let ls1: LineString = linestring![(0.0, 0.0), (4.0, 0.0)];
/// let ls2: LineString = linestring![(2.0, 0.0), (6.0, 0.0), (6.0, 2.0), (1.0, -1.0)];
/// let intrs = find_intersects(&ls1, &ls2, &IntersectOptions::new());
/// assert_eq!(intrs.overlapping_intersects.len(), 1);
/// assert_eq!(intrs.point_intersects.len(), 1);
/// ```
pub fn find_intersects<T, G1, G2>(
    geom1: &G1,
    geom2: &G2,
    options: &IntersectOptions<T>,
) -> IntersectsCollection<T>
where
    T: Real,
    G1: Linear<T> + ?Sized,
    G2: Linear<T> + ?Sized,
{
    let mut result = IntersectsCollection::new_empty();
    let _: Control = visit_segment_intersects(geom1, geom2, options, &mut result);
    result
}

/// Returns `true` if the two geometries share at least one point, stops at the first intersect
/// found.
pub fn intersects<T, G1, G2>(geom1: &G1, geom2: &G2, options: &IntersectOptions<T>) -> bool
where
    T: Real,
    G1: Linear<T> + ?Sized,
    G2: Linear<T> + ?Sized,
{
    let mut visitor = |_intr: SegIntersect<T>| Control::Break(());
    visit_segment_intersects(geom1, geom2, options, &mut visitor).should_break()
}

fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: Real,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast coordinate type: {e}")
            }
        },
    }
}
