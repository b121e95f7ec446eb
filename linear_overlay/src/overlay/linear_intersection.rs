use super::{
    find_intersects, IntersectOptions, IntersectionOutput, OutputShape, OverlappingIntersect,
    OverlayResult,
};
use crate::{
    core::{math::Vector2, traits::Real},
    geometry::{LineString, Linear},
};
use std::cmp::Ordering;

/// Trait for a linear/linear intersection operation.
///
/// [Intersector] is the implementation provided by this crate, the verifier accepts any other
/// implementation to test it the same way.
pub trait LinearIntersection<T>
where
    T: Real,
{
    /// Name used when reporting results of this operation.
    fn name(&self) -> &str {
        "intersection"
    }

    /// Compute the intersection of `geom1` and `geom2`, appending it to `output`.
    fn intersection<G1, G2, O>(&self, geom1: &G1, geom2: &G2, output: &mut O)
    where
        G1: Linear<T> + ?Sized,
        G2: Linear<T> + ?Sized,
        O: IntersectionOutput<T> + ?Sized;
}

/// The linear/linear intersection implemented by [intersection].
#[derive(Debug, Copy, Clone)]
pub struct Intersector<T> {
    /// Fuzzy comparison epsilon used for determining if two positions are equal.
    pub pos_equal_eps: T,
}

impl<T> Intersector<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: IntersectOptions::<T>::new().pos_equal_eps,
        }
    }

    #[inline]
    pub fn with_pos_equal_eps(pos_equal_eps: T) -> Self {
        Self { pos_equal_eps }
    }
}

impl<T> Default for Intersector<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinearIntersection<T> for Intersector<T>
where
    T: Real,
{
    fn intersection<G1, G2, O>(&self, geom1: &G1, geom2: &G2, output: &mut O)
    where
        G1: Linear<T> + ?Sized,
        G2: Linear<T> + ?Sized,
        O: IntersectionOutput<T> + ?Sized,
    {
        // options never carry a spatial index here, the operand order changes between calls
        let options = IntersectOptions::with_pos_equal_eps(self.pos_equal_eps);
        intersection(geom1, geom2, output, &options);
    }
}

/// Computes the intersection of two linear geometries and appends it to `output`.
///
/// Into a linestring container the result is the overlapping parts, each following the vertexes
/// and direction of `geom1`. Pieces continuing along the same `geom1` linestring are joined into a
/// single linestring, including across the start/end of a closed `geom1` linestring. Isolated
/// intersect points are not part of a linestring result.
///
/// Into a point container the result is every intersect point plus the end points of the overlap
/// between every pair of overlapping segments, without duplicates, in the order found. The
/// segment pairs do not depend on operand order so neither does the point result.
///
/// # Examples
///
/// ```
/// # use linear_overlay::geometry::*;
/// # use linear_overlay::overlay::*;
/// # use linear_overlay::linestring;
/// let ls1: LineString = linestring![(0.0, 0.0), (4.0, 0.0)];
/// let ls2: LineString = linestring![(2.0, 0.0), (6.0, 0.0)];
/// let mut result = MultiLineString::new();
/// intersection(&ls1, &ls2, &mut result, &IntersectOptions::new());
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0], linestring![(2.0, 0.0), (4.0, 0.0)]);
///
/// // crossing segments only share a point
/// let ls3: LineString = linestring![(1.0, -1.0), (1.0, 1.0)];
/// let mut lines: Vec<LineString> = Vec::new();
/// intersection(&ls1, &ls3, &mut lines, &IntersectOptions::new());
/// assert!(lines.is_empty());
/// let mut points = MultiPoint::new();
/// intersection(&ls1, &ls3, &mut points, &IntersectOptions::new());
/// assert_eq!(points.len(), 1);
/// ```
pub fn intersection<T, G1, G2, O>(
    geom1: &G1,
    geom2: &G2,
    output: &mut O,
    options: &IntersectOptions<T>,
) where
    T: Real,
    G1: Linear<T> + ?Sized,
    G2: Linear<T> + ?Sized,
    O: IntersectionOutput<T> + ?Sized,
{
    let pos_equal_eps = options.pos_equal_eps;
    let intrs = find_intersects(geom1, geom2, options);

    let mut result = OverlayResult::new_empty();
    match O::SHAPE {
        OutputShape::Linestrings => {
            result.linestrings =
                stitch_overlaps(geom1, &intrs.overlapping_intersects, pos_equal_eps);
        }
        OutputShape::Points => {
            let candidates = intrs
                .point_intersects
                .iter()
                .map(|intr| intr.point)
                .chain(
                    intrs
                        .overlapping_intersects
                        .iter()
                        .flat_map(|intr| [intr.point1, intr.point2]),
                );

            let mut points: Vec<Vector2<T>> = Vec::new();
            for p in candidates {
                if !points.iter().any(|q| q.fuzzy_eq_eps(p, pos_equal_eps)) {
                    points.push(p);
                }
            }
            result.points = points;
        }
    }

    output.append_result(result);
}

/// A linestring being built from overlap intervals along one `geom1` linestring.
struct Piece<T> {
    points: Vec<Vector2<T>>,
    start_seg: usize,
    end_seg: usize,
    end_t: T,
}

impl<T> Piece<T>
where
    T: Real,
{
    fn start(intr: &OverlappingIntersect<T>) -> Self {
        Piece {
            points: vec![intr.point1, intr.point2],
            start_seg: intr.seg1.seg_index,
            end_seg: intr.seg1.seg_index,
            end_t: intr.seg1_t1,
        }
    }

    #[inline]
    fn end_point(&self) -> Vector2<T> {
        self.points[self.points.len() - 1]
    }

    /// Try to extend the piece with the next overlap interval (intervals sorted by position along
    /// the linestring), returns `false` if the interval does not continue this piece.
    fn try_extend(
        &mut self,
        linestring: &LineString<T>,
        intr: &OverlappingIntersect<T>,
        pos_equal_eps: T,
    ) -> bool {
        let seg = intr.seg1.seg_index;
        let end = self.end_point();
        if seg == self.end_seg {
            if intr.seg1_t0 > self.end_t && !intr.point1.fuzzy_eq_eps(end, pos_equal_eps) {
                return false;
            }

            if intr.seg1_t1 > self.end_t {
                // same segment so collinear, move the end point instead of adding a vertex
                let last = self.points.len() - 1;
                self.points[last] = intr.point2;
                self.end_t = intr.seg1_t1;
            }
            return true;
        }

        // next segment(s), the piece must have reached the end of its segment and every vertex
        // up to the start of the new segment must coincide (zero length segments in between)
        if !intr.point1.fuzzy_eq_eps(end, pos_equal_eps) {
            return false;
        }

        if ((self.end_seg + 1)..=seg).any(|i| !linestring[i].fuzzy_eq_eps(end, pos_equal_eps)) {
            return false;
        }

        self.points.push(intr.point2);
        self.end_seg = seg;
        self.end_t = intr.seg1_t1;
        true
    }

    fn into_linestring(self) -> LineString<T> {
        LineString::from_points(self.points)
    }
}

/// Join the overlap intervals found along `geom1` into maximal linestrings.
fn stitch_overlaps<T, G>(
    geom1: &G,
    overlaps: &[OverlappingIntersect<T>],
    pos_equal_eps: T,
) -> Vec<LineString<T>>
where
    T: Real,
    G: Linear<T> + ?Sized,
{
    let mut result = Vec::new();
    if overlaps.is_empty() {
        return result;
    }

    let mut sorted: Vec<&OverlappingIntersect<T>> = overlaps.iter().collect();
    sorted.sort_by(|a, b| {
        a.seg1
            .cmp(&b.seg1)
            .then_with(|| a.seg1_t0.partial_cmp(&b.seg1_t0).unwrap_or(Ordering::Equal))
    });

    let linestrings = geom1.linestrings();
    let mut group_start = 0;
    while group_start < sorted.len() {
        let ls_index = sorted[group_start].seg1.linestring_index;
        let group_end = sorted[group_start..]
            .iter()
            .position(|intr| intr.seg1.linestring_index != ls_index)
            .map_or(sorted.len(), |n| group_start + n);

        let linestring = &linestrings[ls_index];
        let mut pieces: Vec<Piece<T>> = Vec::new();
        for intr in &sorted[group_start..group_end] {
            let extended = match pieces.last_mut() {
                Some(piece) => piece.try_extend(linestring, intr, pos_equal_eps),
                None => false,
            };

            if !extended {
                pieces.push(Piece::start(intr));
            }
        }

        join_closed_ends(linestring, &mut pieces, pos_equal_eps);
        result.extend(pieces.into_iter().map(Piece::into_linestring));
        group_start = group_end;
    }

    result
}

/// For a closed linestring, join the last piece onto the first piece if they meet at the shared
/// start/end vertex.
fn join_closed_ends<T>(linestring: &LineString<T>, pieces: &mut Vec<Piece<T>>, pos_equal_eps: T)
where
    T: Real,
{
    if pieces.len() < 2 || !linestring.is_closed_eps(pos_equal_eps) {
        return;
    }

    let (Some(start_vertex), Some(end_vertex)) = (linestring.first(), linestring.last()) else {
        return;
    };

    let first = &pieces[0];
    let last = &pieces[pieces.len() - 1];
    let first_at_start =
        first.start_seg == 0 && first.points[0].fuzzy_eq_eps(start_vertex, pos_equal_eps);
    let last_at_end = last.end_seg + 2 == linestring.len()
        && last.end_point().fuzzy_eq_eps(end_vertex, pos_equal_eps);
    if !first_at_start || !last_at_end {
        return;
    }

    let first = pieces.remove(0);
    if let Some(last) = pieces.last_mut() {
        last.points.extend(first.points.into_iter().skip(1));
        last.end_seg = first.end_seg;
        last.end_t = first.end_t;
    }
}
