use crate::core::{
    math::{seg_bounding_box, Vector2},
    traits::Real,
};
use static_aabb2d_index::AABB;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered sequence of points forming a connected polyline.
///
/// A linestring whose first and last points are equal is closed (a ring). Fewer than two points
/// or all points equal makes the linestring degenerate, it then only intersects as a point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LineString<T = f64> {
    pub points: Vec<Vector2<T>>,
}

impl<T> Default for LineString<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LineString<T>
where
    T: Real,
{
    /// Create a new empty [LineString].
    #[inline]
    pub fn new() -> Self {
        LineString { points: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        LineString {
            points: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn from_points(points: Vec<Vector2<T>>) -> Self {
        LineString { points }
    }

    /// Add a point to the end of the linestring.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.points.push(Vector2::new(x, y));
    }

    #[inline]
    pub fn push(&mut self, point: Vector2<T>) {
        self.points.push(point);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn first(&self) -> Option<Vector2<T>> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Vector2<T>> {
        self.points.last().copied()
    }

    /// Number of segments, `len() - 1` (zero for empty and single point linestrings).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns `true` if the linestring has at least 3 points and its first and last points are
    /// fuzzy equal.
    #[inline]
    pub fn is_closed_eps(&self, pos_equal_eps: T) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(f), Some(l)) if self.points.len() > 2 => f.fuzzy_eq_eps(*l, pos_equal_eps),
            _ => false,
        }
    }

    /// Returns `true` if every point is fuzzy equal to the first point (a zero length linestring).
    #[inline]
    pub fn is_degenerate_eps(&self, pos_equal_eps: T) -> bool {
        match self.points.first() {
            Some(f) => self.points.iter().all(|p| p.fuzzy_eq_eps(*f, pos_equal_eps)),
            None => true,
        }
    }

    /// Iterate the segments as pairs of (start, end) points.
    #[inline]
    pub fn iter_segments(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Total path length.
    pub fn path_length(&self) -> T {
        self.iter_segments()
            .fold(T::zero(), |acc, (p0, p1)| acc + (p1 - p0).length())
    }

    /// Reverse the point order in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Returns a copy with the point order reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_overlay::geometry::*;
    /// # use linear_overlay::linestring;
    /// let ls: LineString = linestring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
    /// let r = ls.reversed();
    /// assert_eq!(r, linestring![(1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
    /// ```
    #[inline]
    pub fn reversed(&self) -> Self {
        let mut r = self.clone();
        r.reverse();
        r
    }

    /// Bounding box of all points, `None` if the linestring is empty.
    pub fn extents(&self) -> Option<AABB<T>> {
        let first = self.points.first()?;
        let mut result = seg_bounding_box(*first, *first);
        for (p0, p1) in self.iter_segments() {
            let bb = seg_bounding_box(p0, p1);
            result.min_x = num_traits::real::Real::min(result.min_x, bb.min_x);
            result.min_y = num_traits::real::Real::min(result.min_y, bb.min_y);
            result.max_x = num_traits::real::Real::max(result.max_x, bb.max_x);
            result.max_y = num_traits::real::Real::max(result.max_y, bb.max_y);
        }

        Some(result)
    }
}

impl<T> Index<usize> for LineString<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> IndexMut<usize> for LineString<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.points[index]
    }
}

impl<T> FromIterator<Vector2<T>> for LineString<T> {
    fn from_iter<I: IntoIterator<Item = Vector2<T>>>(iter: I) -> Self {
        LineString {
            points: iter.into_iter().collect(),
        }
    }
}
