//! Supporting public types used by the overlay functions.

use crate::core::{
    math::Vector2,
    traits::{ControlFlow, Real},
};
use static_aabb2d_index::StaticAABB2DIndex;

/// Identifies one segment of a linear geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegRef {
    /// Index of the linestring within the geometry.
    pub linestring_index: usize,
    /// Index of the segment start point within the linestring.
    pub seg_index: usize,
}

impl SegRef {
    #[inline]
    pub fn new(linestring_index: usize, seg_index: usize) -> Self {
        Self {
            linestring_index,
            seg_index,
        }
    }
}

/// Represents a point intersect between a segment of the first geometry and a segment of the
/// second geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointIntersect<T> {
    pub seg1: SegRef,
    pub seg2: SegRef,
    /// Parametric value of the intersect along the first geometry segment.
    pub seg1_t: T,
    pub point: Vector2<T>,
}

impl<T> PointIntersect<T> {
    #[inline]
    pub fn new(seg1: SegRef, seg2: SegRef, seg1_t: T, point: Vector2<T>) -> Self {
        Self {
            seg1,
            seg2,
            seg1_t,
            point,
        }
    }
}

/// Represents a collinear overlap between a segment of the first geometry and a segment of the
/// second geometry.
///
/// Parametric values are along the first geometry segment with `seg1_t0 <= seg1_t1`, `point1` is
/// at `seg1_t0` and `point2` is at `seg1_t1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OverlappingIntersect<T> {
    pub seg1: SegRef,
    pub seg2: SegRef,
    pub seg1_t0: T,
    pub seg1_t1: T,
    pub point1: Vector2<T>,
    pub point2: Vector2<T>,
}

impl<T> OverlappingIntersect<T> {
    #[inline]
    pub fn new(
        seg1: SegRef,
        seg2: SegRef,
        seg1_t0: T,
        seg1_t1: T,
        point1: Vector2<T>,
        point2: Vector2<T>,
    ) -> Self {
        Self {
            seg1,
            seg2,
            seg1_t0,
            seg1_t1,
            point1,
            point2,
        }
    }
}

/// Either kind of segment intersect, passed to closure visitors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegIntersect<T> {
    Point(PointIntersect<T>),
    Overlapping(OverlappingIntersect<T>),
}

/// Trait for visiting segment intersects between two linear geometries.
pub trait IntersectVisitor<T, C>
where
    T: Real,
    C: ControlFlow,
{
    fn visit_point_intr(&mut self, intr: PointIntersect<T>) -> C;
    fn visit_overlapping_intr(&mut self, intr: OverlappingIntersect<T>) -> C;
}

impl<T, C, F> IntersectVisitor<T, C> for F
where
    T: Real,
    C: ControlFlow,
    F: FnMut(SegIntersect<T>) -> C,
{
    #[inline]
    fn visit_point_intr(&mut self, intr: PointIntersect<T>) -> C {
        self(SegIntersect::Point(intr))
    }

    #[inline]
    fn visit_overlapping_intr(&mut self, intr: OverlappingIntersect<T>) -> C {
        self(SegIntersect::Overlapping(intr))
    }
}

/// Collection of all the segment intersects found between two linear geometries.
///
/// A point shared by several segments (e.g. a vertex of one geometry lying on the other) is
/// recorded once per segment pair.
#[derive(Debug, Clone)]
pub struct IntersectsCollection<T> {
    pub point_intersects: Vec<PointIntersect<T>>,
    pub overlapping_intersects: Vec<OverlappingIntersect<T>>,
}

impl<T> IntersectsCollection<T> {
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            point_intersects: Vec::new(),
            overlapping_intersects: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.point_intersects.is_empty() && self.overlapping_intersects.is_empty()
    }
}

impl<T, C> IntersectVisitor<T, C> for IntersectsCollection<T>
where
    T: Real,
    C: ControlFlow,
{
    #[inline]
    fn visit_point_intr(&mut self, intr: PointIntersect<T>) -> C {
        self.point_intersects.push(intr);
        C::continuing()
    }

    #[inline]
    fn visit_overlapping_intr(&mut self, intr: OverlappingIntersect<T>) -> C {
        self.overlapping_intersects.push(intr);
        C::continuing()
    }
}

/// Struct to hold options parameters used when finding intersects between linear geometries.
#[derive(Debug, Clone)]
pub struct IntersectOptions<'a, T>
where
    T: Real,
{
    /// Spatial index of all the segment bounding boxes of the second geometry. If `None` is given
    /// then it will be computed internally. The index must hold the segments in the order produced
    /// by [create_segment_aabb_index](crate::overlay::create_segment_aabb_index).
    pub geom2_aabb_index: Option<&'a StaticAABB2DIndex<T>>,
    /// Fuzzy comparison epsilon used for determining if two positions are equal.
    pub pos_equal_eps: T,
}

impl<'a, T> IntersectOptions<'a, T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            geom2_aabb_index: None,
            pos_equal_eps: T::from(1e-5).unwrap_or_else(T::fuzzy_epsilon),
        }
    }

    #[inline]
    pub fn with_pos_equal_eps(pos_equal_eps: T) -> Self {
        Self {
            geom2_aabb_index: None,
            pos_equal_eps,
        }
    }
}

impl<'a, T> Default for IntersectOptions<'a, T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
