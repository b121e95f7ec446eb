use crate::{
    core::{math::Vector2, traits::Real},
    geometry::{LineString, MultiLineString, MultiPoint},
};
use std::collections::VecDeque;

/// Shape of the intersection result a container receives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputShape {
    /// Overlapping parts as linestrings, isolated points are dropped.
    Linestrings,
    /// All intersection points, including the end points of overlapping parts.
    Points,
}

/// Computed intersection handed to an [IntersectionOutput].
#[derive(Debug, Clone)]
pub struct OverlayResult<T> {
    pub linestrings: Vec<LineString<T>>,
    pub points: Vec<Vector2<T>>,
}

impl<T> OverlayResult<T> {
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            linestrings: Vec::new(),
            points: Vec::new(),
        }
    }
}

/// Trait for containers that an intersection result can be written into.
///
/// Linestring containers (`Vec`, `VecDeque`, [MultiLineString]) and point containers (`Vec`,
/// `VecDeque`, [MultiPoint]) all implement it so the same intersection call fills any of them.
pub trait IntersectionOutput<T>
where
    T: Real,
{
    /// The result shape this container holds, the intersection only computes what is needed.
    const SHAPE: OutputShape;

    /// Append the part of `result` matching [IntersectionOutput::SHAPE].
    fn append_result(&mut self, result: OverlayResult<T>);

    /// Remove everything held so the container can be reused.
    fn clear_output(&mut self);
}

/// Linestring containers that can also be read back for comparing results.
pub trait LinestringOutput<T>: IntersectionOutput<T> + Default
where
    T: Real,
{
    fn linestring_refs(&self) -> Vec<&LineString<T>>;
}

/// Point containers that can also be read back for comparing results.
pub trait PointOutput<T>: IntersectionOutput<T> + Default
where
    T: Real,
{
    fn point_values(&self) -> Vec<Vector2<T>>;
}

macro_rules! impl_linestring_output {
    ($ty:ty) => {
        impl<T> IntersectionOutput<T> for $ty
        where
            T: Real,
        {
            const SHAPE: OutputShape = OutputShape::Linestrings;

            #[inline]
            fn append_result(&mut self, result: OverlayResult<T>) {
                self.extend(result.linestrings);
            }

            #[inline]
            fn clear_output(&mut self) {
                self.clear();
            }
        }

        impl<T> LinestringOutput<T> for $ty
        where
            T: Real,
        {
            #[inline]
            fn linestring_refs(&self) -> Vec<&LineString<T>> {
                self.iter().collect()
            }
        }
    };
}

macro_rules! impl_point_output {
    ($ty:ty) => {
        impl<T> IntersectionOutput<T> for $ty
        where
            T: Real,
        {
            const SHAPE: OutputShape = OutputShape::Points;

            #[inline]
            fn append_result(&mut self, result: OverlayResult<T>) {
                self.extend(result.points);
            }

            #[inline]
            fn clear_output(&mut self) {
                self.clear();
            }
        }

        impl<T> PointOutput<T> for $ty
        where
            T: Real,
        {
            #[inline]
            fn point_values(&self) -> Vec<Vector2<T>> {
                self.iter().copied().collect()
            }
        }
    };
}

impl_linestring_output!(Vec<LineString<T>>);
impl_linestring_output!(VecDeque<LineString<T>>);
impl_point_output!(Vec<Vector2<T>>);
impl_point_output!(VecDeque<Vector2<T>>);

impl<T> IntersectionOutput<T> for MultiLineString<T>
where
    T: Real,
{
    const SHAPE: OutputShape = OutputShape::Linestrings;

    #[inline]
    fn append_result(&mut self, result: OverlayResult<T>) {
        self.linestrings.extend(result.linestrings);
    }

    #[inline]
    fn clear_output(&mut self) {
        self.clear();
    }
}

impl<T> LinestringOutput<T> for MultiLineString<T>
where
    T: Real,
{
    #[inline]
    fn linestring_refs(&self) -> Vec<&LineString<T>> {
        self.iter().collect()
    }
}

impl<T> IntersectionOutput<T> for MultiPoint<T>
where
    T: Real,
{
    const SHAPE: OutputShape = OutputShape::Points;

    #[inline]
    fn append_result(&mut self, result: OverlayResult<T>) {
        self.points.extend(result.points);
    }

    #[inline]
    fn clear_output(&mut self) {
        self.clear();
    }
}

impl<T> PointOutput<T> for MultiPoint<T>
where
    T: Real,
{
    #[inline]
    fn point_values(&self) -> Vec<Vector2<T>> {
        self.points.clone()
    }
}
