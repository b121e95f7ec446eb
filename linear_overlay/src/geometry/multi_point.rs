use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unordered collection of points, the point shaped output of an intersection.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint<T = f64> {
    pub points: Vec<Vector2<T>>,
}

impl<T> Default for MultiPoint<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MultiPoint<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        MultiPoint { points: Vec::new() }
    }

    #[inline]
    pub fn from_points(points: Vec<Vector2<T>>) -> Self {
        MultiPoint { points }
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

    /// Returns `true` if a point fuzzy equal to `point` is present.
    #[inline]
    pub fn contains_eps(&self, point: Vector2<T>, pos_equal_eps: T) -> bool {
        self.points.iter().any(|p| p.fuzzy_eq_eps(point, pos_equal_eps))
    }
}

impl<T> FromIterator<Vector2<T>> for MultiPoint<T> {
    fn from_iter<I: IntoIterator<Item = Vector2<T>>>(iter: I) -> Self {
        MultiPoint {
            points: iter.into_iter().collect(),
        }
    }
}
