use super::LineString;
use crate::core::traits::Real;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Collection of linestrings forming one geometric result.
///
/// The linestring order carries no meaning, equality between results is decided by
/// [MultiLinestringEquals](crate::equality::MultiLinestringEquals), not by `PartialEq`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString<T = f64> {
    pub linestrings: Vec<LineString<T>>,
}

impl<T> Default for MultiLineString<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MultiLineString<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        MultiLineString {
            linestrings: Vec::new(),
        }
    }

    #[inline]
    pub fn from_linestrings(linestrings: Vec<LineString<T>>) -> Self {
        MultiLineString { linestrings }
    }

    #[inline]
    pub fn push(&mut self, linestring: LineString<T>) {
        self.linestrings.push(linestring);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.linestrings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.linestrings.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.linestrings.clear();
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, LineString<T>> {
        self.linestrings.iter()
    }

    /// Reverse each linestring and the linestring order in place.
    pub fn reverse(&mut self) {
        self.linestrings.reverse();
        for ls in self.linestrings.iter_mut() {
            ls.reverse();
        }
    }

    /// Returns a reversed copy, see [MultiLineString::reverse].
    #[inline]
    pub fn reversed(&self) -> Self {
        let mut r = self.clone();
        r.reverse();
        r
    }
}

impl<T> Index<usize> for MultiLineString<T> {
    type Output = LineString<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.linestrings[index]
    }
}

impl<T> FromIterator<LineString<T>> for MultiLineString<T> {
    fn from_iter<I: IntoIterator<Item = LineString<T>>>(iter: I) -> Self {
        MultiLineString {
            linestrings: iter.into_iter().collect(),
        }
    }
}

impl<T> From<LineString<T>> for MultiLineString<T> {
    #[inline]
    fn from(value: LineString<T>) -> Self {
        MultiLineString {
            linestrings: vec![value],
        }
    }
}

impl<'a, T> IntoIterator for &'a MultiLineString<T> {
    type Item = &'a LineString<T>;
    type IntoIter = std::slice::Iter<'a, LineString<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.linestrings.iter()
    }
}
