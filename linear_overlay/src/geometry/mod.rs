//! Linear geometry types: linestrings, multi-linestrings and multi-points.
mod linestring;
mod multi_linestring;
mod multi_point;

pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;

use crate::core::traits::Real;

/// Trait for geometries made of linestrings that may be used as an input to
/// [intersection](crate::overlay::intersection).
///
/// Both [LineString] and [MultiLineString] implement it, so the overlay functions and the
/// verifier accept any pairing of the two.
pub trait Linear<T>
where
    T: Real,
{
    /// The geometry viewed as a sequence of linestrings.
    fn linestrings(&self) -> &[LineString<T>];

    /// Total number of segments across all linestrings.
    #[inline]
    fn segment_count(&self) -> usize {
        self.linestrings().iter().map(|ls| ls.segment_count()).sum()
    }

    /// Returns `true` if the geometry has no points at all.
    #[inline]
    fn is_empty_geometry(&self) -> bool {
        self.linestrings().iter().all(|ls| ls.is_empty())
    }
}

impl<T> Linear<T> for LineString<T>
where
    T: Real,
{
    #[inline]
    fn linestrings(&self) -> &[LineString<T>] {
        std::slice::from_ref(self)
    }
}

impl<T> Linear<T> for MultiLineString<T>
where
    T: Real,
{
    #[inline]
    fn linestrings(&self) -> &[LineString<T>] {
        &self.linestrings
    }
}

impl<T> Linear<T> for [LineString<T>]
where
    T: Real,
{
    #[inline]
    fn linestrings(&self) -> &[LineString<T>] {
        self
    }
}

impl<T> Linear<T> for Vec<LineString<T>>
where
    T: Real,
{
    #[inline]
    fn linestrings(&self) -> &[LineString<T>] {
        self
    }
}
