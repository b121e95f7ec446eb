use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number coordinate value that can be fuzzy compared, ordered and
/// stored in a segment spatial index.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    /// Converts to `f64` for WKT/SVG output, falling back to NaN for unrepresentable values.
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        num_traits::ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

impl Real for f32 {
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
}

impl Real for f64 {
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}
