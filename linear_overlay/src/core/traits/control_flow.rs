use static_aabb2d_index as aabb_index;

/// Trait for control flow inside visiting methods.
///
/// Visitors passed to [visit_segment_intersects](crate::overlay::visit_segment_intersects) return
/// a value implementing this trait, returning a breaking value stops the traversal early.
///
/// # Examples
///
/// ```
/// # use linear_overlay::core::*;
/// # use linear_overlay::geometry::*;
/// # use linear_overlay::overlay::*;
/// # use linear_overlay::linestring;
/// let ls1: LineString = linestring![(0.0, 0.0), (4.0, 0.0)];
/// let ls2: LineString = linestring![(1.0, -1.0), (1.0, 1.0), (2.0, 1.0), (2.0, -1.0)];
///
/// let mut visited = 0;
/// visit_segment_intersects(&ls1, &ls2, &IntersectOptions::new(), &mut |_intr: SegIntersect<f64>| {
///     visited += 1;
///     // stop after the first intersect found
///     Control::Break(())
/// });
///
/// assert_eq!(visited, 1);
/// ```
pub trait ControlFlow {
    /// Constructs state indicating to continue iteration/visiting.
    fn continuing() -> Self;

    /// Returns `true` if control flow should break/stop iteration.
    fn should_break(&self) -> bool;
}

impl<C> ControlFlow for C
where
    C: aabb_index::ControlFlow,
{
    #[inline]
    fn continuing() -> Self {
        C::continuing()
    }

    #[inline]
    fn should_break(&self) -> bool {
        self.should_break()
    }
}
