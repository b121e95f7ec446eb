//! Linear/linear overlay: finding segment intersects between two linear geometries and building
//! their intersection.
mod linear_intersection;
mod output;
mod segment_intersects;
mod types;

pub use linear_intersection::*;
pub use output::*;
pub use segment_intersects::*;
pub use types::*;
