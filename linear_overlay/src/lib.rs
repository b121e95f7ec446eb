//! 2D linear/linear intersection and a harness for verifying linear/linear intersection
//! routines against accepted results.
//!
//! [overlay::intersection] computes the intersection of linestrings and multi-linestrings into
//! linestring or point containers, [verify::IntersectionVerifier] checks any
//! [overlay::LinearIntersection] implementation for operand order symmetry, output container
//! independence and consistency between output shapes.
extern crate static_aabb2d_index;

#[macro_use]
mod macros;

pub mod core;
pub mod equality;
pub mod error;
pub mod geometry;
pub mod overlay;
pub mod verify;
pub mod wkt_io;

pub use static_aabb2d_index::AABB;
