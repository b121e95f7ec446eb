use linear_overlay::{
    geometry::Linear,
    overlay::{
        IntersectionOutput, Intersector, LinearIntersection, OutputShape, OverlayResult,
    },
};
use std::cell::Cell;

/// Operation that never finds anything.
#[derive(Debug, Default)]
pub struct EmptyResult;

impl LinearIntersection<f64> for EmptyResult {
    fn name(&self) -> &str {
        "empty"
    }

    fn intersection<G1, G2, O>(&self, _geom1: &G1, _geom2: &G2, output: &mut O)
    where
        G1: Linear<f64> + ?Sized,
        G2: Linear<f64> + ?Sized,
        O: IntersectionOutput<f64> + ?Sized,
    {
        output.append_result(OverlayResult::new_empty());
    }
}

/// Correct linestring results, point outputs are left empty.
#[derive(Debug, Default)]
pub struct NoPoints(pub Intersector<f64>);

impl LinearIntersection<f64> for NoPoints {
    fn intersection<G1, G2, O>(&self, geom1: &G1, geom2: &G2, output: &mut O)
    where
        G1: Linear<f64> + ?Sized,
        G2: Linear<f64> + ?Sized,
        O: IntersectionOutput<f64> + ?Sized,
    {
        if O::SHAPE == OutputShape::Linestrings {
            self.0.intersection(geom1, geom2, output);
        }
    }
}

/// Point outputs are only written when the first operand has no more segments than the second.
#[derive(Debug, Default)]
pub struct AsymmetricPoints(pub Intersector<f64>);

impl LinearIntersection<f64> for AsymmetricPoints {
    fn intersection<G1, G2, O>(&self, geom1: &G1, geom2: &G2, output: &mut O)
    where
        G1: Linear<f64> + ?Sized,
        G2: Linear<f64> + ?Sized,
        O: IntersectionOutput<f64> + ?Sized,
    {
        if O::SHAPE == OutputShape::Points && geom1.segment_count() > geom2.segment_count() {
            return;
        }
        self.0.intersection(geom1, geom2, output);
    }
}

/// Correct results, counting every call by output shape.
#[derive(Debug, Default)]
pub struct CountingIntersector {
    pub inner: Intersector<f64>,
    pub linestring_calls: Cell<usize>,
    pub point_calls: Cell<usize>,
}

impl CountingIntersector {
    pub fn total_calls(&self) -> usize {
        self.linestring_calls.get() + self.point_calls.get()
    }
}

impl LinearIntersection<f64> for CountingIntersector {
    fn intersection<G1, G2, O>(&self, geom1: &G1, geom2: &G2, output: &mut O)
    where
        G1: Linear<f64> + ?Sized,
        G2: Linear<f64> + ?Sized,
        O: IntersectionOutput<f64> + ?Sized,
    {
        let counter = match O::SHAPE {
            OutputShape::Linestrings => &self.linestring_calls,
            OutputShape::Points => &self.point_calls,
        };
        counter.set(counter.get() + 1);
        self.inner.intersection(geom1, geom2, output);
    }
}
