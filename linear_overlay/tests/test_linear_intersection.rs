mod test_utils;

use linear_overlay::{
    core::math::vec2,
    equality::{points_equal, GeometryEquality, MultiLinestringEquals},
    geometry::{LineString, MultiLineString, MultiPoint},
    overlay::{
        create_segment_aabb_index, find_intersects, intersection, intersects, IntersectOptions,
    },
    verify::IntersectionVerifier,
};
use std::collections::VecDeque;
use test_utils::{init_logging, ls, mls, mp, POS_EQ_EPS};

/// Run a case through the verifier, panicking with every mismatch if any check fails.
macro_rules! ll_case {
    ($id:expr, $g1:expr, $g2:expr, $expected:expr) => {{
        init_logging();
        let mut verifier = IntersectionVerifier::new();
        verifier.verify(&$g1, &$g2, &mls($expected), $id);
        verifier.assert_all_passed();
    }};
    ($id:expr, $g1:expr, $g2:expr, $expected1:expr, $expected2:expr) => {{
        init_logging();
        let mut verifier = IntersectionVerifier::new();
        verifier.verify_either(&$g1, &$g2, &mls($expected1), &mls($expected2), $id);
        verifier.assert_all_passed();
    }};
}

fn intersection_mls(g1: &MultiLineString, g2: &MultiLineString) -> MultiLineString {
    let mut result = MultiLineString::new();
    intersection(g1, g2, &mut result, &IntersectOptions::new());
    result
}

fn intersection_mp(g1: &MultiLineString, g2: &MultiLineString) -> MultiPoint {
    let mut result = MultiPoint::new();
    intersection(g1, g2, &mut result, &IntersectOptions::new());
    result
}

#[test]
fn crossing_segments() {
    ll_case!(
        "crossing",
        ls("LINESTRING(0 0,2 2)"),
        ls("LINESTRING(0 2,2 0)"),
        "MULTILINESTRING EMPTY"
    );

    let a = mls("LINESTRING(0 0,2 2)");
    let b = mls("LINESTRING(0 2,2 0)");
    assert!(intersection_mls(&a, &b).is_empty());
    let points = intersection_mp(&a, &b);
    assert!(points_equal(&points.points, &mp("MULTIPOINT((1 1))").points, POS_EQ_EPS));
}

#[test]
fn partial_overlap() {
    ll_case!(
        "partial_overlap",
        ls("LINESTRING(0 0,4 0)"),
        ls("LINESTRING(2 0,6 0)"),
        "MULTILINESTRING((2 0,4 0))"
    );

    let result = intersection_mls(&mls("LINESTRING(0 0,4 0)"), &mls("LINESTRING(2 0,6 0)"));
    assert_eq!(result.to_string(), "MULTILINESTRING((2 0,4 0))");
}

#[test]
fn overlap_opposite_direction_follows_first() {
    ll_case!(
        "opposite_direction",
        ls("LINESTRING(0 0,4 0)"),
        ls("LINESTRING(6 0,2 0)"),
        "MULTILINESTRING((2 0,4 0))"
    );

    let result = intersection_mls(&mls("LINESTRING(0 0,4 0)"), &mls("LINESTRING(6 0,2 0)"));
    assert_eq!(result[0], ls("LINESTRING(2 0,4 0)"));
    let result = intersection_mls(&mls("LINESTRING(6 0,2 0)"), &mls("LINESTRING(0 0,4 0)"));
    assert_eq!(result[0], ls("LINESTRING(4 0,2 0)"));
}

#[test]
fn disjoint() {
    ll_case!(
        "disjoint",
        ls("LINESTRING(0 0,1 0)"),
        ls("LINESTRING(0 1,1 1)"),
        "MULTILINESTRING EMPTY"
    );
    ll_case!(
        "disjoint_collinear",
        ls("LINESTRING(0 0,1 0)"),
        ls("LINESTRING(2 0,3 0)"),
        "MULTILINESTRING EMPTY"
    );
    assert!(!intersects(
        &ls("LINESTRING(0 0,1 0)"),
        &ls("LINESTRING(0 1,1 1)"),
        &IntersectOptions::new()
    ));
}

#[test]
fn empty_input() {
    ll_case!(
        "empty_input",
        ls("LINESTRING EMPTY"),
        ls("LINESTRING(0 1,1 1)"),
        "MULTILINESTRING EMPTY"
    );
}

#[test]
fn end_points_touch() {
    ll_case!(
        "touch",
        ls("LINESTRING(0 0,1 0)"),
        ls("LINESTRING(1 0,2 0)"),
        "MULTILINESTRING EMPTY"
    );

    let points = intersection_mp(&mls("LINESTRING(0 0,1 0)"), &mls("LINESTRING(1 0,2 0)"));
    assert_eq!(points.points, vec![vec2(1.0, 0.0)]);
}

#[test]
fn overlap_across_vertexes() {
    ll_case!(
        "across_vertexes",
        ls("LINESTRING(0 0,2 0,4 0,6 2)"),
        ls("LINESTRING(1 0,5 0)"),
        "MULTILINESTRING((1 0,4 0))"
    );

    // stitched along the first geometry keeping its vertexes
    let result = intersection_mls(
        &mls("LINESTRING(0 0,2 0,4 0,6 2)"),
        &mls("LINESTRING(1 0,5 0)"),
    );
    assert_eq!(result.len(), 1);
    assert_eq!(result[0], ls("LINESTRING(1 0,2 0,4 0)"));
}

#[test]
fn overlap_with_turns() {
    ll_case!(
        "turns",
        ls("LINESTRING(0 0,2 0,2 2,4 2)"),
        ls("LINESTRING(1 0,2 0,2 1)"),
        "MULTILINESTRING((1 0,2 0,2 1))"
    );
}

#[test]
fn multiple_pieces() {
    ll_case!(
        "multiple_pieces",
        ls("LINESTRING(0 0,10 0)"),
        ls("LINESTRING(1 0,2 0,2 1,3 1,3 0,4 0)"),
        "MULTILINESTRING((1 0,2 0),(3 0,4 0))"
    );
}

#[test]
fn multi_linestring_inputs() {
    ll_case!(
        "multi_inputs",
        mls("MULTILINESTRING((0 0,2 0),(3 0,5 0))"),
        ls("LINESTRING(1 0,4 0)"),
        "MULTILINESTRING((1 0,2 0),(3 0,4 0))"
    );
    ll_case!(
        "multi_both",
        mls("MULTILINESTRING((0 0,2 0),(3 0,5 0))"),
        mls("MULTILINESTRING((1 0,4 0),(0 5,5 5))"),
        "MULTILINESTRING((1 0,2 0),(3 0,4 0))"
    );
}

#[test]
fn identical() {
    ll_case!(
        "identical",
        ls("LINESTRING(0 0,1 1,2 0)"),
        ls("LINESTRING(0 0,1 1,2 0)"),
        "MULTILINESTRING((0 0,1 1,2 0))"
    );
    ll_case!(
        "identical_reversed",
        ls("LINESTRING(0 0,1 1,2 0)"),
        ls("LINESTRING(2 0,1 1,0 0)"),
        "MULTILINESTRING((0 0,1 1,2 0))"
    );
}

#[test]
fn closed_ring_joins_at_start() {
    ll_case!(
        "ring_start",
        ls("LINESTRING(0 0,4 0,4 4,0 4,0 0)"),
        ls("LINESTRING(0 2,0 0,2 0)"),
        "MULTILINESTRING((0 2,0 0,2 0))"
    );

    let result = intersection_mls(
        &mls("LINESTRING(0 0,4 0,4 4,0 4,0 0)"),
        &mls("LINESTRING(0 2,0 0,2 0)"),
    );
    assert_eq!(result.len(), 1);
    assert_eq!(result[0], ls("LINESTRING(0 2,0 0,2 0)"));
}

#[test]
fn identical_rings() {
    ll_case!(
        "rings",
        ls("LINESTRING(0 0,4 0,4 4,0 4,0 0)"),
        ls("LINESTRING(4 4,4 0,0 0,0 4,4 4)"),
        "MULTILINESTRING((0 0,4 0,4 4,0 4,0 0))"
    );
}

#[test]
fn spike_either_result() {
    // the spike folds back over itself, only one operand order keeps the fold
    ll_case!(
        "spike",
        ls("LINESTRING(0 0,4 0,2 0)"),
        ls("LINESTRING(1 0,3 0)"),
        "MULTILINESTRING((1 0,3 0),(3 0,2 0))",
        "MULTILINESTRING((1 0,3 0))"
    );
}

#[test]
fn long_nearly_parallel_segments() {
    // far end is 0.009 off the short segment's line, not an overlap in either operand order
    ll_case!(
        "near_parallel",
        ls("LINESTRING(0 0,1000 0.009)"),
        ls("LINESTRING(500 0,501 0)"),
        "MULTILINESTRING EMPTY"
    );

    let a = mls("LINESTRING(0 0,1000 0.009)");
    let b = mls("LINESTRING(500 0,501 0)");
    assert!(intersection_mp(&a, &b).is_empty());
    assert!(intersection_mp(&b, &a).is_empty());
}

#[test]
fn zero_length_segment_skipped() {
    ll_case!(
        "repeated_point",
        ls("LINESTRING(0 0,2 0,2 0,4 0)"),
        ls("LINESTRING(1 0,3 0)"),
        "MULTILINESTRING((1 0,3 0))"
    );

    let result = intersection_mls(
        &mls("LINESTRING(0 0,2 0,2 0,4 0)"),
        &mls("LINESTRING(1 0,3 0)"),
    );
    assert_eq!(result.len(), 1);
}

#[test]
fn point_output_includes_overlap_ends() {
    let a = mls("LINESTRING(0 0,4 0,4 4)");
    let b = mls("LINESTRING(2 0,6 0,6 2,3 -1)");
    let points = intersection_mp(&a, &b);
    let expected = mp("MULTIPOINT((2 0),(4 0))");
    assert!(
        points_equal(&points.points, &expected.points, POS_EQ_EPS),
        "computed: {points}"
    );

    // same points with the operands swapped
    let swapped = intersection_mp(&b, &a);
    assert!(points_equal(&points.points, &swapped.points, POS_EQ_EPS));
}

#[test]
fn containers_agree() {
    let a = mls("LINESTRING(0 0,10 0)");
    let b = mls("LINESTRING(1 0,2 0,2 1,3 1,3 0,4 0)");
    let mut vector_output: Vec<LineString> = Vec::new();
    let mut deque_output: VecDeque<LineString> = VecDeque::new();
    let options = IntersectOptions::new();
    intersection(&a, &b, &mut vector_output, &options);
    intersection(&a, &b, &mut deque_output, &options);

    let eq = MultiLinestringEquals::non_unique();
    assert!(eq.equals(&vector_output, &deque_output));
    assert!(eq.equals(&intersection_mls(&a, &b), &vector_output));

    let mut vector_points: Vec<linear_overlay::core::math::Vector2> = Vec::new();
    intersection(&a, &b, &mut vector_points, &options);
    assert!(points_equal(&vector_points, &intersection_mp(&a, &b).points, POS_EQ_EPS));
}

#[test]
fn output_appends() {
    let a = mls("LINESTRING(0 0,4 0)");
    let b = mls("LINESTRING(2 0,6 0)");
    let mut result = MultiLineString::new();
    intersection(&a, &b, &mut result, &IntersectOptions::new());
    intersection(&a, &b, &mut result, &IntersectOptions::new());
    assert_eq!(result.len(), 2);
}

#[test]
fn prebuilt_spatial_index() {
    let a = mls("LINESTRING(0 0,4 0)");
    let b = mls("LINESTRING(2 0,6 0,6 2,1 -1)");
    let index = create_segment_aabb_index(&b).unwrap();
    let mut options = IntersectOptions::new();
    options.geom2_aabb_index = Some(&index);

    let with_index = find_intersects(&a, &b, &options);
    let without_index = find_intersects(&a, &b, &IntersectOptions::new());
    assert_eq!(with_index.overlapping_intersects, without_index.overlapping_intersects);
    assert_eq!(with_index.point_intersects, without_index.point_intersects);
}

#[test]
fn f32_coordinates() {
    let a: LineString<f32> = linear_overlay::linestring![(0.0, 0.0), (4.0, 0.0)];
    let b: LineString<f32> = linear_overlay::linestring![(2.0, 0.0), (6.0, 0.0)];
    let mut verifier = IntersectionVerifier::<f32>::new();
    let expected: MultiLineString<f32> = linear_overlay::multi_linestring![[(2.0, 0.0), (4.0, 0.0)]];
    assert!(verifier.verify(&a, &b, &expected, "f32"));
    assert!(verifier.finish().is_ok());
}
