mod test_utils;

use linear_overlay::{
    assert_fuzzy_eq,
    core::{math::vec2, traits::FuzzyEq},
    geometry::{LineString, Linear, MultiLineString},
};
use test_utils::{ls, mls, mp, POS_EQ_EPS};

#[test]
fn linestring_measures() {
    let line = ls("LINESTRING(0 0,3 4,3 10)");
    assert_eq!(line.segment_count(), 2);
    assert_fuzzy_eq!(line.path_length(), 11.0);

    let extents = line.extents().unwrap();
    assert_fuzzy_eq!(extents.min_x, 0.0);
    assert_fuzzy_eq!(extents.min_y, 0.0);
    assert_fuzzy_eq!(extents.max_x, 3.0);
    assert_fuzzy_eq!(extents.max_y, 10.0);

    assert!(ls("LINESTRING EMPTY").extents().is_none());
    assert_eq!(ls("LINESTRING EMPTY").segment_count(), 0);
}

#[test]
fn closed_and_degenerate() {
    assert!(ls("LINESTRING(0 0,1 0,1 1,0 0)").is_closed_eps(POS_EQ_EPS));
    assert!(!ls("LINESTRING(0 0,1 0,1 1)").is_closed_eps(POS_EQ_EPS));
    // a back and forth segment is not a ring
    assert!(!ls("LINESTRING(0 0,1 0)").is_closed_eps(POS_EQ_EPS));

    assert!(ls("LINESTRING(1 1,1 1)").is_degenerate_eps(POS_EQ_EPS));
    assert!(ls("LINESTRING(1 1,1.000001 1)").is_degenerate_eps(POS_EQ_EPS));
    assert!(!ls("LINESTRING(1 1,2 1)").is_degenerate_eps(POS_EQ_EPS));
}

#[test]
fn reverse_multi_linestring() {
    let m = mls("MULTILINESTRING((0 0,1 0),(2 2,3 3,4 2))");
    let r = m.reversed();
    assert_eq!(r, mls("MULTILINESTRING((4 2,3 3,2 2),(1 0,0 0))"));
    assert_eq!(r.reversed(), m);
}

#[test]
fn linear_views() {
    let m = mls("MULTILINESTRING((0 0,1 0),(2 2,3 3,4 2))");
    assert_eq!(m.segment_count(), 3);
    assert!(!m.is_empty_geometry());

    let v: Vec<LineString> = m.linestrings.clone();
    assert_eq!(Linear::segment_count(&v), 3);
    assert_eq!(Linear::segment_count(&v[..1]), 1);

    assert!(mls("MULTILINESTRING EMPTY").is_empty_geometry());
    assert!(ls("LINESTRING EMPTY").is_empty_geometry());
    assert!(MultiLineString::<f64>::new().is_empty_geometry());
}

#[test]
fn multipoint_contains() {
    let points = mp("MULTIPOINT((1 1),(2 0.5))");
    assert!(points.contains_eps(vec2(2.0, 0.5), POS_EQ_EPS));
    assert!(points.contains_eps(vec2(1.000001, 1.0), POS_EQ_EPS));
    assert!(!points.contains_eps(vec2(1.1, 1.0), POS_EQ_EPS));
}

#[test]
fn vector_fuzzy_eq() {
    let a = vec2(0.1 + 0.2, 1.0);
    let b = vec2(0.3, 1.0);
    assert!(a.fuzzy_eq(b));
    assert_fuzzy_eq!(a.x, b.x, 1e-12);
}
