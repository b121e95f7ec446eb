use linear_overlay::{
    geometry::{LineString, MultiLineString, MultiPoint},
    wkt_io::FromWkt,
};

// positions equal epsilon
pub const POS_EQ_EPS: f64 = 1e-5;

/// Parse a linestring fixture.
pub fn ls(wkt: &str) -> LineString<f64> {
    LineString::from_wkt(wkt).unwrap_or_else(|e| panic!("bad fixture {wkt:?}: {e}"))
}

/// Parse a multi-linestring fixture, a bare linestring is accepted.
pub fn mls(wkt: &str) -> MultiLineString<f64> {
    MultiLineString::from_wkt(wkt).unwrap_or_else(|e| panic!("bad fixture {wkt:?}: {e}"))
}

/// Parse a multi-point fixture.
pub fn mp(wkt: &str) -> MultiPoint<f64> {
    MultiPoint::from_wkt(wkt).unwrap_or_else(|e| panic!("bad fixture {wkt:?}: {e}"))
}
