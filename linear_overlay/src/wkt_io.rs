//! Reading and writing geometry as WKT text through the `wkt` crate.
//!
//! Coordinates are parsed as `f64` and cast to the coordinate type, written coordinates are
//! converted to `f64` first.
use crate::{
    core::{math::Vector2, traits::Real},
    error::WktError,
    geometry::{LineString, MultiLineString, MultiPoint},
};
use std::{fmt, str::FromStr};
use wkt::{types, Wkt};

/// Trait for geometry types that can be read from WKT text.
///
/// # Examples
///
/// ```
/// # use linear_overlay::geometry::*;
/// # use linear_overlay::wkt_io::*;
/// let ls = LineString::<f64>::from_wkt("LINESTRING(0 0, 2 1)").unwrap();
/// assert_eq!(ls.len(), 2);
/// assert_eq!(ls.to_string(), "LINESTRING(0 0,2 1)");
///
/// // a single linestring is accepted as a multi-linestring
/// let mls = MultiLineString::<f64>::from_wkt("LINESTRING(0 0, 2 1)").unwrap();
/// assert_eq!(mls.len(), 1);
/// ```
pub trait FromWkt: Sized {
    fn from_wkt(text: &str) -> Result<Self, WktError>;
}

fn parse(text: &str) -> Result<Wkt<f64>, WktError> {
    Wkt::from_str(text).map_err(WktError::Parse)
}

fn geometry_name(geom: &Wkt<f64>) -> &'static str {
    match geom {
        Wkt::Point(_) => "POINT",
        Wkt::LineString(_) => "LINESTRING",
        Wkt::Polygon(_) => "POLYGON",
        Wkt::MultiPoint(_) => "MULTIPOINT",
        Wkt::MultiLineString(_) => "MULTILINESTRING",
        Wkt::MultiPolygon(_) => "MULTIPOLYGON",
        Wkt::GeometryCollection(_) => "GEOMETRYCOLLECTION",
    }
}

fn cast<T>(value: f64) -> Result<T, WktError>
where
    T: Real,
{
    T::from(value).ok_or(WktError::NumericCast(value))
}

fn from_coord<T>(coord: &types::Coord<f64>) -> Result<Vector2<T>, WktError>
where
    T: Real,
{
    Ok(Vector2::new(cast(coord.x)?, cast(coord.y)?))
}

fn to_coord<T>(point: Vector2<T>) -> types::Coord<f64>
where
    T: Real,
{
    types::Coord {
        x: point.x.to_f64_lossy(),
        y: point.y.to_f64_lossy(),
        z: None,
        m: None,
    }
}

fn from_wkt_linestring<T>(ls: &types::LineString<f64>) -> Result<LineString<T>, WktError>
where
    T: Real,
{
    ls.0.iter().map(from_coord).collect()
}

fn to_wkt_linestring<T>(ls: &LineString<T>) -> types::LineString<f64>
where
    T: Real,
{
    types::LineString(ls.points.iter().map(|&p| to_coord(p)).collect())
}

impl<T> FromWkt for LineString<T>
where
    T: Real,
{
    fn from_wkt(text: &str) -> Result<Self, WktError> {
        match parse(text)? {
            Wkt::LineString(ls) => from_wkt_linestring(&ls),
            other => Err(WktError::UnexpectedGeometry {
                expected: "LINESTRING",
                found: geometry_name(&other),
            }),
        }
    }
}

impl<T> FromWkt for MultiLineString<T>
where
    T: Real,
{
    fn from_wkt(text: &str) -> Result<Self, WktError> {
        match parse(text)? {
            Wkt::MultiLineString(mls) => mls.0.iter().map(from_wkt_linestring).collect(),
            Wkt::LineString(ls) => Ok(MultiLineString::from(from_wkt_linestring(&ls)?)),
            other => Err(WktError::UnexpectedGeometry {
                expected: "MULTILINESTRING",
                found: geometry_name(&other),
            }),
        }
    }
}

impl<T> FromWkt for MultiPoint<T>
where
    T: Real,
{
    fn from_wkt(text: &str) -> Result<Self, WktError> {
        match parse(text)? {
            Wkt::MultiPoint(mp) => mp
                .0
                .iter()
                .filter_map(|p| p.0.as_ref())
                .map(from_coord)
                .collect(),
            Wkt::Point(p) => p.0.iter().map(from_coord).collect(),
            other => Err(WktError::UnexpectedGeometry {
                expected: "MULTIPOINT",
                found: geometry_name(&other),
            }),
        }
    }
}

macro_rules! impl_from_str {
    ($ty:ident) => {
        impl<T> FromStr for $ty<T>
        where
            T: Real,
        {
            type Err = WktError;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_wkt(s)
            }
        }
    };
}

impl_from_str!(LineString);
impl_from_str!(MultiLineString);
impl_from_str!(MultiPoint);

impl<T> fmt::Display for LineString<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_wkt_linestring(self))
    }
}

impl<T> fmt::Display for MultiLineString<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mls = types::MultiLineString(self.iter().map(to_wkt_linestring).collect());
        write!(f, "{mls}")
    }
}

impl<T> fmt::Display for MultiPoint<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mp = types::MultiPoint(
            self.points
                .iter()
                .map(|&p| types::Point(Some(to_coord(p))))
                .collect(),
        );
        write!(f, "{mp}")
    }
}

/// WKT of a sequence of linestrings written as a multi-linestring.
pub fn linestrings_to_wkt<'a, T, I>(linestrings: I) -> String
where
    T: Real,
    I: IntoIterator<Item = &'a LineString<T>>,
{
    types::MultiLineString(linestrings.into_iter().map(to_wkt_linestring).collect()).to_string()
}

/// WKT of a sequence of points written as a multi-point.
pub fn points_to_wkt<T>(points: &[Vector2<T>]) -> String
where
    T: Real,
{
    MultiPoint::from_points(points.to_vec()).to_string()
}
