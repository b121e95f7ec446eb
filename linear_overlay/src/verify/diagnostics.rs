use crate::{
    core::{math::Vector2, traits::Real},
    error::DiagnosticError,
    geometry::{LineString, MultiLineString},
};
use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Environment variable naming the directory [SvgFileSink::from_env] writes into.
pub const SVG_DIR_ENV_VAR: &str = "LINEAR_OVERLAY_SVG_DIR";

/// Inputs and output of one checked operation call.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticRecord<T = f64> {
    pub operation: String,
    pub case_id: String,
    pub geom1: MultiLineString<T>,
    pub geom2: MultiLineString<T>,
    pub result: MultiLineString<T>,
    /// Whether the result was accepted.
    pub passed: bool,
}

#[cfg(feature = "serde")]
impl<T> DiagnosticRecord<T>
where
    T: Serialize,
{
    /// Serialize the record as pretty printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Receives a [DiagnosticRecord] for every forward intersection the verifier runs.
///
/// Sinks only observe, they cannot fail a check.
pub trait DiagnosticSink<T>
where
    T: Real,
{
    fn record(&mut self, record: &DiagnosticRecord<T>);
}

impl<T, S> DiagnosticSink<T> for &mut S
where
    T: Real,
    S: DiagnosticSink<T> + ?Sized,
{
    #[inline]
    fn record(&mut self, record: &DiagnosticRecord<T>) {
        (**self).record(record)
    }
}

impl<T> DiagnosticSink<T> for Box<dyn DiagnosticSink<T>>
where
    T: Real,
{
    #[inline]
    fn record(&mut self, record: &DiagnosticRecord<T>) {
        (**self).record(record)
    }
}

/// Sink that discards everything.
#[derive(Debug, Default, Copy, Clone)]
pub struct NullSink;

impl<T> DiagnosticSink<T> for NullSink
where
    T: Real,
{
    #[inline]
    fn record(&mut self, _record: &DiagnosticRecord<T>) {}
}

/// Sink writing records as WKT through the `log` facade at debug level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogSink;

impl<T> DiagnosticSink<T> for LogSink
where
    T: Real,
{
    fn record(&mut self, record: &DiagnosticRecord<T>) {
        log::debug!(
            "{} [{}] passed: {}\n  geometry #1: {}\n  geometry #2: {}\n  result: {}",
            record.operation,
            record.case_id,
            record.passed,
            record.geom1,
            record.geom2,
            record.result
        );
    }
}

/// Sink keeping every record in memory.
#[derive(Debug, Clone)]
pub struct MemorySink<T = f64> {
    pub records: Vec<DiagnosticRecord<T>>,
}

impl<T> MemorySink<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> Default for MemorySink<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DiagnosticSink<T> for MemorySink<T>
where
    T: Real,
{
    #[inline]
    fn record(&mut self, record: &DiagnosticRecord<T>) {
        self.records.push(record.clone());
    }
}

/// Sink rendering each record to `<dir>/<operation>_<case_id>.svg`.
///
/// Write failures are logged, they never abort verification.
#[derive(Debug, Clone)]
pub struct SvgFileSink {
    dir: PathBuf,
}

impl SvgFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Sink writing into the directory named by [SVG_DIR_ENV_VAR], `None` if it is not set.
    pub fn from_env() -> Option<Self> {
        std::env::var_os(SVG_DIR_ENV_VAR)
            .filter(|dir| !dir.is_empty())
            .map(Self::new)
    }

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the record is written to.
    pub fn file_path<T>(&self, record: &DiagnosticRecord<T>) -> PathBuf {
        let name: String = format!("{}_{}", record.operation, record.case_id)
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{name}.svg"))
    }

    /// Render the record and write it, returns the file written.
    pub fn write_svg<T>(&self, record: &DiagnosticRecord<T>) -> Result<PathBuf, DiagnosticError>
    where
        T: Real,
    {
        let path = self.file_path(record);
        let to_error = |source| DiagnosticError::Io {
            path: path.display().to_string(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(to_error)?;
        std::fs::write(&path, render_svg(record)).map_err(to_error)?;
        Ok(path)
    }
}

impl<T> DiagnosticSink<T> for SvgFileSink
where
    T: Real,
{
    fn record(&mut self, record: &DiagnosticRecord<T>) {
        match self.write_svg(record) {
            Ok(path) => log::debug!("wrote {}", path.display()),
            Err(e) => log::error!("{e}"),
        }
    }
}

const SVG_SIZE: f64 = 400.0;

/// Render the inputs and result of a record as an SVG document, y axis pointing up.
pub fn render_svg<T>(record: &DiagnosticRecord<T>) -> String
where
    T: Real,
{
    let all_points = || {
        [&record.geom1, &record.geom2, &record.result]
            .into_iter()
            .flat_map(|mls| mls.iter())
            .flat_map(|ls| ls.points.iter())
            .map(|p| to_f64(*p))
    };

    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for (x, y) in all_points() {
        min = (min.0.min(x), min.1.min(y));
        max = (max.0.max(x), max.1.max(y));
    }

    if min.0 > max.0 {
        min = (0.0, 0.0);
        max = (1.0, 1.0);
    }

    let extent = (max.0 - min.0).max(max.1 - min.1).max(f64::EPSILON);
    let margin = extent * 0.05;
    let stroke = extent / SVG_SIZE;

    let mut svg = String::new();
    // writing to a String never fails
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{SVG_SIZE}" height="{SVG_SIZE}" viewBox="{} {} {} {}">"#,
        min.0 - margin,
        -max.1 - margin,
        extent + 2.0 * margin,
        extent + 2.0 * margin
    );
    let _ = writeln!(svg, "<!-- {} {} -->", record.operation, record.case_id);
    let _ = writeln!(svg, r#"<g transform="scale(1,-1)" fill="none">"#);
    write_linestrings(&mut svg, &record.geom1, "blue", 2.0 * stroke);
    write_linestrings(&mut svg, &record.geom2, "green", 2.0 * stroke);
    write_linestrings(&mut svg, &record.result, "red", 4.0 * stroke);
    let _ = writeln!(svg, "</g>\n</svg>");
    svg
}

fn write_linestrings<T>(svg: &mut String, mls: &MultiLineString<T>, color: &str, width: f64)
where
    T: Real,
{
    for ls in mls {
        let _ = writeln!(
            svg,
            r#"<polyline stroke="{color}" stroke-width="{width}" stroke-opacity="0.6" points="{}"/>"#,
            svg_points(ls)
        );
    }
}

fn svg_points<T>(ls: &LineString<T>) -> String
where
    T: Real,
{
    ls.points
        .iter()
        .map(|&p| {
            let (x, y) = to_f64(p);
            format!("{x},{y}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[inline]
fn to_f64<T>(p: Vector2<T>) -> (f64, f64)
where
    T: Real,
{
    (p.x.to_f64_lossy(), p.y.to_f64_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(case_id: &str) -> DiagnosticRecord {
        DiagnosticRecord {
            operation: "intersection".to_string(),
            case_id: case_id.to_string(),
            geom1: multi_linestring![[(0.0, 0.0), (4.0, 0.0)]],
            geom2: multi_linestring![[(2.0, 0.0), (6.0, 0.0)]],
            result: multi_linestring![[(2.0, 0.0), (4.0, 0.0)]],
            passed: true,
        }
    }

    #[test]
    fn svg_file_name() {
        let sink = SvgFileSink::new("out");
        assert_eq!(
            sink.file_path(&record("ll/01 a")),
            Path::new("out").join("intersection_ll_01_a.svg")
        );
    }

    #[test]
    fn svg_contains_all_geometries() {
        let svg = render_svg(&record("ll01"));
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<polyline").count(), 3);
        assert!(svg.contains(r#"points="2,0 4,0""#));
    }
}
