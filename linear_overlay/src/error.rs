use crate::verify::Mismatch;
use thiserror::Error;

/// Errors reading geometry from WKT text.
#[derive(Debug, Error)]
pub enum WktError {
    #[error("invalid WKT: {0}")]
    Parse(&'static str),

    #[error("expected {expected} but found {found}")]
    UnexpectedGeometry {
        expected: &'static str,
        found: &'static str,
    },

    #[error("coordinate {0} cannot be represented by the coordinate type")]
    NumericCast(f64),
}

/// Failed checks collected by an [IntersectionVerifier](crate::verify::IntersectionVerifier).
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("{} intersection check(s) failed:\n{}", .0.len(), format_mismatches(.0))]
    Mismatches(Vec<Mismatch>),
}

impl VerifyError {
    /// All the mismatches recorded.
    pub fn mismatches(&self) -> &[Mismatch] {
        match self {
            VerifyError::Mismatches(m) => m,
        }
    }
}

/// Errors writing diagnostic artifacts.
#[derive(Debug, Error)]
pub enum DiagnosticError {
    #[error("failed to write diagnostic file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn format_mismatches(mismatches: &[Mismatch]) -> String {
    mismatches
        .iter()
        .map(|m| format!("  {m}"))
        .collect::<Vec<_>>()
        .join("\n")
}
