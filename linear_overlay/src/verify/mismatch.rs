use std::fmt;

/// Which verifier check a [Mismatch] came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// `intersection(A, B)` against the accepted results.
    Forward,
    /// `intersection(B, A)` against the accepted results.
    Reversed,
    /// `intersection(A, B)` written into a `Vec` against the first accepted result.
    VectorContainer,
    /// `intersection(A, B)` written into a `VecDeque` against the first accepted result.
    DequeContainer,
    /// `intersection(reverse(A), B)` against the accepted results.
    ReversedOrientation,
    /// Linestring result end points missing from the point result.
    PointShape,
    /// Point results of `intersection(A, B)` and `intersection(B, A)` differ.
    PointCommutativity,
}

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Forward => "forward",
            CheckKind::Reversed => "reversed operands",
            CheckKind::VectorContainer => "vector container",
            CheckKind::DequeContainer => "deque container",
            CheckKind::ReversedOrientation => "reversed orientation",
            CheckKind::PointShape => "point output",
            CheckKind::PointCommutativity => "point output commutativity",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed verifier check, geometries are held as WKT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub case_id: String,
    pub check: CheckKind,
    /// Name of the operation checked.
    pub operation: String,
    pub geom1_wkt: String,
    pub geom2_wkt: String,
    /// Every value that would have passed the check.
    pub expected_wkt: Vec<String>,
    pub computed_wkt: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] {} L/L: {} {} -> Expected: ",
            self.case_id, self.check, self.operation, self.geom1_wkt, self.geom2_wkt
        )?;

        for (i, expected) in self.expected_wkt.iter().enumerate() {
            if i != 0 {
                f.write_str(" or: ")?;
            }
            f.write_str(expected)?;
        }

        write!(f, " computed: {}", self.computed_wkt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_layout() {
        let m = Mismatch {
            case_id: "ll01".to_string(),
            check: CheckKind::Forward,
            operation: "intersection".to_string(),
            geom1_wkt: "LINESTRING(0 0,1 0)".to_string(),
            geom2_wkt: "LINESTRING(0 0,1 1)".to_string(),
            expected_wkt: vec![
                "MULTILINESTRING EMPTY".to_string(),
                "MULTILINESTRING((0 0,0 0))".to_string(),
            ],
            computed_wkt: "MULTILINESTRING((0 0,1 0))".to_string(),
        };

        assert_eq!(
            m.to_string(),
            "[ll01, forward] intersection L/L: LINESTRING(0 0,1 0) LINESTRING(0 0,1 1) -> \
             Expected: MULTILINESTRING EMPTY or: MULTILINESTRING((0 0,0 0)) \
             computed: MULTILINESTRING((0 0,1 0))"
        );
    }
}
