use super::{AcceptedResults, CheckKind, DiagnosticRecord, DiagnosticSink, Mismatch, NullSink};
use crate::{
    core::{math::Vector2, traits::Real},
    equality::{points_equal, GeometryEquality, MultiLinestringEquals},
    error::VerifyError,
    geometry::{LineString, Linear, MultiLineString, MultiPoint},
    overlay::{Intersector, LinearIntersection, LinestringOutput, PointOutput},
    wkt_io::{linestrings_to_wkt, points_to_wkt},
};
use std::{collections::VecDeque, marker::PhantomData};

/// Options controlling which checks an [IntersectionVerifier] runs.
#[derive(Debug, Copy, Clone)]
pub struct VerifyOptions<T> {
    /// Run the `Vec`/`VecDeque` output container check (once per verifier).
    pub check_containers: bool,
    /// Check `intersection(reverse(A), B)` against the accepted results.
    pub check_reversed_orientation: bool,
    /// Cross check linestring and point shaped outputs.
    pub check_output_shapes: bool,
    /// Fuzzy comparison epsilon used for determining if two points are equal in point outputs.
    ///
    /// Only the point output checks use it, see
    /// [IntersectionVerifier::with_pos_equal_eps] to set the epsilon of the default operation and
    /// equality predicates too.
    pub pos_equal_eps: T,
}

impl<T> VerifyOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            check_containers: true,
            check_reversed_orientation: true,
            check_output_shapes: true,
            pos_equal_eps: T::from(1e-5).unwrap_or_else(T::fuzzy_epsilon),
        }
    }
}

impl<T> Default for VerifyOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Checks a linear/linear intersection operation against accepted results.
///
/// Every case runs the operation with both operand orders, with the first operand reversed, and
/// into linestring and point shaped outputs. The `Vec`/`VecDeque` container check runs for the
/// first case only. Failed checks are logged and collected, [finish](Self::finish) or
/// [assert_all_passed](Self::assert_all_passed) report them at the end of a suite.
///
/// Type parameters: `M` is the linestring container results are computed into, `I` is the
/// operation checked, `E` the equality predicate and `S` the diagnostic sink.
///
/// # Examples
///
/// ```
/// # use linear_overlay::geometry::*;
/// # use linear_overlay::verify::*;
/// # use linear_overlay::wkt_io::*;
/// let a = LineString::<f64>::from_wkt("LINESTRING(0 0,4 0)").unwrap();
/// let b = LineString::<f64>::from_wkt("LINESTRING(2 0,6 0)").unwrap();
/// let expected = MultiLineString::from_wkt("MULTILINESTRING((2 0,4 0))").unwrap();
///
/// let mut verifier = IntersectionVerifier::new();
/// assert!(verifier.verify(&a, &b, &expected, "overlap"));
/// assert!(verifier.finish().is_ok());
/// ```
pub struct IntersectionVerifier<
    T,
    M = MultiLineString<T>,
    I = Intersector<T>,
    E = MultiLinestringEquals<T>,
    S = NullSink,
> where
    T: Real,
{
    operation: I,
    equality: E,
    container_equality: E,
    sink: S,
    options: VerifyOptions<T>,
    containers_checked: bool,
    cases_run: usize,
    mismatches: Vec<Mismatch>,
    output: PhantomData<M>,
}

impl<T> IntersectionVerifier<T>
where
    T: Real,
{
    /// Verifier for this crate's [Intersector] using default options.
    pub fn new() -> Self {
        Self::with_operation(Intersector::new())
    }
}

impl<T> Default for IntersectionVerifier<T>
where
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, I> IntersectionVerifier<T, MultiLineString<T>, I>
where
    T: Real,
    I: LinearIntersection<T>,
{
    /// Verifier for `operation` using default options.
    pub fn with_operation(operation: I) -> Self {
        IntersectionVerifier {
            operation,
            equality: MultiLinestringEquals::new(),
            container_equality: MultiLinestringEquals::non_unique(),
            sink: NullSink,
            options: VerifyOptions::new(),
            containers_checked: false,
            cases_run: 0,
            mismatches: Vec::new(),
            output: PhantomData,
        }
    }
}

impl<T, M, S> IntersectionVerifier<T, M, Intersector<T>, MultiLinestringEquals<T>, S>
where
    T: Real,
{
    /// Use `pos_equal_eps` for the intersector, both equality predicates and the point output
    /// checks.
    pub fn with_pos_equal_eps(mut self, pos_equal_eps: T) -> Self {
        self.operation.pos_equal_eps = pos_equal_eps;
        self.equality.pos_equal_eps = pos_equal_eps;
        self.container_equality.pos_equal_eps = pos_equal_eps;
        self.options.pos_equal_eps = pos_equal_eps;
        self
    }
}

impl<T, M, I, E, S> IntersectionVerifier<T, M, I, E, S>
where
    T: Real,
    M: LinestringOutput<T>,
    I: LinearIntersection<T>,
    E: GeometryEquality<T>,
    S: DiagnosticSink<T>,
{
    pub fn with_options(mut self, options: VerifyOptions<T>) -> Self {
        self.options = options;
        self
    }

    /// Replace the diagnostic sink.
    pub fn with_sink<S2>(self, sink: S2) -> IntersectionVerifier<T, M, I, E, S2>
    where
        S2: DiagnosticSink<T>,
    {
        IntersectionVerifier {
            operation: self.operation,
            equality: self.equality,
            container_equality: self.container_equality,
            sink,
            options: self.options,
            containers_checked: self.containers_checked,
            cases_run: self.cases_run,
            mismatches: self.mismatches,
            output: PhantomData,
        }
    }

    /// Replace the equality predicates, `container_equality` is used by the container check and
    /// should not merge duplicate linestrings.
    pub fn with_equality<E2>(
        self,
        equality: E2,
        container_equality: E2,
    ) -> IntersectionVerifier<T, M, I, E2, S>
    where
        E2: GeometryEquality<T>,
    {
        IntersectionVerifier {
            operation: self.operation,
            equality,
            container_equality,
            sink: self.sink,
            options: self.options,
            containers_checked: self.containers_checked,
            cases_run: self.cases_run,
            mismatches: self.mismatches,
            output: PhantomData,
        }
    }

    /// Compute results into the linestring container `M2` instead.
    pub fn with_output<M2>(self) -> IntersectionVerifier<T, M2, I, E, S>
    where
        M2: LinestringOutput<T>,
    {
        IntersectionVerifier {
            operation: self.operation,
            equality: self.equality,
            container_equality: self.container_equality,
            sink: self.sink,
            options: self.options,
            containers_checked: self.containers_checked,
            cases_run: self.cases_run,
            mismatches: self.mismatches,
            output: PhantomData,
        }
    }

    #[inline]
    pub fn options(&self) -> &VerifyOptions<T> {
        &self.options
    }

    #[inline]
    pub fn operation(&self) -> &I {
        &self.operation
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Whether the container check has already run.
    #[inline]
    pub fn containers_checked(&self) -> bool {
        self.containers_checked
    }

    #[inline]
    pub fn cases_run(&self) -> usize {
        self.cases_run
    }

    /// Mismatches recorded so far.
    #[inline]
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    /// Verify a case with a single accepted result.
    pub fn verify<G1, G2>(
        &mut self,
        geom1: &G1,
        geom2: &G2,
        expected: &MultiLineString<T>,
        case_id: &str,
    ) -> bool
    where
        G1: Linear<T> + ?Sized,
        G2: Linear<T> + ?Sized,
    {
        self.verify_either(geom1, geom2, expected, expected, case_id)
    }

    /// Verify a case where either of two results is accepted.
    pub fn verify_either<G1, G2>(
        &mut self,
        geom1: &G1,
        geom2: &G2,
        expected1: &MultiLineString<T>,
        expected2: &MultiLineString<T>,
        case_id: &str,
    ) -> bool
    where
        G1: Linear<T> + ?Sized,
        G2: Linear<T> + ?Sized,
    {
        let accepted = AcceptedResults::either(expected1.clone(), expected2.clone());
        self.verify_accepted(geom1, geom2, &accepted, case_id)
    }

    /// Verify a case against a set of accepted results, returns `true` if every check passed.
    ///
    /// Failed checks are recorded, see [mismatches](Self::mismatches).
    pub fn verify_accepted<G1, G2>(
        &mut self,
        geom1: &G1,
        geom2: &G2,
        accepted: &AcceptedResults<T>,
        case_id: &str,
    ) -> bool
    where
        G1: Linear<T> + ?Sized,
        G2: Linear<T> + ?Sized,
    {
        log::debug!("test case: {case_id}");
        self.cases_run += 1;
        let mismatch_count = self.mismatches.len();
        let mut case = CaseContext {
            case_id,
            geom1_wkt: linestrings_to_wkt(geom1.linestrings()),
            geom2_wkt: linestrings_to_wkt(geom2.linestrings()),
            expected_wkt: accepted.iter().map(|e| e.to_string()).collect(),
        };

        let mut output = M::default();
        self.operation.intersection(geom1, geom2, &mut output);
        let passed = self.check_accepted(&case, CheckKind::Forward, accepted, &output);
        log::debug!(
            "geometry #1: {}\ngeometry #2: {}\n{}: {}",
            case.geom1_wkt,
            case.geom2_wkt,
            self.operation.name(),
            linestrings_to_wkt(output.linestring_refs())
        );
        self.sink.record(&DiagnosticRecord {
            operation: self.operation.name().to_string(),
            case_id: case_id.to_string(),
            geom1: MultiLineString::from_linestrings(geom1.linestrings().to_vec()),
            geom2: MultiLineString::from_linestrings(geom2.linestrings().to_vec()),
            result: MultiLineString::from_linestrings(
                output.linestring_refs().into_iter().cloned().collect(),
            ),
            passed,
        });

        if self.options.check_containers && !self.containers_checked {
            self.containers_checked = true;
            if let Some(expected1) = accepted.first() {
                log::debug!("testing with vector and deque as output container");
                self.check_containers(geom1, geom2, expected1, &case);
            }
        }

        output.clear_output();
        self.operation.intersection(geom2, geom1, &mut output);
        self.check_accepted(&case, CheckKind::Reversed, accepted, &output);

        if self.options.check_reversed_orientation {
            let reversed1 =
                MultiLineString::from_linestrings(geom1.linestrings().to_vec()).reversed();
            output.clear_output();
            self.operation.intersection(&reversed1, geom2, &mut output);
            let reversed_case = CaseContext {
                geom1_wkt: reversed1.to_string(),
                ..case.clone()
            };
            self.check_accepted(
                &reversed_case,
                CheckKind::ReversedOrientation,
                accepted,
                &output,
            );
        }

        if self.options.check_output_shapes {
            self.check_output_shapes(geom1, geom2, &mut case);
        }

        self.mismatches.len() == mismatch_count
    }

    /// Consume the verifier, returning all mismatches as an error if any check failed.
    pub fn finish(self) -> Result<(), VerifyError> {
        log::debug!(
            "{} case(s) verified, {} mismatch(es)",
            self.cases_run,
            self.mismatches.len()
        );

        if self.mismatches.is_empty() {
            Ok(())
        } else {
            Err(VerifyError::Mismatches(self.mismatches))
        }
    }

    /// Panics with a report of every mismatch if any check failed.
    #[track_caller]
    pub fn assert_all_passed(&self) {
        if !self.mismatches.is_empty() {
            panic!("{}", VerifyError::Mismatches(self.mismatches.clone()));
        }
    }

    fn check_accepted<O>(
        &mut self,
        case: &CaseContext<'_>,
        check: CheckKind,
        accepted: &AcceptedResults<T>,
        output: &O,
    ) -> bool
    where
        O: LinestringOutput<T>,
    {
        let computed = output.linestring_refs();
        if accepted.accepts(&self.equality, &computed) {
            return true;
        }

        let computed_wkt = linestrings_to_wkt(computed);
        self.record_mismatch(case, check, case.expected_wkt.clone(), computed_wkt);
        false
    }

    fn check_containers<G1, G2>(
        &mut self,
        geom1: &G1,
        geom2: &G2,
        expected1: &MultiLineString<T>,
        case: &CaseContext<'_>,
    ) where
        G1: Linear<T> + ?Sized,
        G2: Linear<T> + ?Sized,
    {
        let mut vector_output: Vec<LineString<T>> = Vec::new();
        let mut deque_output: VecDeque<LineString<T>> = VecDeque::new();
        self.operation.intersection(geom1, geom2, &mut vector_output);
        self.operation.intersection(geom1, geom2, &mut deque_output);

        let expected_wkt = vec![expected1.to_string()];
        if !self.container_equality.equals(expected1, &vector_output) {
            self.record_mismatch(
                case,
                CheckKind::VectorContainer,
                expected_wkt.clone(),
                linestrings_to_wkt(&vector_output),
            );
        }

        if !self.container_equality.equals(expected1, &deque_output) {
            self.record_mismatch(
                case,
                CheckKind::DequeContainer,
                expected_wkt,
                linestrings_to_wkt(&deque_output),
            );
        }
    }

    fn check_output_shapes<G1, G2>(&mut self, geom1: &G1, geom2: &G2, case: &mut CaseContext<'_>)
    where
        G1: Linear<T> + ?Sized,
        G2: Linear<T> + ?Sized,
    {
        let mut mls12 = M::default();
        let mut mls21 = M::default();
        let mut mp12 = MultiPoint::new();
        let mut mp21 = MultiPoint::new();
        self.operation.intersection(geom1, geom2, &mut mls12);
        self.operation.intersection(geom1, geom2, &mut mp12);
        self.operation.intersection(geom2, geom1, &mut mls21);
        self.operation.intersection(geom2, geom1, &mut mp21);

        log::debug!(
            "intersection(1,2) [MLS]: {}\nintersection(2,1) [MLS]: {}\n\
             intersection(1,2) [MP]: {}\nintersection(2,1) [MP]: {}",
            linestrings_to_wkt(mls12.linestring_refs()),
            linestrings_to_wkt(mls21.linestring_refs()),
            mp12,
            mp21
        );

        let eps = self.options.pos_equal_eps;
        self.check_end_points_in(case, &mls12, &mp12.point_values(), eps);

        // remaining shape checks report the operands as passed to the operation
        std::mem::swap(&mut case.geom1_wkt, &mut case.geom2_wkt);
        self.check_end_points_in(case, &mls21, &mp21.point_values(), eps);
        std::mem::swap(&mut case.geom1_wkt, &mut case.geom2_wkt);

        if !points_equal(&mp12.points, &mp21.points, eps) {
            self.record_mismatch(
                case,
                CheckKind::PointCommutativity,
                vec![mp12.to_string()],
                mp21.to_string(),
            );
        }
    }

    fn check_end_points_in<O>(
        &mut self,
        case: &CaseContext<'_>,
        linestrings: &O,
        points: &[Vector2<T>],
        eps: T,
    ) where
        O: LinestringOutput<T>,
    {
        let end_points: Vec<Vector2<T>> = linestrings
            .linestring_refs()
            .into_iter()
            .flat_map(|ls| ls.first().into_iter().chain(ls.last()))
            .collect();

        let missing = end_points
            .iter()
            .any(|p| !points.iter().any(|q| p.fuzzy_eq_eps(*q, eps)));
        if missing {
            self.record_mismatch(
                case,
                CheckKind::PointShape,
                vec![format!("superset of {}", points_to_wkt(&end_points))],
                points_to_wkt(points),
            );
        }
    }

    fn record_mismatch(
        &mut self,
        case: &CaseContext<'_>,
        check: CheckKind,
        expected_wkt: Vec<String>,
        computed_wkt: String,
    ) {
        let mismatch = Mismatch {
            case_id: case.case_id.to_string(),
            check,
            operation: self.operation.name().to_string(),
            geom1_wkt: case.geom1_wkt.clone(),
            geom2_wkt: case.geom2_wkt.clone(),
            expected_wkt,
            computed_wkt,
        };
        log::warn!("{mismatch}");
        self.mismatches.push(mismatch);
    }
}

/// Text of the case being verified, used when recording mismatches.
#[derive(Debug, Clone)]
struct CaseContext<'a> {
    case_id: &'a str,
    geom1_wkt: String,
    geom2_wkt: String,
    expected_wkt: Vec<String>,
}
