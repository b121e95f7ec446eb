//! Order and orientation insensitive equality of linear geometries.
use crate::{
    core::{
        math::{is_straight_through, Vector2},
        traits::Real,
    },
    geometry::LineString,
};
use std::cmp::Ordering;

/// Trait for the equality predicate used to compare an expected intersection result with a
/// computed one.
pub trait GeometryEquality<T>
where
    T: Real,
{
    /// Returns `true` if `expected` and `actual` describe the same multi-linestring.
    fn equals<'a, I1, I2>(&self, expected: I1, actual: I2) -> bool
    where
        I1: IntoIterator<Item = &'a LineString<T>>,
        I2: IntoIterator<Item = &'a LineString<T>>;
}

/// Multi-linestring equality ignoring linestring order, linestring direction, repeated points and
/// vertexes that lie straight through on a line.
///
/// With `unique` set, linestrings that appear more than once count only once.
///
/// # Examples
///
/// ```
/// # use linear_overlay::geometry::*;
/// # use linear_overlay::equality::*;
/// # use linear_overlay::linestring;
/// let a: Vec<LineString> = vec![
///     linestring![(0.0, 0.0), (2.0, 0.0)],
///     linestring![(5.0, 5.0), (6.0, 6.0)],
/// ];
/// let b: Vec<LineString> = vec![
///     linestring![(6.0, 6.0), (5.0, 5.0)],
///     linestring![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)],
/// ];
/// assert!(MultiLinestringEquals::new().equals(&a, &b));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct MultiLinestringEquals<T> {
    /// Remove duplicate linestrings before comparing.
    pub unique: bool,
    /// Fuzzy comparison epsilon used for determining if two positions are equal.
    pub pos_equal_eps: T,
}

impl<T> MultiLinestringEquals<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            unique: true,
            pos_equal_eps: T::from(1e-5).unwrap_or_else(T::fuzzy_epsilon),
        }
    }

    /// Equality that keeps duplicate linestrings (each must be matched separately).
    #[inline]
    pub fn non_unique() -> Self {
        Self {
            unique: false,
            ..Self::new()
        }
    }

    #[inline]
    pub fn with_pos_equal_eps(mut self, pos_equal_eps: T) -> Self {
        self.pos_equal_eps = pos_equal_eps;
        self
    }

    /// Canonical form of a multi-linestring as compared by this predicate.
    ///
    /// Linestrings are sorted by exact coordinate order, fuzzy equal linestrings may end up in
    /// any relative order.
    pub fn canonical<'a, I>(&self, linestrings: I) -> Vec<LineString<T>>
    where
        I: IntoIterator<Item = &'a LineString<T>>,
    {
        let eps = self.pos_equal_eps;
        let mut result: Vec<LineString<T>> = linestrings
            .into_iter()
            .map(|ls| canonical_linestring(ls, eps))
            .filter(|ls| !ls.is_empty())
            .collect();

        result.sort_by(exact_linestring_cmp);
        if self.unique {
            let mut kept: Vec<LineString<T>> = Vec::with_capacity(result.len());
            for ls in result {
                if !kept.iter().any(|k| linestrings_match(k, &ls, eps)) {
                    kept.push(ls);
                }
            }
            result = kept;
        }

        result
    }
}

impl<T> Default for MultiLinestringEquals<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GeometryEquality<T> for MultiLinestringEquals<T>
where
    T: Real,
{
    fn equals<'a, I1, I2>(&self, expected: I1, actual: I2) -> bool
    where
        I1: IntoIterator<Item = &'a LineString<T>>,
        I2: IntoIterator<Item = &'a LineString<T>>,
    {
        let expected = self.canonical(expected);
        let actual = self.canonical(actual);
        if expected.len() != actual.len() {
            return false;
        }

        // each expected linestring takes the first unused fuzzy equal actual linestring
        let mut used = vec![false; actual.len()];
        for e in &expected {
            let found = actual
                .iter()
                .enumerate()
                .position(|(i, a)| !used[i] && linestrings_match(e, a, self.pos_equal_eps));
            match found {
                Some(i) => used[i] = true,
                None => return false,
            }
        }

        true
    }
}

/// Returns `true` if both point collections hold the same points, ignoring order and
/// duplicates.
///
/// # Examples
///
/// ```
/// # use linear_overlay::core::math::*;
/// # use linear_overlay::equality::*;
/// let a = [vec2(1.0, 1.0), vec2(2.0, 0.0)];
/// let b = [vec2(2.0, 0.0), vec2(1.0, 1.0), vec2(1.0, 1.0)];
/// assert!(points_equal(&a, &b, 1e-5));
/// assert!(!points_equal(&a, &b[..1], 1e-5));
/// ```
pub fn points_equal<T>(a: &[Vector2<T>], b: &[Vector2<T>], pos_equal_eps: T) -> bool
where
    T: Real,
{
    let contained_in = |points: &[Vector2<T>], other: &[Vector2<T>]| {
        points
            .iter()
            .all(|p| other.iter().any(|q| p.fuzzy_eq_eps(*q, pos_equal_eps)))
    };

    contained_in(a, b) && contained_in(b, a)
}

/// Total order on coordinates, NaN sorts after every number.
#[inline]
fn exact_cmp<T>(a: T, b: T) -> Ordering
where
    T: Real,
{
    match a.partial_cmp(&b) {
        Some(ord) => ord,
        None => a.partial_cmp(&a).is_none().cmp(&b.partial_cmp(&b).is_none()),
    }
}

fn exact_linestring_cmp<T>(a: &LineString<T>, b: &LineString<T>) -> Ordering
where
    T: Real,
{
    for (p, q) in a.points.iter().zip(b.points.iter()) {
        let ord = exact_cmp(p.x, q.x).then_with(|| exact_cmp(p.y, q.y));
        if ord != Ordering::Equal {
            return ord;
        }
    }

    a.len().cmp(&b.len())
}

/// Returns `true` if both canonical linestrings hold fuzzy equal points, in order or reversed.
fn linestrings_match<T>(a: &LineString<T>, b: &LineString<T>, eps: T) -> bool
where
    T: Real,
{
    if a.len() != b.len() {
        return false;
    }

    a.points
        .iter()
        .zip(b.points.iter())
        .all(|(p, q)| p.fuzzy_eq_eps(*q, eps))
        || a.points
            .iter()
            .zip(b.points.iter().rev())
            .all(|(p, q)| p.fuzzy_eq_eps(*q, eps))
}

/// Simplify a linestring and orient it so equal paths produce equal point sequences.
fn canonical_linestring<T>(linestring: &LineString<T>, eps: T) -> LineString<T>
where
    T: Real,
{
    let mut points: Vec<Vector2<T>> = Vec::with_capacity(linestring.len());
    for &p in &linestring.points {
        match points.last() {
            Some(last) if last.fuzzy_eq_eps(p, eps) => {}
            _ => points.push(p),
        }
    }

    let closed = points.len() > 3 && points[0].fuzzy_eq_eps(points[points.len() - 1], eps);
    if closed {
        points.pop();
        let ring = remove_straight_through(points, eps, true);
        return LineString::from_points(orient_ring(ring, eps));
    }

    let mut points = remove_straight_through(points, eps, false);
    if points.len() > 1 && points[points.len() - 1].fuzzy_lex_cmp_eps(points[0], eps) == Ordering::Less
    {
        points.reverse();
    }

    LineString::from_points(points)
}

/// Drop vertexes the path passes straight through, for a ring (last point not repeated) the
/// vertexes at the wrap around are checked too.
fn remove_straight_through<T>(points: Vec<Vector2<T>>, eps: T, ring: bool) -> Vec<Vector2<T>>
where
    T: Real,
{
    if points.len() < 3 {
        return points;
    }

    let mut result: Vec<Vector2<T>> = Vec::with_capacity(points.len());
    let last_index = points.len() - 1;
    for i in 0..points.len() {
        let is_end = i == 0 || i == last_index;
        if is_end && !ring {
            result.push(points[i]);
            continue;
        }

        let prev = match result.last() {
            Some(&p) => p,
            None => points[last_index],
        };
        let next = if i == last_index {
            result.first().copied().unwrap_or(points[0])
        } else {
            points[i + 1]
        };

        if !is_straight_through(prev, points[i], next, eps) {
            result.push(points[i]);
        }
    }

    // the first vertex was checked against the unsimplified last vertex
    if ring && result.len() >= 3 {
        let n = result.len();
        if is_straight_through(result[n - 1], result[0], result[1], eps) {
            result.remove(0);
        }
    }

    result
}

/// Rotate a ring to start at its lexicographically smallest vertex and pick the direction that
/// visits the smaller neighbour first, then close it again.
fn orient_ring<T>(mut ring: Vec<Vector2<T>>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    if ring.is_empty() {
        return ring;
    }

    let start = (1..ring.len()).fold(0, |min_i, i| {
        if ring[i].fuzzy_lex_cmp_eps(ring[min_i], eps) == Ordering::Less {
            i
        } else {
            min_i
        }
    });
    ring.rotate_left(start);

    let n = ring.len();
    if n > 2 && ring[n - 1].fuzzy_lex_cmp_eps(ring[1], eps) == Ordering::Less {
        ring[1..].reverse();
    }

    ring.push(ring[0]);
    ring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn ring_start_and_direction() {
        let eq = MultiLinestringEquals::<f64>::new();
        let a = linestring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];
        let b = linestring![(1.0, 1.0), (1.0, 0.0), (0.0, 0.0), (0.0, 1.0), (1.0, 1.0)];
        assert!(eq.equals([&a], [&b]));
        let canonical = eq.canonical([&b]);
        assert_eq!(canonical[0].first(), Some(vec2(0.0, 0.0)));
        assert_eq!(canonical[0][1], vec2(0.0, 1.0));
    }

    #[test]
    fn ring_straight_through_start_removed() {
        let eq = MultiLinestringEquals::<f64>::new();
        let a = linestring![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)];
        // starts mid edge
        let b = linestring![(1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0), (1.0, 0.0)];
        assert!(eq.equals([&a], [&b]));
    }

    #[test]
    fn spike_kept() {
        let eq = MultiLinestringEquals::<f64>::new();
        let spike = linestring![(0.0, 0.0), (2.0, 0.0), (1.0, 0.0)];
        let straight = linestring![(0.0, 0.0), (2.0, 0.0)];
        assert!(!eq.equals([&spike], [&straight]));
    }

    #[test]
    fn unique_flag() {
        let ls = linestring![(0.0, 0.0), (2.0, 0.0)];
        let once = vec![ls.clone()];
        let twice = vec![ls.clone(), ls.reversed()];
        assert!(MultiLinestringEquals::<f64>::new().equals(&once, &twice));
        assert!(!MultiLinestringEquals::<f64>::non_unique().equals(&once, &twice));
    }
}
