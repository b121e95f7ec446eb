use crate::{
    core::traits::Real,
    equality::GeometryEquality,
    geometry::{LineString, MultiLineString},
};

/// The set of results accepted as correct for one test case.
///
/// Most cases have a single correct answer, some have two (e.g. when the expected linestring
/// direction depends on which input is walked).
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedResults<T = f64> {
    results: Vec<MultiLineString<T>>,
}

impl<T> AcceptedResults<T>
where
    T: Real,
{
    /// A single accepted result.
    #[inline]
    pub fn one(expected: MultiLineString<T>) -> Self {
        Self {
            results: vec![expected],
        }
    }

    /// Either of two results is accepted.
    #[inline]
    pub fn either(expected1: MultiLineString<T>, expected2: MultiLineString<T>) -> Self {
        Self {
            results: vec![expected1, expected2],
        }
    }

    #[inline]
    pub fn push(&mut self, expected: MultiLineString<T>) {
        self.results.push(expected);
    }

    /// The primary expected result, used for checks that compare against one value.
    #[inline]
    pub fn first(&self) -> Option<&MultiLineString<T>> {
        self.results.first()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, MultiLineString<T>> {
        self.results.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns `true` if `actual` equals any accepted result. An empty set accepts nothing.
    pub fn accepts<E>(&self, equality: &E, actual: &[&LineString<T>]) -> bool
    where
        E: GeometryEquality<T>,
    {
        self.results
            .iter()
            .any(|expected| equality.equals(expected, actual.iter().copied()))
    }
}

impl<T> From<MultiLineString<T>> for AcceptedResults<T>
where
    T: Real,
{
    #[inline]
    fn from(expected: MultiLineString<T>) -> Self {
        Self::one(expected)
    }
}

impl<T> FromIterator<MultiLineString<T>> for AcceptedResults<T> {
    fn from_iter<I: IntoIterator<Item = MultiLineString<T>>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AcceptedResults<T> {
    type Item = &'a MultiLineString<T>;
    type IntoIter = std::slice::Iter<'a, MultiLineString<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
