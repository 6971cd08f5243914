use std::convert::Infallible;
use std::ops::{Index, Range};

use crate::algorithms::{diff, ComparisonStrategy};
use crate::utils::into_ok;

/// The multiset difference between an actual and an expected sequence.
///
/// `unexpected` holds the actual elements that are not accounted for by the
/// expected sequence, `missing` holds the expected elements that are not
/// accounted for by the actual sequence.  Both keep the order the elements
/// had in their input.
///
/// A diff is immutable once created.  Depending on how it was created it
/// either borrows the unmatched elements ([`MultisetDiff::from_slices`]) or
/// owns them ([`MultisetDiff::from_iters`]).
///
/// ```rust
/// use bagdiff::MultisetDiff;
/// use bagdiff::algorithms::StandardComparison;
///
/// let diff = MultisetDiff::from_slices(&[1, 1, 2], &[1, 3], StandardComparison);
/// assert_eq!(diff.unexpected(), &[&1, &2]);
/// assert_eq!(diff.missing(), &[&3]);
/// assert!(diff.has_differences());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MultisetDiff<A, E = A> {
    unexpected: Vec<A>,
    missing: Vec<E>,
}

impl<A, E> MultisetDiff<A, E> {
    /// Diffs two sequences consuming them.
    ///
    /// Both inputs are iterated exactly once.  The unmatched elements are
    /// moved into the returned diff.
    pub fn from_iters<Actual, Expected, S>(
        actual: Actual,
        expected: Expected,
        strategy: S,
    ) -> MultisetDiff<A, E>
    where
        Actual: IntoIterator<Item = A>,
        Expected: IntoIterator<Item = E>,
        S: ComparisonStrategy<A, E, Error = Infallible>,
    {
        into_ok(MultisetDiff::try_from_iters(actual, expected, strategy))
    }

    /// Diffs two sequences consuming them with a strategy that can fail.
    ///
    /// If the strategy fails the error is returned and the inputs are
    /// dropped.
    pub fn try_from_iters<Actual, Expected, S>(
        actual: Actual,
        expected: Expected,
        strategy: S,
    ) -> Result<MultisetDiff<A, E>, S::Error>
    where
        Actual: IntoIterator<Item = A>,
        Expected: IntoIterator<Item = E>,
        S: ComparisonStrategy<A, E>,
    {
        let actual: Vec<A> = actual.into_iter().collect();
        let expected: Vec<E> = expected.into_iter().collect();
        let (unexpected, missing) = diff(
            &strategy,
            &actual,
            0..actual.len(),
            &expected,
            0..expected.len(),
        )?
        .into_parts();
        Ok(MultisetDiff {
            unexpected: pick(actual, unexpected),
            missing: pick(expected, missing),
        })
    }

    /// Returns the actual elements not accounted for by the expected ones.
    pub fn unexpected(&self) -> &[A] {
        &self.unexpected
    }

    /// Returns the expected elements not accounted for by the actual ones.
    pub fn missing(&self) -> &[E] {
        &self.missing
    }

    /// Returns `true` if there are unexpected or missing elements.
    pub fn has_differences(&self) -> bool {
        !self.unexpected.is_empty() || !self.missing.is_empty()
    }

    /// Converts the diff into `(unexpected, missing)`.
    pub fn into_parts(self) -> (Vec<A>, Vec<E>) {
        (self.unexpected, self.missing)
    }
}

impl<'actual, 'expected, A: ?Sized, E: ?Sized> MultisetDiff<&'actual A, &'expected E> {
    /// Diffs two slices.
    pub fn from_slices<S>(
        actual: &'actual [A],
        expected: &'expected [E],
        strategy: S,
    ) -> MultisetDiff<&'actual A, &'expected E>
    where
        A: Sized,
        E: Sized,
        S: ComparisonStrategy<A, E, Error = Infallible>,
    {
        into_ok(MultisetDiff::try_from_slices(actual, expected, strategy))
    }

    /// Diffs two slices with a strategy that can fail.
    pub fn try_from_slices<S>(
        actual: &'actual [A],
        expected: &'expected [E],
        strategy: S,
    ) -> Result<MultisetDiff<&'actual A, &'expected E>, S::Error>
    where
        A: Sized,
        E: Sized,
        S: ComparisonStrategy<A, E>,
    {
        MultisetDiff::try_from_indexed(
            actual,
            0..actual.len(),
            expected,
            0..expected.len(),
            strategy,
        )
    }

    /// Diffs ranges of two indexable sequences with a strategy that can fail.
    ///
    /// This is useful for diffing sequences that are not slices or only
    /// parts of them.
    pub fn try_from_indexed<Actual, Expected, S>(
        actual: &'actual Actual,
        actual_range: Range<usize>,
        expected: &'expected Expected,
        expected_range: Range<usize>,
        strategy: S,
    ) -> Result<MultisetDiff<&'actual A, &'expected E>, S::Error>
    where
        Actual: Index<usize, Output = A> + ?Sized,
        Expected: Index<usize, Output = E> + ?Sized,
        S: ComparisonStrategy<A, E>,
    {
        let indexes = diff(&strategy, actual, actual_range, expected, expected_range)?;
        Ok(MultisetDiff {
            unexpected: indexes.unexpected().iter().map(move |&idx| &actual[idx]).collect(),
            missing: indexes.missing().iter().map(move |&idx| &expected[idx]).collect(),
        })
    }
}

/// Moves the items at the ascending `indexes` out of `items`.
fn pick<T>(items: Vec<T>, indexes: Vec<usize>) -> Vec<T> {
    let mut wanted = indexes.into_iter().peekable();
    let mut rv = Vec::with_capacity(wanted.len());
    for (idx, item) in items.into_iter().enumerate() {
        if wanted.peek() == Some(&idx) {
            wanted.next();
            rv.push(item);
        }
    }
    rv
}

#[test]
fn test_from_slices() {
    use crate::algorithms::StandardComparison;

    let actual = vec!["a", "b", "b"];
    let expected = vec!["b", "c"];
    let diff = MultisetDiff::from_slices(&actual, &expected, StandardComparison);
    assert_eq!(diff.unexpected(), &[&"a", &"b"]);
    assert_eq!(diff.missing(), &[&"c"]);
    assert!(diff.has_differences());
    assert_eq!(actual, vec!["a", "b", "b"]);
    assert_eq!(expected, vec!["b", "c"]);
}

#[test]
fn test_from_iters_moves_elements() {
    use crate::algorithms::StandardComparison;

    #[derive(Debug, PartialEq)]
    struct NoClone(u32);

    let diff = MultisetDiff::from_iters(
        vec![NoClone(1), NoClone(2), NoClone(2)],
        vec![NoClone(2), NoClone(3)],
        StandardComparison,
    );
    let (unexpected, missing) = diff.into_parts();
    assert_eq!(unexpected, vec![NoClone(1), NoClone(2)]);
    assert_eq!(missing, vec![NoClone(3)]);
}

#[test]
fn test_from_iters_consumes_once() {
    use crate::algorithms::StandardComparison;

    let diff = MultisetDiff::from_iters(
        (0..5).map(|x| x * 2),
        vec![2, 4, 5].into_iter(),
        StandardComparison,
    );
    insta::assert_debug_snapshot!(diff, @r###"
    MultisetDiff {
        unexpected: [
            0,
            6,
            8,
        ],
        missing: [
            5,
        ],
    }
    "###);
}

#[test]
fn test_empty_inputs() {
    use crate::algorithms::StandardComparison;

    let diff: MultisetDiff<i32> =
        MultisetDiff::from_iters(Vec::new(), Vec::new(), StandardComparison);
    assert!(!diff.has_differences());
    assert!(diff.unexpected().is_empty());
    assert!(diff.missing().is_empty());
}

#[test]
fn test_try_from_slices_error() {
    use crate::algorithms::TryComparator;

    #[derive(Debug, PartialEq)]
    struct Incomparable(&'static str);

    let picky = TryComparator::<_, Incomparable>::new(|a: &f64, e: &f64| {
        if a.is_nan() || e.is_nan() {
            Err(Incomparable("nan"))
        } else {
            Ok(a == e)
        }
    });
    let rv = MultisetDiff::try_from_slices(&[1.0, 2.0], &[f64::NAN], &picky);
    assert_eq!(rv, Err(Incomparable("nan")));

    let rv = MultisetDiff::try_from_slices(&[1.0, 2.0], &[2.0], &picky);
    assert_eq!(rv.map(|diff| diff.into_parts()), Ok((vec![&1.0], vec![])));
}

#[test]
fn test_try_from_indexed() {
    use std::collections::VecDeque;

    use crate::algorithms::StandardComparison;

    let actual: VecDeque<char> = "xabcx".chars().collect();
    let expected: VecDeque<char> = "cab".chars().collect();
    let diff = MultisetDiff::try_from_indexed(&actual, 1..4, &expected, 0..3, StandardComparison);
    assert_eq!(diff.map(|diff| diff.has_differences()), Ok(false));
}

#[test]
fn test_pick() {
    assert_eq!(pick(vec!['a', 'b', 'c', 'd'], vec![0, 2, 3]), vec!['a', 'c', 'd']);
    assert_eq!(pick(vec!['a', 'b'], vec![]), Vec::<char>::new());
}

#[test]
#[cfg(feature = "serde")]
fn test_serialize() {
    use crate::algorithms::StandardComparison;

    let diff = MultisetDiff::from_slices(&["a", "b"], &["b", "c"], StandardComparison);
    assert_eq!(
        serde_json::to_string(&diff).unwrap(),
        r#"{"unexpected":["a"],"missing":["c"]}"#
    );
}
