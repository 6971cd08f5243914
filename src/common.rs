use std::convert::Infallible;
use std::ops::{Index, Range};

use crate::algorithms::{diff, diff_slices, ComparisonStrategy, DiffIndexes, StandardComparison};
use crate::utils::into_ok;

/// Creates a multiset diff with a strategy that cannot fail.
///
/// This is like [`diff`] but returns the [`DiffIndexes`] directly instead of
/// a result.
pub fn capture_diff<Actual, Expected, S>(
    strategy: &S,
    actual: &Actual,
    actual_range: Range<usize>,
    expected: &Expected,
    expected_range: Range<usize>,
) -> DiffIndexes
where
    Actual: Index<usize> + ?Sized,
    Expected: Index<usize> + ?Sized,
    S: ComparisonStrategy<Actual::Output, Expected::Output, Error = Infallible> + ?Sized,
{
    into_ok(diff(
        strategy,
        actual,
        actual_range,
        expected,
        expected_range,
    ))
}

/// Creates a multiset diff of two slices with [`PartialEq`].
pub fn capture_diff_slices<A, E>(actual: &[A], expected: &[E]) -> DiffIndexes
where
    A: PartialEq<E>,
{
    into_ok(diff_slices(&StandardComparison, actual, expected))
}

#[test]
fn test_capture_diff_slices() {
    let rv = capture_diff_slices(&["a", "b", "a"], &["a", "c"]);
    assert_eq!(rv.unexpected(), &[1, 2]);
    assert_eq!(rv.missing(), &[1]);
}

#[test]
fn test_capture_diff_with_ranges() {
    use crate::algorithms::Comparator;

    let actual = vec![10u32, 20, 30, 40];
    let expected = vec![2u32, 3, 4];
    let same_tens = Comparator::new(|a: &u32, e: &u32| *a == e * 10);
    let rv = capture_diff(&same_tens, &actual, 1..4, &expected, 0..3);
    assert!(!rv.has_differences());

    let rv = capture_diff(&same_tens, &actual, 0..4, &expected, 1..3);
    assert_eq!(rv.unexpected(), &[0, 1]);
    assert_eq!(rv.missing(), &[] as &[usize]);
}
