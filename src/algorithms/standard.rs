use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::algorithms::ComparisonStrategy;

/// Compares elements with their [`PartialEq`] implementation.
///
/// Absent values are naturally supported by diffing sequences of [`Option`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StandardComparison;

impl<A, E> ComparisonStrategy<A, E> for StandardComparison
where
    A: PartialEq<E> + ?Sized,
    E: ?Sized,
{
    type Error = Infallible;

    #[inline(always)]
    fn are_equal(&self, actual: &A, expected: &E) -> Result<bool, Self::Error> {
        Ok(actual == expected)
    }
}

/// Compares elements with a user supplied function.
///
/// The function is called as `f(actual, expected)`.
#[derive(Clone, Copy)]
pub struct Comparator<F> {
    f: F,
}

impl<F> Comparator<F> {
    /// Wraps a comparison function.
    pub fn new(f: F) -> Comparator<F> {
        Comparator { f }
    }
}

impl<F> fmt::Debug for Comparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Comparator").finish()
    }
}

impl<A, E, F> ComparisonStrategy<A, E> for Comparator<F>
where
    A: ?Sized,
    E: ?Sized,
    F: Fn(&A, &E) -> bool,
{
    type Error = Infallible;

    fn are_equal(&self, actual: &A, expected: &E) -> Result<bool, Self::Error> {
        Ok((self.f)(actual, expected))
    }
}

/// Compares elements with a user supplied function that can fail.
///
/// The first error returned by the function aborts the diff and is handed
/// back to the caller as is.
pub struct TryComparator<F, Err> {
    f: F,
    _err: PhantomData<fn() -> Err>,
}

impl<F, Err> TryComparator<F, Err> {
    /// Wraps a fallible comparison function.
    pub fn new(f: F) -> TryComparator<F, Err> {
        TryComparator {
            f,
            _err: PhantomData,
        }
    }
}

impl<F: Clone, Err> Clone for TryComparator<F, Err> {
    fn clone(&self) -> Self {
        TryComparator::new(self.f.clone())
    }
}

impl<F, Err> fmt::Debug for TryComparator<F, Err> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TryComparator").finish()
    }
}

impl<A, E, F, Err> ComparisonStrategy<A, E> for TryComparator<F, Err>
where
    A: ?Sized,
    E: ?Sized,
    F: Fn(&A, &E) -> Result<bool, Err>,
{
    type Error = Err;

    fn are_equal(&self, actual: &A, expected: &E) -> Result<bool, Self::Error> {
        (self.f)(actual, expected)
    }
}

/// Compares floating point numbers within an absolute tolerance.
///
/// Equal values always match, including infinities of the same sign.
/// `NaN` is never equal to anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Creates a strategy that accepts values at most `epsilon` apart.
    pub fn new(epsilon: f64) -> Tolerance {
        Tolerance(epsilon.abs())
    }

    /// Returns the accepted distance.
    pub fn epsilon(&self) -> f64 {
        self.0
    }
}

impl ComparisonStrategy<f64> for Tolerance {
    type Error = Infallible;

    fn are_equal(&self, actual: &f64, expected: &f64) -> Result<bool, Self::Error> {
        Ok(actual == expected || (actual - expected).abs() <= self.0)
    }
}

impl ComparisonStrategy<f32> for Tolerance {
    type Error = Infallible;

    fn are_equal(&self, actual: &f32, expected: &f32) -> Result<bool, Self::Error> {
        Ok(actual == expected || f64::from((actual - expected).abs()) <= self.0)
    }
}

#[test]
fn test_standard_comparison() {
    assert_eq!(StandardComparison.are_equal(&1, &1), Ok(true));
    assert_eq!(StandardComparison.are_equal("a", "b"), Ok(false));
    assert_eq!(
        StandardComparison.are_equal(&None::<i32>, &Some(1)),
        Ok(false)
    );
    assert_eq!(StandardComparison.are_equal(&None::<i32>, &None), Ok(true));
}

#[test]
fn test_comparator_argument_order() {
    let starts_with = Comparator::new(|a: &str, e: &str| a.starts_with(e));
    assert_eq!(starts_with.are_equal("foobar", "foo"), Ok(true));
    assert_eq!(starts_with.are_equal("foo", "foobar"), Ok(false));
}

#[test]
fn test_try_comparator() {
    let strict = TryComparator::<_, String>::new(|a: &i32, e: &i32| {
        if *a < 0 || *e < 0 {
            Err(format!("negative value {} / {}", a, e))
        } else {
            Ok(a == e)
        }
    });
    assert_eq!(strict.are_equal(&1, &1), Ok(true));
    assert_eq!(
        strict.are_equal(&-1, &1),
        Err("negative value -1 / 1".to_string())
    );
}

#[test]
fn test_tolerance() {
    let close = Tolerance::new(0.1);
    assert_eq!(close.are_equal(&1.0f64, &1.05), Ok(true));
    assert_eq!(close.are_equal(&1.0f64, &1.2), Ok(false));
    assert_eq!(close.are_equal(&1.0f32, &0.95), Ok(true));
    assert_eq!(close.are_equal(&f64::NAN, &f64::NAN), Ok(false));
    assert_eq!(close.are_equal(&f64::INFINITY, &f64::INFINITY), Ok(true));
    assert_eq!(close.are_equal(&f64::NEG_INFINITY, &f64::NEG_INFINITY), Ok(true));
    assert_eq!(close.are_equal(&f64::INFINITY, &f64::NEG_INFINITY), Ok(false));
    assert_eq!(close.are_equal(&f64::INFINITY, &f64::MAX), Ok(false));
    assert_eq!(close.are_equal(&f32::INFINITY, &f32::INFINITY), Ok(true));
    assert_eq!(close.are_equal(&f32::NEG_INFINITY, &f32::INFINITY), Ok(false));
    assert_eq!(Tolerance::new(-0.5).epsilon(), 0.5);
}

#[test]
fn test_tolerance_diff_with_infinities() {
    use crate::algorithms::diff_slices;

    let close = Tolerance::new(0.01);
    let rv = diff_slices(&close, &[f64::INFINITY, 1.0], &[1.005, f64::INFINITY]).unwrap();
    assert!(!rv.has_differences());

    let rv = diff_slices(&close, &[f64::NEG_INFINITY], &[f64::INFINITY]).unwrap();
    assert_eq!(rv.unexpected(), &[0]);
    assert_eq!(rv.missing(), &[0]);
}
