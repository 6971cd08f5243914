//! Multiset (bag) difference.
//!
//! * time: `O(N*M)` strategy calls per pass
//! * space: `O(N+M)`
//!
//! This does not align the two sequences.  Every element of one side is
//! matched against a pool of not yet consumed elements of the other side,
//! which is what makes duplicates come out right: `[x, x]` against `[x]`
//! leaves exactly one `x` unmatched.
//!
//! The diff is computed in two independent passes:
//!
//! 1. `actual - expected`: for every actual element the leftmost pool element
//!    of the expected side it is equal to is consumed.  The strategy is always
//!    invoked as `are_equal(actual, expected)`.
//! 2. `expected - actual`: for every expected element the strategy's
//!    [`pool_contains`](ComparisonStrategy::pool_contains) and
//!    [`remove_first_equivalent`](ComparisonStrategy::remove_first_equivalent)
//!    are used against a pool of the actual side.
//!
//! Each pass builds its own pool from the inputs.  The leftovers of the first
//! pass are not a valid substitute for the second pass once the strategy is
//! asymmetric.
use std::ops::{Index, Range};

use crate::algorithms::{ComparisonStrategy, DiffIndexes};

/// Multiset difference.
///
/// Diffs `actual` between indices `actual_range` against `expected` between
/// indices `expected_range`.  The returned indexes refer to `actual` and
/// `expected` directly, not to the ranges.
pub fn diff<Actual, Expected, S>(
    strategy: &S,
    actual: &Actual,
    actual_range: Range<usize>,
    expected: &Expected,
    expected_range: Range<usize>,
) -> Result<DiffIndexes, S::Error>
where
    Actual: Index<usize> + ?Sized,
    Expected: Index<usize> + ?Sized,
    S: ComparisonStrategy<Actual::Output, Expected::Output> + ?Sized,
{
    let unexpected = unexpected_indexes(
        strategy,
        actual,
        actual_range.clone(),
        expected,
        expected_range.clone(),
    )?;
    let missing = missing_indexes(strategy, actual, actual_range, expected, expected_range)?;
    Ok(DiffIndexes::new(unexpected, missing))
}

/// Shortcut for diffing slices.
pub fn diff_slices<A, E, S>(
    strategy: &S,
    actual: &[A],
    expected: &[E],
) -> Result<DiffIndexes, S::Error>
where
    S: ComparisonStrategy<A, E> + ?Sized,
{
    diff(strategy, actual, 0..actual.len(), expected, 0..expected.len())
}

fn unexpected_indexes<Actual, Expected, S>(
    strategy: &S,
    actual: &Actual,
    actual_range: Range<usize>,
    expected: &Expected,
    expected_range: Range<usize>,
) -> Result<Vec<usize>, S::Error>
where
    Actual: Index<usize> + ?Sized,
    Expected: Index<usize> + ?Sized,
    S: ComparisonStrategy<Actual::Output, Expected::Output> + ?Sized,
{
    let mut pool: Vec<&Expected::Output> = expected_range.map(|idx| &expected[idx]).collect();
    let mut rv = Vec::new();
    for idx in actual_range {
        match find_in_pool(strategy, &actual[idx], &pool)? {
            Some(pos) => {
                pool.remove(pos);
            }
            None => rv.push(idx),
        }
    }
    Ok(rv)
}

fn missing_indexes<Actual, Expected, S>(
    strategy: &S,
    actual: &Actual,
    actual_range: Range<usize>,
    expected: &Expected,
    expected_range: Range<usize>,
) -> Result<Vec<usize>, S::Error>
where
    Actual: Index<usize> + ?Sized,
    Expected: Index<usize> + ?Sized,
    S: ComparisonStrategy<Actual::Output, Expected::Output> + ?Sized,
{
    let mut pool: Vec<&Actual::Output> = actual_range.map(|idx| &actual[idx]).collect();
    let mut rv = Vec::new();
    for idx in expected_range {
        let item = &expected[idx];
        if strategy.pool_contains(&pool, item)? {
            strategy.remove_first_equivalent(&mut pool, item)?;
        } else {
            rv.push(idx);
        }
    }
    Ok(rv)
}

/// Position of the leftmost pool element `item` is equal to.
fn find_in_pool<A, E, S>(strategy: &S, item: &A, pool: &[&E]) -> Result<Option<usize>, S::Error>
where
    A: ?Sized,
    E: ?Sized,
    S: ComparisonStrategy<A, E> + ?Sized,
{
    for (pos, candidate) in pool.iter().enumerate() {
        // never flip this: asymmetric strategies only hold one way
        if strategy.are_equal(item, *candidate)? {
            return Ok(Some(pos));
        }
    }
    Ok(None)
}

#[test]
fn test_empty() {
    use crate::algorithms::StandardComparison;
    let rv = diff_slices::<i32, i32, _>(&StandardComparison, &[], &[]).unwrap();
    assert_eq!(rv.unexpected(), &[] as &[usize]);
    assert_eq!(rv.missing(), &[] as &[usize]);
    assert!(!rv.has_differences());
}

#[test]
fn test_duplicates() {
    use crate::algorithms::StandardComparison;
    let rv = diff_slices(&StandardComparison, &["x", "x"], &["x"]).unwrap();
    assert_eq!(rv.unexpected(), &[1]);
    assert_eq!(rv.missing(), &[] as &[usize]);

    let rv = diff_slices(&StandardComparison, &["x"], &["x", "x"]).unwrap();
    assert_eq!(rv.unexpected(), &[] as &[usize]);
    assert_eq!(rv.missing(), &[1]);
}

#[test]
fn test_no_overlap_keeps_order() {
    use crate::algorithms::StandardComparison;
    let rv = diff_slices(&StandardComparison, &[1, 2], &[3, 4]).unwrap();
    assert_eq!(rv.unexpected(), &[0, 1]);
    assert_eq!(rv.missing(), &[0, 1]);
    assert!(rv.has_differences());
}

#[test]
fn test_same_multiset_in_other_order() {
    use crate::algorithms::StandardComparison;
    let rv = diff_slices(&StandardComparison, &[3, 1, 2, 1], &[1, 2, 1, 3]).unwrap();
    assert!(!rv.has_differences());
}

#[test]
fn test_mixed_duplicates() {
    use crate::algorithms::StandardComparison;
    let rv = diff_slices(
        &StandardComparison,
        &["a", "b", "b", "c"],
        &["b", "c", "c", "d"],
    )
    .unwrap();
    insta::assert_debug_snapshot!(rv, @r###"
    DiffIndexes {
        unexpected: [
            0,
            2,
        ],
        missing: [
            2,
            3,
        ],
    }
    "###);
}

#[test]
fn test_absent_values() {
    use crate::algorithms::StandardComparison;
    let rv = diff_slices(
        &StandardComparison,
        &[None, Some(1), None],
        &[Some(1), None, Some(2)],
    )
    .unwrap();
    assert_eq!(rv.unexpected(), &[2]);
    assert_eq!(rv.missing(), &[2]);
}

#[test]
fn test_ranges() {
    use crate::algorithms::StandardComparison;
    let actual = [9, 1, 2, 9];
    let expected = [8, 2, 3, 8];
    let rv = diff(&StandardComparison, &actual[..], 1..3, &expected[..], 1..3).unwrap();
    assert_eq!(rv.unexpected(), &[1]);
    assert_eq!(rv.missing(), &[2]);
}

#[test]
fn test_greedy_leftmost_match() {
    use crate::algorithms::Comparator;
    // an actual value accounts for every expected value it divides
    let divides = Comparator::new(|a: &u32, e: &u32| e % a == 0);
    let rv = diff_slices(&divides, &[1, 2], &[2, 3]).unwrap();
    // 1 consumes 2 before 2 gets a chance to
    assert_eq!(rv.unexpected(), &[1]);
    assert_eq!(rv.missing(), &[1]);
}

#[test]
fn test_asymmetric_types() {
    use crate::algorithms::Comparator;

    struct Person {
        name: &'static str,
        #[allow(unused)]
        age: u32,
    }

    struct PersonDto {
        name: &'static str,
    }

    let people = [
        Person {
            name: "Alice",
            age: 31,
        },
        Person {
            name: "Bob",
            age: 42,
        },
    ];
    let dtos = [PersonDto { name: "Bob" }, PersonDto { name: "Carol" }];

    let by_dto_fields = Comparator::new(|dto: &PersonDto, person: &Person| dto.name == person.name);
    let rv = diff_slices(&by_dto_fields, &dtos, &people).unwrap();
    assert_eq!(rv.unexpected(), &[1]);
    assert_eq!(rv.missing(), &[0]);
}

#[test]
fn test_comparison_direction() {
    use std::cell::RefCell;
    use std::convert::Infallible;

    // only holds as actual == expected * 10
    struct TenTimes {
        calls: RefCell<Vec<(i32, i32)>>,
    }

    impl ComparisonStrategy<i32> for TenTimes {
        type Error = Infallible;

        fn are_equal(&self, actual: &i32, expected: &i32) -> Result<bool, Infallible> {
            self.calls.borrow_mut().push((*actual, *expected));
            Ok(*actual == *expected * 10)
        }
    }

    let strategy = TenTimes {
        calls: RefCell::new(Vec::new()),
    };
    let rv = diff_slices(&strategy, &[10], &[1]).unwrap();
    assert!(!rv.has_differences());
    let calls = strategy.calls.into_inner();
    assert!(!calls.is_empty());
    assert!(calls.iter().all(|&call| call == (10, 1)));
}

#[test]
fn test_strategy_error_propagates() {
    use crate::algorithms::TryComparator;

    let strict = TryComparator::<_, String>::new(|a: &i32, e: &i32| {
        if *a == 13 || *e == 13 {
            Err("unlucky".to_string())
        } else {
            Ok(a == e)
        }
    });
    assert_eq!(
        diff_slices(&strict, &[1, 13], &[1, 2]),
        Err("unlucky".to_string())
    );
    assert_eq!(
        diff_slices(&strict, &[1, 2], &[2, 13]),
        Err("unlucky".to_string())
    );
    assert_eq!(
        diff_slices(&strict, &[1, 2], &[2, 1]).map(|rv| rv.has_differences()),
        Ok(false)
    );
}

#[test]
fn test_passes_are_independent() {
    // actual values stand in for every expected value of the same parity,
    // expected values are only accounted for by equal actual values
    struct Parity;
    impl ComparisonStrategy<u32> for Parity {
        type Error = std::convert::Infallible;

        fn are_equal(&self, actual: &u32, expected: &u32) -> Result<bool, Self::Error> {
            Ok(actual % 2 == expected % 2)
        }

        fn pool_contains(&self, pool: &[&u32], value: &u32) -> Result<bool, Self::Error> {
            Ok(pool.iter().any(|x| *x == value))
        }

        fn remove_first_equivalent(
            &self,
            pool: &mut Vec<&u32>,
            value: &u32,
        ) -> Result<(), Self::Error> {
            if let Some(pos) = pool.iter().position(|x| *x == value) {
                pool.remove(pos);
            }
            Ok(())
        }
    }

    let rv = diff_slices(&Parity, &[2, 3], &[4, 5]).unwrap();
    assert_eq!(rv.unexpected(), &[] as &[usize]);
    assert_eq!(rv.missing(), &[0, 1]);
}

#[cfg(test)]
mod proptests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::diff_slices;
    use crate::algorithms::StandardComparison;

    fn counts(values: &[u8]) -> HashMap<u8, usize> {
        let mut rv = HashMap::new();
        for value in values {
            *rv.entry(*value).or_insert(0) += 1;
        }
        rv
    }

    proptest! {
        #[test]
        fn sizes_are_bounded(
            actual in prop::collection::vec(0u8..6, 0..24),
            expected in prop::collection::vec(0u8..6, 0..24),
        ) {
            let rv = diff_slices(&StandardComparison, &actual, &expected).unwrap();
            prop_assert!(rv.unexpected().len() <= actual.len());
            prop_assert!(rv.missing().len() <= expected.len());
            prop_assert!(rv.unexpected().windows(2).all(|w| w[0] < w[1]));
            prop_assert!(rv.missing().windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn matches_multiset_counts(
            actual in prop::collection::vec(0u8..6, 0..24),
            expected in prop::collection::vec(0u8..6, 0..24),
        ) {
            let rv = diff_slices(&StandardComparison, &actual, &expected).unwrap();
            let actual_counts = counts(&actual);
            let expected_counts = counts(&expected);
            let unexpected: Vec<u8> = rv.unexpected().iter().map(|&idx| actual[idx]).collect();
            let missing: Vec<u8> = rv.missing().iter().map(|&idx| expected[idx]).collect();
            for value in 0u8..6 {
                let a = actual_counts.get(&value).copied().unwrap_or(0);
                let e = expected_counts.get(&value).copied().unwrap_or(0);
                prop_assert_eq!(counts(&unexpected).get(&value).copied().unwrap_or(0), a.saturating_sub(e));
                prop_assert_eq!(counts(&missing).get(&value).copied().unwrap_or(0), e.saturating_sub(a));
            }
        }

        #[test]
        fn permutation_has_no_differences(actual in prop::collection::vec(any::<i16>(), 0..24)) {
            let mut expected = actual.clone();
            expected.reverse();
            let rv = diff_slices(&StandardComparison, &actual, &expected).unwrap();
            prop_assert!(!rv.has_differences());
        }

        #[test]
        fn is_deterministic(
            actual in prop::collection::vec(0u8..4, 0..16),
            expected in prop::collection::vec(0u8..4, 0..16),
        ) {
            let first = diff_slices(&StandardComparison, &actual, &expected).unwrap();
            let second = diff_slices(&StandardComparison, &actual, &expected).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
