#![allow(clippy::all)]

use afl::fuzz;
use arbitrary::Arbitrary;
use bagdiff::algorithms::{diff_slices, Comparator, StandardComparison};
use bagdiff::text::CaseInsensitive;
use bagdiff::MultisetDiff;

#[derive(Arbitrary, Debug)]
enum FuzzVariant {
    Bytes(Vec<u8>, Vec<u8>),
    Strings(Vec<String>, Vec<String>),
    CaseInsensitive(Vec<String>, Vec<String>),
    Divisors(Vec<u8>, Vec<u8>),
}

fn main() {
    fuzz!(|data: FuzzVariant| {
        match data {
            FuzzVariant::Bytes(actual, expected) => {
                let rv = diff_slices(&StandardComparison, &actual, &expected).unwrap();
                assert!(rv.unexpected().len() <= actual.len());
                assert!(rv.missing().len() <= expected.len());
                if actual.len() == expected.len() {
                    assert_eq!(rv.unexpected().len(), rv.missing().len());
                }
            }
            FuzzVariant::Strings(actual, expected) => {
                let diff = MultisetDiff::from_iters(actual.clone(), expected.clone(), StandardComparison);
                assert_eq!(
                    actual.len() - diff.unexpected().len(),
                    expected.len() - diff.missing().len()
                );
            }
            FuzzVariant::CaseInsensitive(actual, expected) => {
                let diff = MultisetDiff::from_slices(&actual, &expected, CaseInsensitive);
                assert!(diff.unexpected().len() <= actual.len());
                assert!(diff.missing().len() <= expected.len());
            }
            FuzzVariant::Divisors(actual, expected) => {
                let divides = Comparator::new(|a: &u8, e: &u8| *a != 0 && e % a == 0);
                let diff = MultisetDiff::from_slices(&actual, &expected, divides);
                assert!(diff.unexpected().len() <= actual.len());
                assert!(diff.missing().len() <= expected.len());
            }
        };
    });
}
