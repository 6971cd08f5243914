//! Comparison strategies for text.
//!
//! These strategies work on anything that implements `AsRef<str>` so they can
//! be used to diff slices of `&str`, `String` or `Cow<str>` alike, and the
//! actual and expected side do not need to be of the same type.
//!
//! ```rust
//! use bagdiff::text::CaseInsensitive;
//! use bagdiff::MultisetDiff;
//!
//! let expected = vec!["bar".to_string(), "foo".to_string()];
//! let diff = MultisetDiff::from_slices(&["Foo", "BAR", "baz"], &expected, CaseInsensitive);
//! assert_eq!(diff.unexpected(), &[&"baz"]);
//! assert!(diff.missing().is_empty());
//! ```
//!
//! Text strategies are available by default but can be disabled by turning
//! off the default features.  The feature to enable to get them back is
//! `text`.
#![cfg(feature = "text")]
use std::convert::Infallible;

use crate::algorithms::ComparisonStrategy;

/// Compares strings ignoring case.
///
/// Both sides are lowercased with the unicode lowercase mapping before they
/// are compared, so `"STRASSE"` and `"strasse"` are equal but `"Straße"` and
/// `"STRASSE"` are not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CaseInsensitive;

impl<A, E> ComparisonStrategy<A, E> for CaseInsensitive
where
    A: AsRef<str> + ?Sized,
    E: AsRef<str> + ?Sized,
{
    type Error = Infallible;

    fn are_equal(&self, actual: &A, expected: &E) -> Result<bool, Self::Error> {
        Ok(actual
            .as_ref()
            .chars()
            .flat_map(char::to_lowercase)
            .eq(expected.as_ref().chars().flat_map(char::to_lowercase)))
    }
}

/// Compares strings ignoring differences in whitespace.
///
/// Leading and trailing whitespace is ignored and any run of whitespace in
/// between is treated like a single space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NormalizedWhitespace;

impl<A, E> ComparisonStrategy<A, E> for NormalizedWhitespace
where
    A: AsRef<str> + ?Sized,
    E: AsRef<str> + ?Sized,
{
    type Error = Infallible;

    fn are_equal(&self, actual: &A, expected: &E) -> Result<bool, Self::Error> {
        Ok(actual
            .as_ref()
            .split_whitespace()
            .eq(expected.as_ref().split_whitespace()))
    }
}

#[test]
fn test_case_insensitive() {
    assert_eq!(CaseInsensitive.are_equal("Hello", "hELLO"), Ok(true));
    assert_eq!(CaseInsensitive.are_equal("STRASSE", "strasse"), Ok(true));
    assert_eq!(CaseInsensitive.are_equal("Hello", "Hell"), Ok(false));
    assert_eq!(
        CaseInsensitive.are_equal(&"ÉCOLE".to_string(), "école"),
        Ok(true)
    );
}

#[test]
fn test_normalized_whitespace() {
    assert_eq!(
        NormalizedWhitespace.are_equal("  a \t b\n", "a b"),
        Ok(true)
    );
    assert_eq!(NormalizedWhitespace.are_equal("a b", "ab"), Ok(false));
    assert_eq!(NormalizedWhitespace.are_equal("", "   "), Ok(true));
}

#[test]
fn test_case_insensitive_duplicates() {
    use crate::algorithms::diff_slices;

    let rv = diff_slices(&CaseInsensitive, &["a", "A", "b"], &["a", "B"]).unwrap();
    assert_eq!(rv.unexpected(), &[1]);
    assert_eq!(rv.missing(), &[] as &[usize]);
}
