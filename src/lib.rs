//! This crate computes multiset differences between two sequences.
//!
//! Given an "actual" and an "expected" sequence it finds the elements of
//! actual that are not accounted for by expected (the *unexpected* ones) and
//! the elements of expected that are not accounted for by actual (the
//! *missing* ones).  Duplicates count: every element on one side can account
//! for at most one element on the other side.  Order does not matter for
//! matching but it is retained in the output.  This is the kind of
//! difference an assertion library reports when two collections are
//! supposed to contain the same elements in any order.
//!
//! ```rust
//! use bagdiff::MultisetDiff;
//! use bagdiff::algorithms::StandardComparison;
//!
//! let diff = MultisetDiff::from_slices(
//!     &["apple", "pear", "pear"],
//!     &["pear", "plum"],
//!     StandardComparison,
//! );
//! assert_eq!(diff.unexpected(), &[&"apple", &"pear"]);
//! assert_eq!(diff.missing(), &[&"plum"]);
//! ```
//!
//! Equality is decided by a [`ComparisonStrategy`](algorithms::ComparisonStrategy).
//! Strategies do not need to be symmetric and the two sides do not need to be
//! of the same type: the actual element is always passed first.  This makes
//! it possible to compare a narrow view of a value against the full value:
//!
//! ```rust
//! use bagdiff::MultisetDiff;
//! use bagdiff::algorithms::Comparator;
//!
//! struct User { name: &'static str, admin: bool }
//! struct Summary { name: &'static str }
//!
//! let users = [User { name: "jane", admin: true }, User { name: "joe", admin: false }];
//! let summaries = [Summary { name: "joe" }];
//! let by_name = Comparator::new(|s: &Summary, u: &User| s.name == u.name);
//! let diff = MultisetDiff::from_slices(&summaries, &users, by_name);
//! assert!(diff.unexpected().is_empty());
//! assert_eq!(diff.missing().len(), 1);
//! assert!(diff.missing()[0].admin);
//! ```
//!
//! The crate is split into two levels:
//!
//! * [`algorithms`]: the comparison strategies and the index based
//!   implementation of the algorithm with the most generic trait bounds.
//! * [`MultisetDiff`]: a diff that holds the unmatched elements themselves.
//!
//! # Features
//!
//! * `text`: enables the [`text`] strategies.  Enabled by default.
//! * `serde`: adds serde support to [`MultisetDiff`] and
//!   [`DiffIndexes`](algorithms::DiffIndexes).

pub mod algorithms;
pub mod text;

mod common;
mod diff;
mod utils;

pub use self::common::*;
pub use self::diff::MultisetDiff;
