//! The multiset diff algorithm and the comparison strategies it consumes.
//!
//! The implementation in this module is relatively low level and exposes the
//! most generic bounds possible.  It works on any indexable object (for
//! instance slices or `Vec`s) and reports its result as indexes in a
//! [`DiffIndexes`].  For most situations access to the unmatched values
//! themselves is more useful, which is what [`MultisetDiff`](crate::MultisetDiff)
//! provides on top of this.
//!
//! Equality is never decided by the algorithm itself.  It is always delegated
//! to a [`ComparisonStrategy`] supplied by the caller.  The following
//! strategies ship with the crate:
//!
//! * [`StandardComparison`]: [`PartialEq`] based.
//! * [`Comparator`]: wraps a `Fn(&A, &E) -> bool`.
//! * [`TryComparator`]: wraps a `Fn(&A, &E) -> Result<bool, Err>`.
//! * [`Tolerance`]: floating point numbers within an absolute tolerance.

// general traits and utilities
mod capture;
mod standard;
mod strategy;

pub use capture::*;
pub use standard::*;
pub use strategy::*;

// the actual diffing algorithm
pub mod multiset;

pub use multiset::{diff, diff_slices};
