/// The outcome of a multiset diff expressed as indexes.
///
/// `unexpected` holds indexes into the actual sequence of elements that had
/// no counterpart in the expected sequence, `missing` holds indexes into the
/// expected sequence of elements that had no counterpart in the actual
/// sequence.  Both are in ascending order.
///
/// This is produced by [`diff`](crate::algorithms::diff).
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiffIndexes {
    unexpected: Vec<usize>,
    missing: Vec<usize>,
}

impl DiffIndexes {
    pub(crate) fn new(unexpected: Vec<usize>, missing: Vec<usize>) -> DiffIndexes {
        DiffIndexes {
            unexpected,
            missing,
        }
    }

    /// Indexes of actual elements not accounted for by the expected ones.
    pub fn unexpected(&self) -> &[usize] {
        &self.unexpected
    }

    /// Indexes of expected elements not accounted for by the actual ones.
    pub fn missing(&self) -> &[usize] {
        &self.missing
    }

    /// Returns `true` if either side has unmatched elements.
    pub fn has_differences(&self) -> bool {
        !self.unexpected.is_empty() || !self.missing.is_empty()
    }

    /// Converts the capture into `(unexpected, missing)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>) {
        (self.unexpected, self.missing)
    }
}

#[test]
fn test_has_differences() {
    assert!(!DiffIndexes::default().has_differences());
    assert!(DiffIndexes::new(vec![0], vec![]).has_differences());
    assert!(DiffIndexes::new(vec![], vec![3]).has_differences());
}

#[test]
#[cfg(feature = "serde")]
fn test_serialize() {
    let indexes = DiffIndexes::new(vec![1, 4], vec![0]);
    let json = serde_json::to_string(&indexes).unwrap();
    assert_eq!(json, r#"{"unexpected":[1,4],"missing":[0]}"#);
}
