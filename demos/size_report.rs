use std::fmt;

use bagdiff::algorithms::{ComparisonStrategy, StandardComparison};
use bagdiff::text::CaseInsensitive;
use bagdiff::MultisetDiff;
use console::style;

/// Renders why two collections do not contain the same elements.
pub struct Report<'a, T> {
    actual: &'a [T],
    expected: &'a [T],
    diff: MultisetDiff<&'a T>,
}

impl<'a, T: fmt::Debug> Report<'a, T> {
    pub fn new<S>(actual: &'a [T], expected: &'a [T], strategy: S) -> Report<'a, T>
    where
        S: ComparisonStrategy<T, Error = std::convert::Infallible>,
    {
        Report {
            actual,
            expected,
            diff: MultisetDiff::from_slices(actual, expected, strategy),
        }
    }
}

impl<'a, T: fmt::Debug> fmt::Display for Report<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.diff.has_differences() {
            return writeln!(f, "{}", style("Same elements in any order").green());
        }

        if self.actual.len() != self.expected.len() {
            writeln!(
                f,
                "expected size:<{}> but was:<{}> in:<{:?}>",
                style(self.expected.len()).bold(),
                style(self.actual.len()).bold(),
                self.actual,
            )?;
        }
        if !self.diff.unexpected().is_empty() {
            writeln!(
                f,
                "  {}: {:?}",
                style("unexpected").red(),
                self.diff.unexpected()
            )?;
        }
        if !self.diff.missing().is_empty() {
            writeln!(
                f,
                "  {}: {:?}",
                style("missing").green(),
                self.diff.missing()
            )?;
        }
        Ok(())
    }
}

fn main() {
    let actual = ["Luke", "Leia", "Leia", "Han"];
    let expected = ["Luke", "Leia", "Chewbacca"];
    print!("{}", Report::new(&actual, &expected, StandardComparison));

    let actual = ["luke", "LEIA", "han"];
    let expected = ["Luke", "Leia", "Han"];
    print!("{}", Report::new(&actual, &expected, CaseInsensitive));
}
