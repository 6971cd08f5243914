/// A capability that decides whether an element from the "actual" sequence
/// accounts for an element of the "expected" sequence.
///
/// The relation does not have to be symmetric.  The multiset algorithm
/// always invokes [`are_equal`](Self::are_equal) with the actual element
/// first and the expected element second, which is also why the two sides
/// can have different types.
///
/// Failures of the strategy are reported through [`Error`](Self::Error) and
/// are passed through to the caller of the diff unchanged.  Strategies that
/// cannot fail should use [`Infallible`](std::convert::Infallible).
pub trait ComparisonStrategy<A: ?Sized, E: ?Sized = A> {
    type Error;

    /// Checks if `actual` is equal to `expected` according to this strategy.
    fn are_equal(&self, actual: &A, expected: &E) -> Result<bool, Self::Error>;

    /// Checks if any element in `pool` is equal to `value`.
    ///
    /// The default implementation scans the pool from left to right and
    /// compares every candidate as `are_equal(candidate, value)`.
    fn pool_contains(&self, pool: &[&A], value: &E) -> Result<bool, Self::Error> {
        for candidate in pool {
            if self.are_equal(*candidate, value)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Removes the leftmost element of `pool` that is equal to `value`.
    ///
    /// At most one element is removed.  If nothing matches the pool is left
    /// untouched.
    fn remove_first_equivalent(&self, pool: &mut Vec<&A>, value: &E) -> Result<(), Self::Error> {
        for idx in 0..pool.len() {
            if self.are_equal(pool[idx], value)? {
                pool.remove(idx);
                break;
            }
        }
        Ok(())
    }
}

impl<'s, A, E, S> ComparisonStrategy<A, E> for &'s S
where
    A: ?Sized,
    E: ?Sized,
    S: ComparisonStrategy<A, E> + ?Sized,
{
    type Error = S::Error;

    fn are_equal(&self, actual: &A, expected: &E) -> Result<bool, Self::Error> {
        (**self).are_equal(actual, expected)
    }

    fn pool_contains(&self, pool: &[&A], value: &E) -> Result<bool, Self::Error> {
        (**self).pool_contains(pool, value)
    }

    fn remove_first_equivalent(&self, pool: &mut Vec<&A>, value: &E) -> Result<(), Self::Error> {
        (**self).remove_first_equivalent(pool, value)
    }
}

#[test]
fn test_default_pool_primitives() {
    use crate::algorithms::StandardComparison;

    let pool_values = [1, 2, 3, 2];
    let mut pool: Vec<&i32> = pool_values.iter().collect();

    let strategy = StandardComparison;
    assert_eq!(strategy.pool_contains(&pool, &2), Ok(true));
    assert_eq!(strategy.pool_contains(&pool, &7), Ok(false));

    strategy.remove_first_equivalent(&mut pool, &2).unwrap();
    assert_eq!(pool, vec![&1, &3, &2]);

    strategy.remove_first_equivalent(&mut pool, &7).unwrap();
    assert_eq!(pool, vec![&1, &3, &2]);
}

#[test]
fn test_remove_first_equivalent_is_leftmost() {
    use crate::algorithms::Comparator;

    let pool_values = [(1, 'a'), (1, 'b'), (2, 'c')];
    let mut pool: Vec<&(i32, char)> = pool_values.iter().collect();
    let by_number = Comparator::new(|a: &(i32, char), b: &(i32, char)| a.0 == b.0);

    by_number
        .remove_first_equivalent(&mut pool, &(1, 'z'))
        .unwrap();
    assert_eq!(pool, vec![&(1, 'b'), &(2, 'c')]);
}

#[test]
fn test_forwarding_through_reference() {
    use crate::algorithms::StandardComparison;

    fn check<S: ComparisonStrategy<str>>(s: S) -> Result<bool, S::Error> {
        s.are_equal("foo", "foo")
    }

    let strategy = StandardComparison;
    assert_eq!(check(&strategy), Ok(true));
    assert_eq!(check(&&strategy), Ok(true));
}
