use std::convert::Infallible;

/// Unwraps a result that cannot hold an error.
#[inline(always)]
pub(crate) fn into_ok<T>(rv: Result<T, Infallible>) -> T {
    match rv {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

#[test]
fn test_into_ok() {
    assert_eq!(into_ok(Ok::<_, Infallible>(42)), 42);
}
