use super::{Maybe, Nothing, NothingError, Something};

/// Returns the contained value, or `value` if the Maybe is [`Nothing`].
///
/// The fallback is evaluated by the caller regardless; use [`or_else_get`] to only compute it when
/// it's needed.
pub fn or_else<T>(maybe: Maybe<T>, value: T) -> T {
    match maybe {
        Something(inner) => inner,
        Nothing => value,
    }
}

/// Returns the contained value, or the result of invoking `f` if the Maybe is [`Nothing`]. `f` is
/// invoked at most once.
pub fn or_else_get<T, F>(maybe: Maybe<T>, f: F) -> T
where
    F: FnOnce() -> T,
{
    match maybe {
        Something(inner) => inner,
        Nothing => f(),
    }
}

/// Returns the contained value, or exactly the provided `error` if the Maybe is [`Nothing`].
pub fn or_else_throw<T, E>(maybe: Maybe<T>, error: E) -> Result<T, E> {
    match maybe {
        Something(inner) => Ok(inner),
        Nothing => Err(error),
    }
}

/// Returns the contained value, or a [`NothingError`] if the Maybe is [`Nothing`].
pub fn or_else_throw_default<T>(maybe: Maybe<T>) -> Result<T, NothingError> {
    or_else_throw(maybe, NothingError)
}
