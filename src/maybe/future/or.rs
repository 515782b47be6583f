use std::future::Future;

use crate::maybe::{Maybe, Nothing, Something};

/// Resolves to the contained value, or invokes `f` and awaits its result if the Maybe is
/// [`Nothing`]. `f` is invoked at most once.
pub async fn or_else_get<T, F, Fut>(maybe: Maybe<T>, f: F) -> T
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    match maybe {
        Something(inner) => inner,
        Nothing => f().await,
    }
}
