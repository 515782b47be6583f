use std::future::Future;

use crate::maybe::{Maybe, Something};

/// Invokes `f` with the value and awaits it if the provided Maybe is [`Something`]. Resolves
/// immediately otherwise.
pub async fn if_something<T, F, Fut>(maybe: Maybe<T>, f: F)
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = ()>,
{
    if let Something(value) = maybe {
        f(value).await;
    }
}
