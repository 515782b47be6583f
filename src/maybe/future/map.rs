use std::future::Future;

use crate::maybe::{Maybe, Nothing, Something};

/// If the provided Maybe is [`Something`], applies `f` to the value and awaits the result.
/// Otherwise resolves to [`Nothing`] without invoking `f`.
pub async fn map<A, Z, F, Fut>(f: F, maybe: Maybe<A>) -> Maybe<Z>
where
    F: FnOnce(A) -> Fut,
    Fut: Future<Output = Z>,
{
    match maybe {
        Something(a) => Something(f(a).await),
        Nothing => Nothing,
    }
}

/// If both provided Maybes are [`Something`], applies `f` to the values and awaits the result.
///
/// Presence of every argument is confirmed before `f` is invoked, so `f` is either called with all
/// of its arguments or not at all.
pub async fn map2<A, B, Z, F, Fut>(f: F, a: Maybe<A>, b: Maybe<B>) -> Maybe<Z>
where
    F: FnOnce(A, B) -> Fut,
    Fut: Future<Output = Z>,
{
    match (a, b) {
        (Something(a), Something(b)) => Something(f(a, b).await),
        _ => Nothing,
    }
}

/// The three argument version of [`map2`].
pub async fn map3<A, B, C, Z, F, Fut>(f: F, a: Maybe<A>, b: Maybe<B>, c: Maybe<C>) -> Maybe<Z>
where
    F: FnOnce(A, B, C) -> Fut,
    Fut: Future<Output = Z>,
{
    match (a, b, c) {
        (Something(a), Something(b), Something(c)) => Something(f(a, b, c).await),
        _ => Nothing,
    }
}
