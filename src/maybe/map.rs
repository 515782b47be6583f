use super::{Maybe, Nothing, Something};

/// If the provided Maybe is [`Something`], applies `f` to the value and returns the result.
/// Otherwise returns [`Nothing`] without invoking `f`.
pub fn map<A, Z, F>(f: F, maybe: Maybe<A>) -> Maybe<Z>
where
    F: FnOnce(A) -> Z,
{
    match maybe {
        Something(a) => Something(f(a)),
        Nothing => Nothing,
    }
}

/// If both provided Maybes are [`Something`], applies `f` to the values (in argument order) and
/// returns the result. If either is [`Nothing`], `f` isn't invoked and [`Nothing`] is returned.
pub fn map2<A, B, Z, F>(f: F, a: Maybe<A>, b: Maybe<B>) -> Maybe<Z>
where
    F: FnOnce(A, B) -> Z,
{
    match (a, b) {
        (Something(a), Something(b)) => Something(f(a, b)),
        _ => Nothing,
    }
}

/// The three argument version of [`map2`].
pub fn map3<A, B, C, Z, F>(f: F, a: Maybe<A>, b: Maybe<B>, c: Maybe<C>) -> Maybe<Z>
where
    F: FnOnce(A, B, C) -> Z,
{
    match (a, b, c) {
        (Something(a), Something(b), Something(c)) => Something(f(a, b, c)),
        _ => Nothing,
    }
}
