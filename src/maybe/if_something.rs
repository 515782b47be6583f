use super::{Maybe, Something};

/// Invokes `f` with the value if the provided Maybe is [`Something`], discarding anything it
/// returns. Does nothing otherwise.
pub fn if_something<T, F>(maybe: Maybe<T>, f: F)
where
    F: FnOnce(T),
{
    if let Something(value) = maybe {
        f(value);
    }
}
