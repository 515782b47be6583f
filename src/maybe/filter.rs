use super::{Maybe, Nothing, Something};

/// Returns the provided Maybe unchanged if it is [`Something`] and its value satisfies
/// `predicate`, otherwise returns [`Nothing`].
///
/// The predicate is invoked at most once, and only if a value is present.
pub fn filter<T, P>(maybe: Maybe<T>, predicate: P) -> Maybe<T>
where
    P: FnOnce(&T) -> bool,
{
    match maybe {
        Something(value) => {
            if predicate(&value) {
                Something(value)
            } else {
                Nothing
            }
        },
        Nothing => Nothing,
    }
}
