use derive_more::IsVariant;

/// A value of type `T`, or nothing at all.
///
/// Absence is its own variant rather than a designated value of `T`, so a `T` can never be
/// mistaken for [`Nothing`]. The ordering places [`Nothing`] before any [`Something`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Maybe<T> {
    Nothing,
    Something(T),
}

pub use Maybe::*;

/// Returns true if the provided value is [`Nothing`].
pub const fn is_nothing<T>(value: &Maybe<T>) -> bool {
    matches!(value, Nothing)
}

/// Returns true if the provided value is [`Something`].
pub const fn is_something<T>(value: &Maybe<T>) -> bool {
    !is_nothing(value)
}

impl<T> Maybe<T> {
    /// Converts from `&Maybe<T>` to `Maybe<&T>`, leaving the original in place.
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Something(value) => Something(value),
            Nothing => Nothing,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Something(value) => Something(value),
            Nothing => Nothing,
        }
    }

    /// Converts this Maybe into the equivalent [`Option`].
    pub fn into_option(self) -> Option<T> {
        match self {
            Something(value) => Some(value),
            Nothing => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Nothing
    }
}

impl<T, E> Maybe<Result<T, E>> {
    /// Swaps a Maybe of a [`Result`] into a [`Result`] of a Maybe, so that an error produced by a
    /// fallible mapping function can be propagated with `?`.
    ///
    /// [`Nothing`] becomes `Ok(Nothing)`.
    pub fn transpose(self) -> Result<Maybe<T>, E> {
        match self {
            Something(Ok(value)) => Ok(Something(value)),
            Something(Err(error)) => Err(error),
            Nothing => Ok(Nothing),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Something(value),
            None => Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}
