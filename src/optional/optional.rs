#[cfg(feature = "future")]
use std::future::Future;

use super::OptionalEmptyError;
#[cfg(feature = "future")]
use crate::maybe::future;
use crate::maybe::{self, Maybe, Nothing, Something};
use crate::util::result::ResultExtension;

/// A container holding a value which may or may not be present.
///
/// Optional never changes after construction: [`filter`](Optional::filter),
/// [`map`](Optional::map) and friends consume the receiver and return a new Optional. Use
/// [`as_ref`](Optional::as_ref) to operate on a borrowed value instead.
///
/// At most one layer of wrapping is ever stored, [`Optional::new`] unwraps an Optional passed to
/// it:
/// ```
/// # use maybe_optional::{Maybe, Optional};
/// let inner = Optional::of(0);
/// assert_eq!(Optional::new(inner).unwrap(), Maybe::Something(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    maybe: Maybe<T>,
}

impl<T> Optional<T> {
    /// Creates a new Optional from a [`Maybe`], an [`Option`] or another Optional. When given an
    /// Optional, its contents are taken as-is rather than being wrapped again.
    pub fn new(maybe: impl Into<Maybe<T>>) -> Optional<T> {
        Optional {
            maybe: maybe.into(),
        }
    }

    /// Creates an empty Optional.
    pub const fn empty() -> Optional<T> {
        Optional { maybe: Nothing }
    }

    /// Creates an Optional containing the provided value.
    ///
    /// Unlike a sentinel-based representation, there is no value of `T` which could produce an
    /// Optional that reports itself as present while holding nothing, so no validation is needed.
    pub const fn of(value: T) -> Optional<T> {
        Optional {
            maybe: Something(value),
        }
    }

    /// Creates an Optional from a [`Maybe`] that may or may not hold a value.
    pub const fn of_maybe(maybe: Maybe<T>) -> Optional<T> {
        Optional { maybe }
    }

    /// Returns true if the Optional holds no value.
    pub const fn is_empty(&self) -> bool {
        maybe::is_nothing(&self.maybe)
    }

    /// Returns true if the Optional holds a value.
    pub const fn is_present(&self) -> bool {
        maybe::is_something(&self.maybe)
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            maybe: self.maybe.as_ref(),
        }
    }

    /// Invokes `f` with the value if one is present.
    pub fn if_present<F>(self, f: F)
    where
        F: FnOnce(T),
    {
        maybe::if_something(self.maybe, f)
    }

    /// Invokes `f` with the value and awaits it, if one is present.
    #[cfg(feature = "future")]
    pub async fn if_present_async<F, Fut>(self, f: F)
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        future::if_something(self.maybe, f).await
    }

    /// Returns the value, or `value` if the Optional is empty.
    pub fn or_else(self, value: T) -> T {
        maybe::or_else(self.maybe, value)
    }

    /// Returns the value, or the result of `f` if the Optional is empty. `f` is only invoked when
    /// empty.
    pub fn or_else_get<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        maybe::or_else_get(self.maybe, f)
    }

    /// Resolves to the value, or to the awaited result of `f` if the Optional is empty.
    #[cfg(feature = "future")]
    pub async fn or_else_get_async<F, Fut>(self, f: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        future::or_else_get(self.maybe, f).await
    }

    /// Returns the value, or exactly the provided `error` if the Optional is empty.
    pub fn or_else_throw<E>(self, error: E) -> Result<T, E> {
        maybe::or_else_throw(self.maybe, error)
    }

    /// Returns the value, or an [`OptionalEmptyError`] if the Optional is empty.
    pub fn get(self) -> Result<T, OptionalEmptyError> {
        self.or_else_throw(OptionalEmptyError)
    }

    /// Returns the value.
    ///
    /// # Panics
    /// Panics with the message of [`OptionalEmptyError`] if the Optional is empty.
    #[track_caller]
    pub fn expect_present(self) -> T {
        self.get().throw()
    }

    /// Returns a new Optional holding the value only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        Optional::of_maybe(maybe::filter(self.maybe, predicate))
    }

    /// Returns a new Optional holding the result of applying `f` to the value, or an empty
    /// Optional if there was no value.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional::of_maybe(maybe::map(f, self.maybe))
    }

    /// Asynchronous version of [`map`](Optional::map).
    #[cfg(feature = "future")]
    pub async fn map_async<U, F, Fut>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        Optional::of_maybe(future::map(f, self.maybe).await)
    }

    /// Returns the underlying [`Maybe`]. This never panics; see [`get`](Optional::get) or
    /// [`expect_present`](Optional::expect_present) for forced extraction.
    pub fn unwrap(self) -> Maybe<T> {
        self.maybe
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one layer of nesting from an Optional built with [`Optional::of`].
    pub fn flatten(self) -> Optional<T> {
        maybe::or_else_get(self.maybe, Optional::empty)
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::empty()
    }
}

impl<T> From<Maybe<T>> for Optional<T> {
    fn from(value: Maybe<T>) -> Self {
        Optional::of_maybe(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::new(value)
    }
}

impl<T> From<Optional<T>> for Maybe<T> {
    fn from(value: Optional<T>) -> Self {
        value.unwrap()
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.unwrap().into_option()
    }
}
