//! This crate provides a value that may or may not be there, [`Maybe`], and a fluent container
//! over it, [`Optional`].
//!
//! # Purpose
//! Most of the interesting decisions around absence are small ones: what counts as "absent", how
//! composing over absence behaves, when a fallback gets computed and what happens when a value is
//! forced out of something empty. This crate pins those down in one place.
//!
//! # Layout
//! The crate has two layers:
//! - [`maybe`]: the [`Maybe`] sum type and free functions over it ([`map`], [`filter`],
//!   [`or_else`] and friends), including [`maybe::future`] for callbacks that return futures.
//! - [`optional`]: [`Optional`], which wraps a single [`Maybe`] and forwards every method to the
//!   matching free function, re-wrapping the result.
//!
//! Absence is a variant of its own ([`Maybe::Nothing`]) rather than a designated value of `T`, so
//! there is no way to smuggle "nothing" in as a real value.
//!
//! # Error Handling
//! Forcing a value out of an absent [`Maybe`] or an empty [`Optional`] gives a strongly typed ZST
//! error, [`NothingError`] or [`OptionalEmptyError`] respectively, via a [`Result`]. Callers that
//! would rather supply their own error can do so with [`or_else_throw`]. Both default errors
//! convert into [`AbsentError`] when working across the two layers.
//!
//! Errors (and panics) raised inside caller-supplied functions are never caught, wrapped or
//! suppressed here.
//!
//! # Dependencies
//! The async combinators only rely on [`Future`](std::future::Future) from `std`; no runtime is
//! required or provided. They are behind the `future` feature, which is on by default.
//!
//! This crate also depends on some derive macros for the error types, to save on some very
//! repetitive programming.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod error;
pub mod maybe;
pub mod optional;

pub(crate) mod util;

#[doc(inline)]
pub use error::AbsentError;
#[doc(inline)]
pub use maybe::{
    Maybe, NothingError, filter, if_something, is_nothing, is_something, map, map2, map3, or_else,
    or_else_get, or_else_throw, or_else_throw_default,
};
#[cfg(feature = "future")]
#[doc(inline)]
pub use maybe::future::{
    if_something as if_something_async, map as map_async, map2 as map2_async, map3 as map3_async,
    or_else_get as or_else_get_async,
};
#[doc(inline)]
pub use optional::{Optional, OptionalEmptyError};
