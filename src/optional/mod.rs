//! A module containing [`Optional`] and its error type.
//!
//! [`Optional`] is a thin wrapper around a single [`Maybe`](crate::maybe::Maybe), exposing the
//! free functions of [`maybe`](crate::maybe) as methods for a chained style. It is also
//! re-exported under the crate root.

mod error;
mod optional;


pub use error::*;
pub use optional::*;
