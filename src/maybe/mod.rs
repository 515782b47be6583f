//! A module containing [`Maybe`] and the free functions that operate over it.
//!
//! Every function here is a single branch on whether its input(s) are [`Something`] or
//! [`Nothing`]. The functions take their [`Maybe`] by value; use [`Maybe::as_ref`] to operate on a
//! borrow instead.
//!
//! Variants of the combinators which accept callbacks returning futures live under [`future`].

mod error;
mod filter;
mod if_something;
mod map;
mod maybe;
mod or;

#[cfg(feature = "future")]
pub mod future;

mod tests;

pub use error::*;
pub use filter::*;
pub use if_something::*;
pub use map::*;
pub use maybe::*;
pub use or::*;
