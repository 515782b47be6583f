//! Asynchronous variants of the [`Maybe`](super::Maybe) combinators, for callbacks that return a
//! [`Future`](std::future::Future).
//!
//! Each function here has the same contract as its synchronous counterpart in the parent module,
//! except that the callback's future is awaited and the combinator itself is an `async fn`. The
//! only suspension point is awaiting the caller's future; nothing is shared across it.
//!
//! There is no asynchronous `filter`, `or_else` or `or_else_throw`, because none of those have a
//! callback which could need to await anything.

mod if_something;
mod map;
mod or;


pub use if_something::*;
pub use map::*;
pub use or::*;
