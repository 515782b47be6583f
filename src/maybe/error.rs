use derive_more::{Display, Error};

/// The default error returned when a value is required from a [`Maybe`](super::Maybe) that is
/// [`Nothing`](super::Maybe::Nothing).
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[display("maybe was nothing when a value was required")]
pub struct NothingError;
