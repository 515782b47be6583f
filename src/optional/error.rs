use derive_more::{Display, Error};

/// The error returned when a value is required from an [`Optional`](super::Optional) that is
/// empty.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[display("optional is empty")]
pub struct OptionalEmptyError;
