//! Errors shared across the [`maybe`](crate::maybe) and [`optional`](crate::optional) layers.

use derive_more::{Display, Error, From, IsVariant};

#[doc(inline)]
pub use crate::maybe::NothingError;
#[doc(inline)]
pub use crate::optional::OptionalEmptyError;

/// Either of the default absence errors, for code which forces values out of both [`Maybe`]s and
/// [`Optional`]s and wants to propagate with `?` into a single type.
///
/// [`Maybe`]: crate::maybe::Maybe
/// [`Optional`]: crate::optional::Optional
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum AbsentError {
    Nothing(NothingError),
    OptionalEmpty(OptionalEmptyError),
}
