use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Extracts the [`Ok`] value, panicking with the display message of the error itself rather
    /// than its debug representation.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
