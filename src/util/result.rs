use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Turns the error of a `try_*` method into the panic of its plain counterpart, using the
    /// error's own message. The panic is reported at the caller's location.
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
