pub(crate) trait OptionExtension<T> {
    /// Unwraps a value that a container invariant guarantees to be present.
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts like [`Option::unwrap`], but with [`unreachable!`] in the none branch, marking the call
    /// site as relying on an internal invariant rather than on caller input.
    ///
    /// No panics section is written on callers: if this panics, the container itself is broken.
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("container invariant violated"),
        }
    }
}
