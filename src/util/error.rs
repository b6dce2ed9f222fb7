use derive_more::{Display, Error};

/// An attempt to access a position that doesn't hold an element.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The requested position.
    pub index: usize,
    /// The number of elements held when the access was attempted.
    pub len: usize,
}

impl IndexOutOfBounds {
    /// Checks `index` against `len`, where only positions strictly below `len` are valid.
    pub(crate) const fn check(index: usize, len: usize) -> Result<(), IndexOutOfBounds> {
        if index < len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len })
        }
    }
}
