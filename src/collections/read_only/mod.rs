//! A module containing [`ReadOnlyCollection`], a borrowed view that implements the
//! [`Enumerable`](super::Enumerable) contract directly over a slice.
//!
//! [`List`](super::List) and [`Queue`](super::Queue) answer every query by handing out one of
//! these over their own storage.

mod iter;
mod read_only_collection;
mod tests;

pub use read_only_collection::*;
