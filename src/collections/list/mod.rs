//! A module containing [`List`], the crate's mutable, index-addressable sequence.
//!
//! Borrowed and owned iteration use the iterators from [`std::slice`] and [`std::vec`].
//!
//! [`List`] is also re-exported under the parent module.

mod iter;
mod list;

pub use list::*;
