//! General-purpose collection types built around one shared [`Enumerable`] contract.
//!
//! # Purpose
//! Every container here answers the same queries (predicate tests, projection, filtering, early
//! exit iteration, zipping) in the same way, no matter how it stores its elements.
//!
//! # Method
//! [`ReadOnlyCollection`] is the canonical implementation: a borrowed view over contiguous storage.
//! [`List`] and [`Queue`] hand out such a view over their own storage and delegate to it, while
//! [`Dictionary`] synthesizes [`KeyValuePair`]s from two parallel Lists. The query logic itself is
//! written once, as the provided methods of the trait.

pub mod dictionary;
pub mod enumerable;
pub mod list;
pub mod queue;
pub mod read_only;

#[doc(inline)]
pub use dictionary::{Dictionary, KeyValuePair};
#[doc(inline)]
pub use enumerable::{Enumerable, Flow};
#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use read_only::ReadOnlyCollection;

#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
