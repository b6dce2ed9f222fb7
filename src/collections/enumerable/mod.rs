//! A module containing the [`Enumerable`] contract and the [`Flow`] signal used for early-exit
//! iteration.
//!
//! [`Enumerable`] is implemented by every sequence-like type in this crate. The querying logic
//! itself is written once, as provided methods on the trait, on top of four primitives: `len`,
//! `get`, `until` and `from_last_until`.

mod enumerable;
mod flow;

pub use enumerable::*;
pub use flow::*;
