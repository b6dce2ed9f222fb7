//! A module containing [`Dictionary`] and associated types.
//!
//! A Dictionary is enumerated as [`KeyValuePair`]s, which are synthesized from its parallel key
//! and value Lists on demand. [`Iter`] provides borrowed iteration over those pairs.
//!
//! [`Dictionary`] is also re-exported under the parent module.

mod dictionary;
mod iter;
mod pair;
mod tests;

pub use dictionary::*;
pub use iter::*;
pub use pair::*;
