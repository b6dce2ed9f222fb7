//! String helpers that work over any [`Enumerable`](crate::collections::Enumerable).

mod join;
mod tests;

pub use join::*;
