//! A synchronous, single-threaded multicast event mechanism.
//!
//! An [`Event`] keeps a [`List`](crate::collections::List) of [`Delegate`]s and calls each of them,
//! in subscription order, whenever it is dispatched. Delegates compare by identity, so the handle
//! returned from [`Delegate::new`] (or any clone of it) is what unsubscribes a handler.

mod delegate;
mod event;

pub use delegate::*;
pub use event::*;
