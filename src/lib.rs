//! A small library of generic collections that all share one querying contract.
//!
//! # Purpose
//! Lists, queues and dictionaries tend to grow their own, slightly different versions of the same
//! queries: "is any element like this", "give me the last one that matches", "project this into
//! something else". This crate writes those queries once, as the [`Enumerable`] trait, and has
//! every container answer them the same way, including on empty collections.
//!
//! # Method
//! The contract has four required primitives: `len`, `get`, and forward and backward iteration
//! with early exit. Everything else is provided on top of them.
//! [`ReadOnlyCollection`](collections::ReadOnlyCollection) implements the primitives over a
//! borrowed slice, and the owning containers delegate to a view over their own storage. Results
//! that form a new sequence (`reverse`, `select`, `filter`, `zip`) are fresh
//! [`List`](collections::List)s, so callers never observe a lazily evaluated chain.
//!
//! The [`Dictionary`](collections::Dictionary) is deliberately simple: two parallel Lists and a
//! linear scan. Keys only need [`PartialEq`].
//!
//! # Error Handling
//! Values that may legitimately be missing (the first element of an empty List, a key that isn't
//! present, the head of an empty Queue) are returned as [`Option`]s. Invalid positions are errors:
//! each positional method has a `try_*` variant returning a
//! [`Result`] with an [`IndexOutOfBounds`](collections::IndexOutOfBounds), and a plain variant that
//! panics with the same message, in the style of slice indexing.
//!
//! Modifying a container while enumerating it isn't detected at runtime, it is rejected by the
//! borrow checker: an iteration callback only ever sees a shared borrow.
//!
//! # Dependencies
//! This crate depends on `derive_more` for error and formatting boilerplate and on the `log`
//! facade, which only the [`event`] module writes to. No logger is installed by the library.
//!
//! # Features
//! - `event` (default): multicast [`Event`](event::Event)s of [`Delegate`](event::Delegate)s.
//! - `text` (default): joining any [`Enumerable`] into a [`String`].
//!
//! [`Enumerable`]: collections::Enumerable

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "event")]
pub mod event;
#[cfg(feature = "text")]
pub mod text;

pub(crate) mod util;
