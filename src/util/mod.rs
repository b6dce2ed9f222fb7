#![warn(missing_docs)]

pub mod error;
pub mod fmt;
pub mod option;
pub mod panic;
pub mod result;
