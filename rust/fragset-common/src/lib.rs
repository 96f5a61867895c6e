//! Core definitions shared by the fragset-* crates: the error type and
//! argument verification helpers.

pub mod error;
pub mod result;

pub use result::Result;
