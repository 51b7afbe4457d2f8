//! Errors that can occur during evaluation.

pub mod kind;

pub use grade_error::Error;
