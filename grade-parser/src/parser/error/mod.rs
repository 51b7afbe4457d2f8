pub mod kind;

pub use grade_error::Error;
