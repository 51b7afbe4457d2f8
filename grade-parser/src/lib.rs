//! Parsing for the linear math dialect accepted by the answer checker.
//!
//! Student answers arrive as LaTeX, plain infix math, or a mixture of both. The [`latex`] module
//! rewrites the LaTeX constructs into the linear dialect, the [`tokenizer`] module splits the
//! result into tokens, and the [`parser`] module builds the AST that `grade-compute` evaluates.

pub mod latex;
pub mod parser;
pub mod tokenizer;
