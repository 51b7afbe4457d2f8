//! Numeric evaluation of parsed answers.
//!
//! The grader judges equivalence mostly by sampling: both expressions are evaluated at a handful
//! of points and compared within a tolerance. This crate provides the machinery for that: the
//! [`Value`](value::Value) type (real or complex, backed by `f64` — the grader has no use for
//! arbitrary precision), the evaluation context [`Ctxt`](ctxt::Ctxt) with its builtin constants
//! and functions, the [`Eval`](eval::Eval) trait implemented for every AST node, and the
//! [`simplify`] module that renders expressions into a canonical string for the fast-accept
//! comparison.
//!
//! The builtin functions intentionally override the conventions of some math libraries: `log`
//! defaults to base 10 (with an optional second argument for other bases), and `ln` is the
//! natural logarithm. Grading logarithm problems with a natural-log `log` would silently mark
//! correct answers wrong.

pub mod builtin;
pub mod complex;
pub mod consts;
pub mod ctxt;
pub mod error;
pub mod eval;
pub mod funcs;
pub mod simplify;
pub mod value;
