//! Grades free-form math answers by checking expression equivalence.
//!
//! The entry point is [`are_expressions_equivalent`], which takes a student's answer, the
//! reference answer, and a set of [`GradingOptions`], and returns whether the two are
//! mathematically equivalent under the selected policy. Answers may be written in LaTeX or in
//! the plain linear dialect; both are normalized before comparison.
//!
//! Equivalence is judged by sampling, not algebraic proof: the generic path evaluates both
//! expressions at a handful of points and requires agreement within a small tolerance, with a
//! canonical-form comparison as a fast accept. The grading options select stricter or
//! specialized comparisons on top of that:
//!
//! - [`require_simplified`](GradingOptions::require_simplified) rejects numeric fractions that
//!   are not in lowest terms, even when numerically correct.
//! - [`require_full_factorization`](GradingOptions::require_full_factorization) rejects answers
//!   with fewer factors than the reference.
//! - [`allow_multiple_solutions`](GradingOptions::allow_multiple_solutions) compares
//!   comma-separated solution lists as unordered sets.
//! - [`is_integral`](GradingOptions::is_integral) requires a constant of integration on both
//!   sides.
//! - [`is_domain_restriction`](GradingOptions::is_domain_restriction) compares canonicalized
//!   domain statements.
//! - [`is_complex_number`](GradingOptions::is_complex_number) compares complex values
//!   component-wise.

pub mod check;
pub mod complex;
pub mod domain;
pub mod factor;
pub mod fraction;
pub mod options;
pub mod solutions;

pub use check::{are_expressions_equivalent, CheckError};
pub use options::GradingOptions;
