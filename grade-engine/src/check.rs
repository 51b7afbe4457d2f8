//! The equivalence orchestrator: the only entry point callers use.

use std::fmt;
use grade_compute::{ctxt::Ctxt, eval::Eval, simplify, value::Value};
use grade_error::Error;
use grade_parser::{latex, parser::{ast::Expr, Parser}};
use crate::{complex, domain, factor, fraction, options::GradingOptions, solutions};

/// The absolute tolerance within which two sampled values are considered equal.
pub(crate) const TOLERANCE: f64 = 1e-10;

/// The points at which the generic path samples both expressions.
const SAMPLE_POINTS: [f64; 6] = [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0];

/// An error that aborts a grading call.
///
/// Non-equivalence is not an error; two well-formed but different answers produce `Ok(false)`.
#[derive(Debug)]
pub enum CheckError {
    /// One or both input expressions are empty.
    InvalidInput,

    /// The normalized text failed to parse.
    Parse {
        /// The text that failed to parse.
        text: String,

        /// The underlying parse error, which can render a span report against `text`.
        error: Error,
    },

    /// The expression parsed, but evaluation at a sample point failed.
    Eval {
        /// The text that failed to evaluate.
        text: String,

        /// The underlying evaluation error, which can render a span report against `text`.
        error: Error,
    },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CheckError::InvalidInput => write!(f, "one or both expressions are empty"),
            CheckError::Parse { text, error } => {
                write!(f, "failed to parse `{}`: {}", text, error.kind.message())
            },
            CheckError::Eval { text, error } => {
                write!(f, "failed to evaluate `{}`: {}", text, error.kind.message())
            },
        }
    }
}

impl std::error::Error for CheckError {}

/// Returns whether a student's answer is mathematically equivalent to the reference answer
/// under the given grading options.
///
/// Dispatch order when several options are set: domain restriction, complex number, multiple
/// solutions, then the simplified-fraction pre-check, then full factorization, then the generic
/// sampling path.
///
/// Fails with [`CheckError::InvalidInput`] if either input is empty, and with
/// [`CheckError::Parse`] or [`CheckError::Eval`] when the generic path cannot process an input.
/// The factorization and complex comparators downgrade such failures to `Ok(false)` instead,
/// since an answer in the wrong form there is simply wrong.
pub fn are_expressions_equivalent(
    student: &str,
    reference: &str,
    options: GradingOptions,
) -> Result<bool, CheckError> {
    if student.trim().is_empty() || reference.trim().is_empty() {
        return Err(CheckError::InvalidInput);
    }

    if options.is_domain_restriction {
        return Ok(domain::domains_equivalent(student, reference));
    }
    if options.is_complex_number {
        return Ok(complex::complex_equivalent(student, reference));
    }
    if options.allow_multiple_solutions {
        return solutions::solution_sets_equivalent(student, reference);
    }

    // a numerically correct but unsimplified fraction is graded incorrect
    if options.require_simplified {
        if let Some((numerator, denominator)) = fraction::extract_fraction(student) {
            if !fraction::is_simplest_form(numerator, denominator) {
                return Ok(false);
            }
        }
    }

    if options.require_full_factorization {
        return Ok(factor::factorizations_equivalent(student, reference, true));
    }

    generic_equivalent(student, reference, options.is_integral)
}

/// The generic path: normalize, parse, fast-accept on canonical form, then sample.
///
/// In integral mode both sides must contain a standalone constant-of-integration symbol (`c` or
/// `C`); the symbol is bound to the same value on both sides at each sample point, so any two
/// antiderivatives of the same function agree while a wrong multiple of the constant does not.
pub(crate) fn generic_equivalent(
    student: &str,
    reference: &str,
    integral: bool,
) -> Result<bool, CheckError> {
    let student_text = latex::normalize(student);
    let reference_text = latex::normalize(reference);
    let lhs = parse(&student_text)?;
    let rhs = parse(&reference_text)?;

    if integral {
        let has_constant =
            |expr: &Expr| expr.contains_symbol(&|name| name.eq_ignore_ascii_case("c"));
        if !has_constant(&lhs) || !has_constant(&rhs) {
            return Ok(false);
        }
    }

    if simplify::canonical(&lhs) == simplify::canonical(&rhs) {
        return Ok(true);
    }

    for &x in &SAMPLE_POINTS {
        let mut ctxt = sample_ctxt(x);
        if integral {
            // nonzero at every sample point, and varying so a scaled constant is caught
            let constant = Value::Float(x / 3.0 + 1.0);
            ctxt.set_var("c", constant);
            ctxt.set_var("C", constant);
        }

        let left = lhs.eval(&mut ctxt).map_err(|error| CheckError::Eval {
            text: student_text.clone(),
            error,
        })?;
        let right = rhs.eval(&mut ctxt).map_err(|error| CheckError::Eval {
            text: reference_text.clone(),
            error,
        })?;
        if !values_agree(left, right) {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Parses normalized text, attaching the offending text to any failure.
fn parse(text: &str) -> Result<Expr, CheckError> {
    Parser::new(text)
        .try_parse_full::<Expr>()
        .map_err(|error| CheckError::Parse { text: text.to_string(), error })
}

/// Builds the evaluation context for one sample point. The secondary variables are derived from
/// `x` so that multi-variable answers are still sampled at distinct points.
pub(crate) fn sample_ctxt(x: f64) -> Ctxt {
    let mut ctxt = Ctxt::new();
    ctxt.set_var("x", Value::Float(x));
    ctxt.set_var("y", Value::Float(x / 2.0 + 3.0));
    ctxt.set_var("z", Value::Float(5.0 - x));
    ctxt
}

/// Returns true if two sampled values agree within [`TOLERANCE`], component-wise.
///
/// Two NaNs agree (both sides are undefined at the point), a one-sided NaN does not, and
/// infinities must match exactly.
pub(crate) fn values_agree(a: Value, b: Value) -> bool {
    let (a, b) = (a.into_complex(), b.into_complex());
    component_agrees(a.re, b.re) && component_agrees(a.im, b.im)
}

fn component_agrees(a: f64, b: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        true
    } else if a.is_infinite() || b.is_infinite() {
        a == b
    } else {
        (a - b).abs() < TOLERANCE
    }
}
