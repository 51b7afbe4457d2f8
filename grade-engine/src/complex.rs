//! Component-wise comparison of complex-number answers.

use grade_compute::{complex::Complex, eval::Eval, value::Value};
use grade_parser::{latex, parser::{ast::Expr, Parser}};
use crate::check::TOLERANCE;

/// Evaluates a textual answer to a complex value. A real result widens to a complex value with
/// a zero imaginary component.
fn parse_complex(text: &str) -> Option<Complex> {
    let normalized = latex::normalize(text);
    let expr = Parser::new(&normalized).try_parse_full::<Expr>().ok()?;
    match expr.eval_default().ok()? {
        value if value.is_nan() => None,
        Value::Float(float) => Some(Complex::from(float)),
        Value::Complex(complex) => Some(complex),
    }
}

/// Returns true if two answers evaluate to the same complex value, comparing the real and
/// imaginary components independently. Any parse or evaluation failure yields `false`.
pub fn complex_equivalent(a: &str, b: &str) -> bool {
    match (parse_complex(a), parse_complex(b)) {
        (Some(left), Some(right)) => {
            (left.re - right.re).abs() < TOLERANCE && (left.im - right.im).abs() < TOLERANCE
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        assert!(complex_equivalent("(3+4i)+(2-3i)", "5+i"));
        assert!(complex_equivalent("(3 + 4i) + (2 - 3i)", "5 + i"));
        assert!(!complex_equivalent("(3+4i)+(2-3i)", "5-i"));
    }

    #[test]
    fn real_answers_widen() {
        assert!(complex_equivalent("2+2", "4"));
        assert!(complex_equivalent("i^2", "-1"));
    }

    #[test]
    fn coefficient_on_either_side_of_i() {
        assert!(complex_equivalent("4i", "i4"));
    }

    #[test]
    fn failures_are_false() {
        assert!(!complex_equivalent("3+", "3"));
        assert!(!complex_equivalent("3", "3+"));
    }
}
