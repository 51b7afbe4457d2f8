//! Comparison of factored expressions.
//!
//! Factored answers are compared textually-then-numerically: implicit multiplication is first
//! made explicit so the strings parse, then both sides are evaluated at a fixed set of sample
//! points. When full factorization is required, the factor counts (approximated by the number of
//! opening parentheses) must also match, so an expanded but equivalent answer is rejected.

use grade_compute::eval::Eval;
use grade_parser::parser::{ast::Expr, Parser};
use crate::check::{sample_ctxt, values_agree};

/// The points at which factored expressions are compared.
const SAMPLE_POINTS: [f64; 8] = [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

/// Hyphen and minus lookalikes normalized to an ASCII minus.
const MINUS_GLYPHS: [char; 4] = ['\u{2212}', '\u{2010}', '\u{2013}', '\u{2014}'];

/// Rewrites a factored answer so that every multiplication is explicit.
///
/// Whitespace is discarded, minus lookalikes become `-`, explicit `*` is removed and then
/// re-inserted between a digit and `x`, between adjacent parenthesized groups, and between `x`
/// and an adjacent parenthesis. The repeated-variable shorthand `xx` becomes `x^2`.
pub fn normalize_factorization(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if MINUS_GLYPHS.contains(&c) { '-' } else { c })
        .collect();
    let stripped = stripped.replace('*', "").replace("xx", "x^2");

    let mut normalized = String::with_capacity(stripped.len());
    let mut chars = stripped.chars().peekable();
    while let Some(c) = chars.next() {
        normalized.push(c);
        if let Some(&next) = chars.peek() {
            let implicit = (c.is_ascii_digit() && next == 'x')
                || (c == ')' && next == '(')
                || (c == 'x' && next == '(')
                || (c == ')' && next == 'x');
            if implicit {
                normalized.push('*');
            }
        }
    }
    normalized
}

/// Returns true if two factored answers agree at every sample point.
///
/// With `require_full`, the two sides must also contain the same number of opening parentheses
/// before values are even compared. Parse and evaluation failures yield `false` rather than an
/// error; a factored answer that cannot be evaluated is simply wrong.
pub fn factorizations_equivalent(a: &str, b: &str, require_full: bool) -> bool {
    let a = normalize_factorization(a);
    let b = normalize_factorization(b);

    if require_full {
        let factors = |text: &str| text.matches('(').count();
        if factors(&a) != factors(&b) {
            return false;
        }
    }

    let parse = |text: &str| Parser::new(text).try_parse_full::<Expr>().ok();
    let (Some(lhs), Some(rhs)) = (parse(&a), parse(&b)) else {
        return false;
    };

    SAMPLE_POINTS.iter().all(|&x| {
        let mut ctxt = sample_ctxt(x);
        match (lhs.eval(&mut ctxt), rhs.eval(&mut ctxt)) {
            (Ok(left), Ok(right)) => {
                !left.is_nan() && !right.is_nan() && values_agree(left, right)
            },
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn normalization() {
        assert_eq!(normalize_factorization("(x-1)(x+1)"), "(x-1)*(x+1)");
        assert_eq!(normalize_factorization("2x(x + 1)"), "2*x*(x+1)");
        assert_eq!(normalize_factorization("(x+1)x"), "(x+1)*x");
        assert_eq!(normalize_factorization("x*x"), "x^2");
        assert_eq!(normalize_factorization("3 \u{2212} x"), "3-x");
    }

    #[test]
    fn equivalent_factorizations() {
        assert!(factorizations_equivalent("(x-1)(x+1)", "x^2-1", false));
        assert!(factorizations_equivalent("(x+1)(x+2)", "(x+2)(x+1)", false));
        assert!(!factorizations_equivalent("(x-1)(x+1)", "x^2+1", false));
    }

    #[test]
    fn full_factorization_requires_matching_factor_count() {
        assert!(!factorizations_equivalent(
            "(x^2-1)(x^2+1)",
            "(x-1)(x+1)(x^2+1)",
            true,
        ));
        assert!(factorizations_equivalent(
            "(x-1)(x+1)(x^2+1)",
            "(x-1)(x+1)(x^2+1)",
            true,
        ));
    }

    #[test]
    fn unparseable_input_is_false() {
        assert!(!factorizations_equivalent("(x-1)(x+", "x^2-1", false));
    }
}
