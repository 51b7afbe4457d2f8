//! Detection of numeric fraction literals and the lowest-terms test.
//!
//! Only purely numeric fractions are recognized; a symbolic fraction like `x/2` yields [`None`]
//! and the simplified-form policy does not apply to it.

/// Extracts the numerator and denominator from a numeric fraction literal.
///
/// Two forms are recognized, after discarding whitespace: a plain slash (`2/4`, with an optional
/// leading minus on the numerator) and a LaTeX fraction (`\frac{2}{4}`). Anything else yields
/// [`None`].
pub fn extract_fraction(text: &str) -> Option<(i64, i64)> {
    let text: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some(rest) = text.strip_prefix("\\frac{") {
        let (numerator, rest) = rest.split_once('}')?;
        let rest = rest.strip_prefix('{')?;
        let denominator = rest.strip_suffix('}')?;
        return Some((parse_int(numerator)?, parse_int(denominator)?));
    }

    let (numerator, denominator) = text.split_once('/')?;
    Some((parse_int(numerator)?, parse_int(denominator)?))
}

/// Parses an integer consisting of digits with an optional leading minus. Rejects anything
/// symbolic.
fn parse_int(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Returns true if the fraction is in lowest terms.
pub fn is_simplest_form(numerator: i64, denominator: i64) -> bool {
    gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) == 1
}

/// The greatest common divisor, by the Euclidean algorithm. `gcd(a, 0)` is `a`.
fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_slash() {
        assert_eq!(extract_fraction("2/4"), Some((2, 4)));
        assert_eq!(extract_fraction("-3 / 7"), Some((-3, 7)));
        assert_eq!(extract_fraction("10/2"), Some((10, 2)));
    }

    #[test]
    fn latex_fraction() {
        assert_eq!(extract_fraction("\\frac{2}{4}"), Some((2, 4)));
        assert_eq!(extract_fraction("\\frac{-1}{2}"), Some((-1, 2)));
    }

    #[test]
    fn symbolic_fractions_are_not_fractions() {
        assert_eq!(extract_fraction("x/2"), None);
        assert_eq!(extract_fraction("\\frac{x^3}{3}"), None);
        assert_eq!(extract_fraction("1/2 + 1"), None);
        assert_eq!(extract_fraction("3"), None);
    }

    #[test]
    fn lowest_terms() {
        assert!(is_simplest_form(1, 2));
        assert!(is_simplest_form(-3, 7));
        assert!(!is_simplest_form(2, 4));
        assert!(!is_simplest_form(10, 5));
    }

    #[test]
    fn gcd_of_zero() {
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 5), 5);
    }
}
