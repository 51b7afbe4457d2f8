//! Comparison of multi-solution answers as unordered sets.

use crate::check::{generic_equivalent, CheckError};

/// Parses a solution list into its distinct value strings.
///
/// Brackets, braces, and parentheses are stripped, along with a leading `S =` label. The
/// remainder splits on commas; a token written as an assignment (`x = 4`) contributes only its
/// right-hand side. Duplicate values collapse and order is irrelevant.
pub fn parse_solution_set(text: &str) -> Vec<String> {
    let stripped: String = text
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '[' | ']' | '(' | ')'))
        .collect();
    let stripped = stripped.trim();
    let stripped = stripped
        .strip_prefix(['S', 's'])
        .and_then(|rest| rest.trim_start().strip_prefix('='))
        .unwrap_or(stripped);

    let mut values = Vec::new();
    for token in stripped.split(',') {
        let value = match token.split_once('=') {
            Some((_, rhs)) => rhs.trim(),
            None => token.trim(),
        };
        if !value.is_empty() && !values.iter().any(|seen| seen == value) {
            values.push(value.to_string());
        }
    }
    values
}

/// Returns true if two solution lists denote the same set of values.
///
/// The sets must have equal cardinality, and every student value must match a distinct
/// reference value under the generic equivalence check. Matched reference values are consumed
/// so that one reference solution cannot satisfy two student solutions.
pub fn solution_sets_equivalent(student: &str, reference: &str) -> Result<bool, CheckError> {
    let student = parse_solution_set(student);
    let mut reference = parse_solution_set(reference);
    if student.len() != reference.len() {
        return Ok(false);
    }

    for value in &student {
        let mut matched = None;
        for (index, candidate) in reference.iter().enumerate() {
            if generic_equivalent(value, candidate, false)? {
                matched = Some(index);
                break;
            }
        }
        match matched {
            Some(index) => {
                reference.remove(index);
            },
            None => return Ok(false),
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn parsing() {
        assert_eq!(parse_solution_set("x = 4, x = -4"), vec!["4", "-4"]);
        assert_eq!(parse_solution_set("{-4, 4}"), vec!["-4", "4"]);
        assert_eq!(parse_solution_set("S = {-4, 4}"), vec!["-4", "4"]);
        assert_eq!(parse_solution_set("x = 2, x = 2"), vec!["2"]);
    }

    #[test]
    fn set_equality() {
        assert!(solution_sets_equivalent("x = 4, x = -4", "{-4, 4}").unwrap());
        assert!(solution_sets_equivalent("S = {-4, 4}", "x = -4, x = 4").unwrap());
        assert!(!solution_sets_equivalent("x = 4", "{-4, 4}").unwrap());
        assert!(!solution_sets_equivalent("x = 4, x = 5", "{-4, 4}").unwrap());
    }

    #[test]
    fn values_match_through_the_generic_check() {
        assert!(solution_sets_equivalent("{2/4, 1}", "{1/2, 1}").unwrap());
    }

    #[test]
    fn matched_reference_values_are_consumed() {
        // `1/2` and `2/4` are textually distinct but equal in value; the single `1/2` on the
        // reference side must not satisfy both of them
        assert!(!solution_sets_equivalent("{1/2, 2/4}", "{1/2, 3}").unwrap());
        assert!(solution_sets_equivalent("{1/2, 2/4}", "{2/4, 0.5}").unwrap());
    }
}
