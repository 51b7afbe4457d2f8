//! Canonicalization of domain-restriction statements.
//!
//! Domain statements are set-theoretic, not numerically evaluable, so they are compared by pure
//! string canonicalization: both sides are rewritten into one spelling and checked for literal
//! equality. The rule tables below cover the interval and exclusion notations that appear in
//! grading problems; a semantically equal statement written outside this vocabulary will not be
//! recognized. That gap is a known limitation of string canonicalization.

/// Marker for set exclusion, standing in for `\setminus`.
const EXCLUDE: &str = "\u{2216}";

/// Marker for set union, standing in for `\cup`.
const UNION: &str = "\u{222a}";

/// Case-sensitive rewrites applied before lowercasing. Order matters: longer spellings come
/// before their prefixes.
const REWRITES: [(&str, &str); 14] = [
    ("\\setminus", EXCLUDE),
    ("\\backslash", EXCLUDE),
    ("\\mathbb{R}", "R"),
    ("\\mathbbR", "R"),
    ("\\Reals", "R"),
    ("\\R", "R"),
    ("\\infty", "inf"),
    ("infinity", "inf"),
    ("+inf", "inf"),
    ("\\cup", UNION),
    ("\\union", UNION),
    ("U", UNION),
    ("\\in", "in"),
    ("\u{2208}", "in"),
];

/// Rewrites applied after lowercasing, ending with removal of the membership prefix and of
/// grouping punctuation.
const LATE_REWRITES: [(&str, &str); 4] = [
    // the shorthand for the reals without zero
    ("r*", "r\u{2216}{0}"),
    // the interval-union rendering of the same set
    ("(-inf,0)\u{222a}(0,inf)", "r\u{2216}{0}"),
    (";", ","),
    ("xin", ""),
];

/// Characters dropped entirely at the end of canonicalization.
const PUNCTUATION: [char; 7] = ['{', '}', '(', ')', '[', ']', '\\'];

/// Canonicalizes a domain-restriction statement.
pub fn canonicalize(text: &str) -> String {
    let mut text: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '$')
        .collect();

    for (from, to) in REWRITES {
        text = text.replace(from, to);
    }

    let mut text = text.to_lowercase();
    text = text.replace("x=", "");
    for (from, to) in LATE_REWRITES {
        text = text.replace(from, to);
    }

    text.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Returns true if two domain statements canonicalize to the same string.
pub fn domains_equivalent(a: &str, b: &str) -> bool {
    canonicalize(a) == canonicalize(b)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn reals_without_zero() {
        let variants = [
            "$x \\in \\mathbb{R} \\setminus \\{0\\}$",
            "x \\in \\R \\backslash \\{0\\}",
            "\\mathbb{R} \\setminus \\{0\\}",
            "R*",
            "(-\\infty, 0) \\cup (0, \\infty)",
            "(-\\infty, 0) U (0, +\\infty)",
        ];
        let canonical = canonicalize(variants[0]);
        for variant in variants {
            assert_eq!(canonicalize(variant), canonical, "variant: {}", variant);
        }
    }

    #[test]
    fn matching_and_mismatching() {
        assert!(domains_equivalent(
            "$x \\in \\mathbb{R} \\setminus \\{0\\}$",
            "R*",
        ));
        assert!(!domains_equivalent(
            "$x \\in \\mathbb{R} \\setminus \\{0\\}$",
            "$x \\in \\mathbb{R} \\setminus \\{1\\}$",
        ));
        assert!(!domains_equivalent("(0, \\infty)", "(1, \\infty)"));
    }

    #[test]
    fn whitespace_and_delimiters_are_ignored() {
        assert_eq!(
            canonicalize("$ x \\in \\mathbb{R} $"),
            canonicalize("x\\in\\mathbb{R}"),
        );
    }
}
