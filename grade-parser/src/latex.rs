//! Textual normalization of LaTeX and mixed notation into the linear math dialect.
//!
//! Students author answers with whatever their input widget produces: raw LaTeX commands, Unicode
//! operator glyphs, or plain infix math. [`normalize`] rewrites the constructs the grader
//! understands into the dialect accepted by [`Parser`](crate::parser::Parser). Anything it does
//! not recognize passes through unchanged; the parser will then report it as a syntax error
//! instead of the grader guessing at a verdict.
//!
//! Normalization is idempotent: running it over an already-normalized string returns the string
//! unchanged.

/// Multiplication glyphs that are rewritten to `*`.
///
/// The leading entries are the byte sequences produced when the UTF-8 encodings of the glyphs
/// are decoded as Latin-1 somewhere between the input widget and the grader. They must be
/// rewritten before the plain glyphs: `Â·` contains `·`, and replacing the plain glyph first
/// would leave a stray `Â` behind.
const MUL_GLYPHS: &[&str] = &[
    "Ã—", "â‹…", "âˆ—", "Â·",
    "×", "⋅", "∗", "·",
];

/// Plain textual rewrites, applied in order after the brace-group rewrites.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\\sin", "sin"),
    ("\\cos", "cos"),
    ("\\tan", "tan"),
    ("\\log", "log"),
    ("\\ln", "ln"),
    ("\\alpha", "alpha"),
    ("\\beta", "beta"),
    ("\\gamma", "gamma"),
    ("\\pi", "pi"),
    ("\\times", "*"),
    ("\\cdot", "*"),
    ("\\left", ""),
    ("\\right", ""),
    ("\\{", ""),
    ("\\}", ""),
];

/// Function names that students write with the exponent between the name and the argument list,
/// as in `sin^2(x)`.
const POWERED_FUNCS: &[&str] = &["sin", "cos", "tan", "log", "ln"];

/// Rewrites LaTeX and mixed notation into the linear math dialect.
pub fn normalize(input: &str) -> String {
    let mut text = input.to_owned();

    for glyph in MUL_GLYPHS {
        if text.contains(glyph) {
            text = text.replace(glyph, "*");
        }
    }

    text = replace_braced(&text, "\\frac", 2, &|groups| {
        format!("({})/({})", groups[0], groups[1])
    });
    text = replace_braced(&text, "\\sqrt", 1, &|groups| format!("sqrt({})", groups[0]));
    text = rewrite_log_base(&text);
    text = replace_braced(&text, "^", 1, &|groups| format!("^({})", groups[0]));

    for (from, to) in REPLACEMENTS {
        if text.contains(from) {
            text = text.replace(from, to);
        }
    }

    rewrite_function_powers(&text)
}

/// Replaces every occurrence of `command` followed by `count` brace groups, using `render` to
/// produce the replacement text. Occurrences that are not followed by well-formed groups are left
/// untouched.
///
/// Brace groups may not contain nested braces; a nested `\frac` is a known limitation and passes
/// through to the parser unrewritten.
fn replace_braced(input: &str, command: &str, count: usize, render: &dyn Fn(&[&str]) -> String) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(at) = rest.find(command) {
        out.push_str(&rest[..at]);
        let after = &rest[at + command.len()..];
        match parse_groups(after, count) {
            Some((groups, consumed)) => {
                out.push_str(&render(&groups));
                rest = &after[consumed..];
            },
            None => {
                out.push_str(command);
                rest = after;
            },
        }
    }

    out.push_str(rest);
    out
}

/// Parses `count` consecutive `{...}` groups at the start of `input`, returning their contents
/// and the total number of bytes consumed.
fn parse_groups(input: &str, count: usize) -> Option<(Vec<&str>, usize)> {
    let mut pos = 0;
    let mut groups = Vec::with_capacity(count);

    for _ in 0..count {
        let rest = &input[pos..];
        if !rest.starts_with('{') {
            return None;
        }
        let close = rest.find('}')?;
        let body = &rest[1..close];
        if body.contains('{') {
            return None;
        }
        groups.push(body);
        pos += close + 1;
    }

    Some((groups, pos))
}

/// Parses a balanced `(...)` group at the start of `input`, returning the inner text and the
/// number of bytes consumed, including both parentheses.
fn balanced_paren(input: &str) -> Option<(&str, usize)> {
    if !input.starts_with('(') {
        return None;
    }

    let mut depth = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&input[1..i], i + 1));
                }
            },
            _ => {},
        }
    }

    None
}

/// Rewrites subscripted logarithms `\log_{b}(x)` (and the single-digit shorthand `\log_2(x)`)
/// into the two-argument call `log(x, b)`.
fn rewrite_log_base(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(at) = rest.find("\\log_") {
        out.push_str(&rest[..at]);
        let after = &rest[at + "\\log_".len()..];

        let parsed = (|| {
            let (base, consumed) = if after.starts_with('{') {
                let close = after.find('}')?;
                (&after[1..close], close + 1)
            } else {
                let digits = after.find(|c: char| !c.is_ascii_digit()).unwrap_or(after.len());
                if digits == 0 {
                    return None;
                }
                (&after[..digits], digits)
            };
            let (arg, arg_len) = balanced_paren(&after[consumed..])?;
            Some((base, arg, consumed + arg_len))
        })();

        match parsed {
            Some((base, arg, consumed)) => {
                out.push_str(&format!("log({}, {})", arg, base));
                rest = &after[consumed..];
            },
            None => {
                out.push_str("\\log_");
                rest = after;
            },
        }
    }

    out.push_str(rest);
    out
}

/// Rewrites `sin^2(x)`-style function powers into `sin(x)^(2)` so the exponent applies to the
/// call result rather than to a bare function name.
fn rewrite_function_powers(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    loop {
        // find the earliest `name^` occurrence that is not the tail of a longer identifier
        let mut found: Option<(usize, &str)> = None;
        for name in POWERED_FUNCS {
            let mut from = 0;
            while let Some(offset) = rest[from..].find(name) {
                let at = from + offset;
                let standalone = rest[..at]
                    .chars()
                    .next_back()
                    .map_or(true, |c| !c.is_ascii_alphabetic());
                if standalone && rest[at + name.len()..].starts_with('^') {
                    if found.map_or(true, |(best, _)| at < best) {
                        found = Some((at, name));
                    }
                    break;
                }
                from = at + name.len();
            }
        }

        let Some((at, name)) = found else { break };
        let after = &rest[at + name.len() + 1..];

        let parsed = (|| {
            let (exp, exp_len) = if after.starts_with('(') {
                balanced_paren(after)?
            } else {
                let digits = after.find(|c: char| !c.is_ascii_digit()).unwrap_or(after.len());
                if digits == 0 {
                    return None;
                }
                (&after[..digits], digits)
            };
            let (arg, arg_len) = balanced_paren(&after[exp_len..])?;
            Some((exp, arg, exp_len + arg_len))
        })();

        match parsed {
            Some((exp, arg, consumed)) => {
                out.push_str(&rest[..at]);
                out.push_str(&format!("{}({})^({})", name, arg, exp));
                rest = &after[consumed..];
            },
            None => {
                out.push_str(&rest[..at + name.len() + 1]);
                rest = after;
            },
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fractions() {
        assert_eq!(normalize("\\frac{2}{4}"), "(2)/(4)");
        assert_eq!(normalize("\\frac{2}{4} + \\frac{1}{6}"), "(2)/(4) + (1)/(6)");
        assert_eq!(normalize("\\frac{x^3}{3} + C"), "(x^3)/(3) + C");
    }

    #[test]
    fn square_roots() {
        assert_eq!(normalize("\\sqrt{8}"), "sqrt(8)");
        assert_eq!(normalize("2\\sqrt{2}"), "2sqrt(2)");
    }

    #[test]
    fn exponent_groups() {
        assert_eq!(normalize("e^{2x}"), "e^(2x)");
        assert_eq!(normalize("e^{\\ln(5)}"), "e^(ln(5))");
    }

    #[test]
    fn function_names() {
        assert_eq!(normalize("\\sin(0)"), "sin(0)");
        assert_eq!(normalize("\\cos(0) + \\tan(0)"), "cos(0) + tan(0)");
        assert_eq!(normalize("\\ln(e)"), "ln(e)");
    }

    #[test]
    fn log_base() {
        assert_eq!(normalize("\\log_{10}(100)"), "log(100, 10)");
        assert_eq!(normalize("\\log_2(8)"), "log(8, 2)");
        assert_eq!(normalize("\\log(100)"), "log(100)");
    }

    #[test]
    fn function_powers() {
        assert_eq!(normalize("\\sin^2(x) + \\cos^2(x)"), "sin(x)^(2) + cos(x)^(2)");
        assert_eq!(normalize("sin^{2}(x)"), "sin(x)^(2)");
    }

    #[test]
    fn greek_letters() {
        assert_eq!(normalize("\\alpha + \\beta"), "alpha + beta");
        assert_eq!(normalize("2\\pi"), "2pi");
    }

    #[test]
    fn multiplication_commands() {
        assert_eq!(normalize("3 \\times x"), "3 * x");
        assert_eq!(normalize("3 \\cdot x"), "3 * x");
        assert_eq!(normalize("\\left(x + 1\\right)"), "(x + 1)");
    }

    #[test]
    fn unicode_multiplication() {
        assert_eq!(normalize("3∗x"), "3*x");
        assert_eq!(normalize("3×x"), "3*x");
        assert_eq!(normalize("3·x"), "3*x");
        // UTF-8 bytes of `×` and `·` decoded as Latin-1
        assert_eq!(normalize("3Ã—x"), "3*x");
        assert_eq!(normalize("3Â·x"), "3*x");
    }

    #[test]
    fn unknown_constructs_pass_through() {
        assert_eq!(normalize("\\oint{x}"), "\\oint{x}");
    }

    #[test]
    fn nested_fraction_is_a_known_limitation() {
        let nested = "\\frac{\\frac{1}{2}}{3}";
        // the outer fraction does not rewrite; the inner one still does
        assert_eq!(normalize(nested), "\\frac{(1)/(2)}{3}");
    }

    #[test]
    fn idempotent() {
        for input in ["(2)/(4)", "sqrt(8)", "sin(x)^(2)", "log(100, 10)", "3*x + 2"] {
            assert_eq!(normalize(input), input);
        }
    }
}
