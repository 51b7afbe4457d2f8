use ariadne::Fmt;
use grade_error::{error_kind, EXPR};
use crate::tokenizer::TokenKind;

error_kind! {
    /// The end of the source code was reached unexpectedly.
    #[derive(Debug, Clone, PartialEq)]
    pub struct UnexpectedEof;
    message = |_| "unexpected end of input",
    labels = [|_| format!("you might need to add another {} here", "expression".fg(EXPR))],
}

error_kind! {
    /// The end of the source code was expected, but something else was found.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ExpectedEof;
    message = |_| "expected end of input",
    labels = [|_| format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
}

error_kind! {
    /// An unexpected token was encountered.
    #[derive(Debug, Clone, PartialEq)]
    pub struct UnexpectedToken {
        /// The token(s) that were expected.
        pub expected: &'static [TokenKind],

        /// The token that was found.
        pub found: TokenKind,
    }
    message = |_| "unexpected token",
    labels = [|this: &Self| format!(
        "expected one of: {}",
        this.expected
            .iter()
            .map(|t| format!("{:?}", t))
            .collect::<Vec<_>>()
            .join(", "),
    )],
    help = |this: &Self| format!("found {:?}", this.found),
}

error_kind! {
    /// A parenthesis was not closed.
    #[derive(Debug, Clone, PartialEq)]
    pub struct UnclosedParenthesis {
        /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was
        /// a closing parenthesis `)`.
        pub opening: bool,
    }
    message = |_| "unclosed parenthesis",
    labels = [|_| "this parenthesis is not closed"],
    help = |this: &Self| if this.opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
}

error_kind! {
    /// There was no expression inside a pair of parentheses.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EmptyParenthesis;
    message = |_| "missing expression inside parenthesis",
    labels = [|_| "add an expression here"],
}
