pub mod ast;
pub mod error;
pub mod expr;
pub mod op;

use error::{kind, Error};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// A type that can be parsed from a stream of tokens.
pub trait Parse<'source>: Sized {
    /// Parses a value from the given parser.
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error>;
}

/// A high-level parser for the dialect. This is the type to use to parse an arbitrary expression
/// into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl grade_error::ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Returns the kind of the next non-whitespace token without advancing the cursor. Returns
    /// [`None`] if there are no more tokens.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens[self.cursor..]
            .iter()
            .find(|token| !token.is_whitespace())
            .map(|token| token.kind)
    }

    /// Returns true if all remaining tokens are whitespace.
    pub fn at_eof(&self) -> bool {
        self.peek_kind().is_none()
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse<'source>>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        if self.at_eof() {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::{ast::Expr, Parser};

    /// Parses the input and renders it back through the AST's `Display` impl.
    fn roundtrip(input: &str) -> String {
        Parser::new(input)
            .try_parse_full::<Expr>()
            .unwrap()
            .to_string()
    }

    #[test]
    fn precedence() {
        assert_eq!(roundtrip("1 + 2 * 3"), "1 + 2 * 3");
        assert_eq!(roundtrip("1 * 2 + 3"), "1 * 2 + 3");
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(roundtrip("3x"), "3 * x");
        assert_eq!(roundtrip("2(x + 1)"), "2 * (x + 1)");
        assert_eq!(roundtrip("(x - 1)(x + 1)"), "(x - 1) * (x + 1)");
    }

    #[test]
    fn implicit_multiplication_binds_below_exponent() {
        // 2x^2 must parse as 2 * (x^2), not (2 * x)^2
        let expr = Parser::new("2x^2").try_parse_full::<Expr>().unwrap();
        assert_eq!(expr.to_string(), "2 * x ^ 2");
        let Expr::Binary(binary) = expr else { panic!("expected binary") };
        assert_eq!(binary.lhs.to_string(), "2");
        assert_eq!(binary.rhs.to_string(), "x ^ 2");
    }

    #[test]
    fn exponent_is_right_associative() {
        let expr = Parser::new("2^3^2").try_parse_full::<Expr>().unwrap();
        let Expr::Binary(binary) = expr else { panic!("expected binary") };
        assert_eq!(binary.lhs.to_string(), "2");
        assert_eq!(binary.rhs.to_string(), "3 ^ 2");
    }

    #[test]
    fn unary_negation() {
        let expr = Parser::new("-x^2").try_parse_full::<Expr>().unwrap();
        let Expr::Unary(unary) = expr else { panic!("expected unary") };
        assert_eq!(unary.operand.to_string(), "x ^ 2");
    }

    #[test]
    fn calls() {
        assert_eq!(roundtrip("sqrt(8)"), "sqrt(8)");
        assert_eq!(roundtrip("log(100, 10)"), "log(100, 10)");
        assert_eq!(roundtrip("sin(x)^(2)"), "sin(x) ^ (2)");
    }

    #[test]
    fn malformed_input_fails() {
        assert!(Parser::new("2+*x").try_parse_full::<Expr>().is_err());
        assert!(Parser::new("(x + 1").try_parse_full::<Expr>().is_err());
        assert!(Parser::new("").try_parse_full::<Expr>().is_err());
        assert!(Parser::new("1 2 +").try_parse_full::<Expr>().is_err());
    }

    #[test]
    fn trailing_tokens_fail() {
        assert!(Parser::new("x = 4").try_parse_full::<Expr>().is_err());
    }
}
