//! Parsing of expressions via precedence climbing.
//!
//! Implicit multiplication is handled here: whenever the next token could begin a primary
//! expression and multiplication is allowed at the current precedence, an implicit `*` is
//! inserted, so `3x`, `2(x + 1)`, and `(x - 1)(x + 1)` all parse.

use crate::tokenizer::TokenKind;
use super::{
    ast::{Binary, Call, Expr, LitFloat, LitInt, LitSym, Literal, Paren, Unary},
    error::{kind, Error},
    op::{Associativity, BinOp, BinOpKind, Precedence, UnaryOp, UnaryOpKind},
    Parse,
    Parser,
};

impl<'source> Parse<'source> for Expr {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        parse_binary(input, Precedence::Any.level())
    }
}

/// Parses a (possibly binary) expression, consuming operators with a precedence of at least
/// `min_level`.
fn parse_binary(input: &mut Parser, min_level: u8) -> Result<Expr, Error> {
    let mut lhs = parse_primary(input)?;

    loop {
        match input.peek_kind().and_then(BinOpKind::from_token) {
            Some(op) if op.precedence().level() >= min_level => {
                let token = input.next_token()?;
                let next_level = match op.associativity() {
                    Associativity::Left => op.precedence().level() + 1,
                    Associativity::Right => op.precedence().level(),
                };
                let rhs = parse_binary(input, next_level)?;
                let span = lhs.span().start..rhs.span().end;
                lhs = Expr::Binary(Binary {
                    lhs: Box::new(lhs),
                    op: BinOp { kind: op, implicit: false, span: token.span },
                    rhs: Box::new(rhs),
                    span,
                });
            },
            _ => {
                // no operator binds here; check for implicit multiplication
                let implicit = Precedence::Factor.level() >= min_level
                    && input.peek_kind().map_or(false, TokenKind::starts_primary);
                if !implicit {
                    break;
                }

                // implicit multiplication binds exactly like `*`
                let rhs = parse_binary(input, Precedence::Factor.level() + 1)?;
                let op_span = lhs.span().end..rhs.span().start;
                let span = lhs.span().start..rhs.span().end;
                lhs = Expr::Binary(Binary {
                    lhs: Box::new(lhs),
                    op: BinOp { kind: BinOpKind::Mul, implicit: true, span: op_span },
                    rhs: Box::new(rhs),
                    span,
                });
            },
        }
    }

    Ok(lhs)
}

/// Parses a primary expression: a literal, a symbol or function call, a negation, or a
/// parenthesized expression.
fn parse_primary(input: &mut Parser) -> Result<Expr, Error> {
    let token = input.next_token()?;
    match token.kind {
        TokenKind::Int => Ok(Expr::Literal(Literal::Integer(LitInt {
            value: token.lexeme.to_owned(),
            span: token.span,
        }))),
        TokenKind::Float => Ok(Expr::Literal(Literal::Float(LitFloat {
            value: token.lexeme.to_owned(),
            span: token.span,
        }))),
        TokenKind::Name => {
            let name = LitSym {
                name: token.lexeme.to_owned(),
                span: token.span,
            };
            if input.peek_kind() == Some(TokenKind::OpenParen) {
                parse_call(input, name)
            } else {
                Ok(Expr::Literal(Literal::Symbol(name)))
            }
        },
        TokenKind::Sub => {
            let operand = parse_binary(input, Precedence::Neg.level())?;
            let span = token.span.start..operand.span().end;
            Ok(Expr::Unary(Unary {
                operand: Box::new(operand),
                op: UnaryOp { kind: UnaryOpKind::Neg, span: token.span },
                span,
            }))
        },
        TokenKind::OpenParen => {
            if input.peek_kind() == Some(TokenKind::CloseParen) {
                return Err(input.error(kind::EmptyParenthesis));
            }

            let expr = parse_binary(input, Precedence::Any.level())?;
            let close = input.next_token().map_err(|_| {
                Error::new(vec![token.span.clone()], kind::UnclosedParenthesis { opening: true })
            })?;
            if close.kind != TokenKind::CloseParen {
                return Err(Error::new(vec![close.span.clone()], kind::UnexpectedToken {
                    expected: &[TokenKind::CloseParen],
                    found: close.kind,
                }));
            }

            let span = token.span.start..close.span.end;
            Ok(Expr::Paren(Paren { expr: Box::new(expr), span }))
        },
        _ => Err(Error::new(vec![token.span.clone()], kind::UnexpectedToken {
            expected: &[
                TokenKind::Int,
                TokenKind::Float,
                TokenKind::Name,
                TokenKind::Sub,
                TokenKind::OpenParen,
            ],
            found: token.kind,
        })),
    }
}

/// Parses the argument list of a function call. The opening parenthesis has been peeked but not
/// consumed.
fn parse_call(input: &mut Parser, name: LitSym) -> Result<Expr, Error> {
    let open = input.next_token()?;
    let mut args = Vec::new();

    if input.peek_kind() != Some(TokenKind::CloseParen) {
        loop {
            args.push(parse_binary(input, Precedence::Any.level())?);
            match input.peek_kind() {
                Some(TokenKind::Comma) => {
                    input.next_token()?;
                },
                _ => break,
            }
        }
    }

    let close = input.next_token().map_err(|_| {
        Error::new(vec![open.span.clone()], kind::UnclosedParenthesis { opening: true })
    })?;
    if close.kind != TokenKind::CloseParen {
        return Err(Error::new(vec![close.span.clone()], kind::UnexpectedToken {
            expected: &[TokenKind::CloseParen, TokenKind::Comma],
            found: close.kind,
        }));
    }

    let span = name.span.start..close.span.end;
    let paren_span = open.span.start..close.span.end;
    Ok(Expr::Call(Call { name, args, span, paren_span }))
}
