//! Canonical rendering of expressions.
//!
//! Two answers that are the same expression written differently, such as `3x + 2` and
//! `2 + 3 * x`, should be accepted without resorting to numeric sampling. This module flattens
//! an expression into n-ary sums and products, folds constants, sorts operands, and renders the
//! result into a deterministic string. Two expressions with equal canonical strings are
//! structurally equivalent.
//!
//! The canonical form is a fast-accept only: unequal canonical strings mean nothing, and the
//! caller falls back to sampling.

use grade_parser::parser::{
    ast::{Expr, Literal},
    op::{BinOpKind, UnaryOpKind},
};

/// Largest magnitude rendered as an integer. Beyond this, `f64` cannot represent every integer.
const MAX_EXACT_INT: f64 = 1e15;

/// An expression flattened into a shape convenient for canonicalization.
#[derive(Debug, Clone, PartialEq)]
enum Canon {
    /// A numeric constant.
    Num(f64),

    /// A symbol.
    Sym(String),

    /// A function call.
    Call(String, Vec<Canon>),

    /// An exponentiation.
    Pow(Box<Canon>, Box<Canon>),

    /// An n-ary sum.
    Sum(Vec<Canon>),

    /// An n-ary product.
    Prod(Vec<Canon>),
}

impl Canon {
    /// Converts an AST node into the flattened shape. Subtraction becomes addition of a negated
    /// term, division becomes multiplication by a reciprocal, and parentheses disappear.
    fn from_expr(expr: &Expr) -> Self {
        match expr {
            Expr::Literal(Literal::Integer(int)) => {
                Canon::Num(int.value.parse().unwrap_or(f64::NAN))
            },
            Expr::Literal(Literal::Float(float)) => {
                Canon::Num(float.value.parse().unwrap_or(f64::NAN))
            },
            Expr::Literal(Literal::Symbol(sym)) => Canon::Sym(sym.name.clone()),
            Expr::Paren(paren) => Canon::from_expr(paren.innermost()),
            Expr::Call(call) => Canon::Call(
                call.name.name.clone(),
                call.args.iter().map(Canon::from_expr).collect(),
            ),
            Expr::Unary(unary) => match unary.op.kind {
                UnaryOpKind::Neg => Canon::Prod(vec![
                    Canon::Num(-1.0),
                    Canon::from_expr(&unary.operand),
                ]),
            },
            Expr::Binary(binary) => {
                let lhs = Canon::from_expr(&binary.lhs);
                let rhs = Canon::from_expr(&binary.rhs);
                match binary.op.kind {
                    BinOpKind::Add => Canon::Sum(vec![lhs, rhs]),
                    BinOpKind::Sub => Canon::Sum(vec![
                        lhs,
                        Canon::Prod(vec![Canon::Num(-1.0), rhs]),
                    ]),
                    BinOpKind::Mul => Canon::Prod(vec![lhs, rhs]),
                    BinOpKind::Div => Canon::Prod(vec![
                        lhs,
                        Canon::Pow(Box::new(rhs), Box::new(Canon::Num(-1.0))),
                    ]),
                    BinOpKind::Exp => Canon::Pow(Box::new(lhs), Box::new(rhs)),
                }
            },
        }
    }

    /// Normalizes the node: folds constants, flattens nested sums and products, drops identity
    /// elements, and sorts operands into a deterministic order.
    fn fold(self) -> Self {
        match self {
            Canon::Num(_) | Canon::Sym(_) => self,
            Canon::Call(name, args) => {
                Canon::Call(name, args.into_iter().map(Canon::fold).collect())
            },
            Canon::Pow(base, exp) => {
                let base = base.fold();
                let exp = exp.fold();
                if let Canon::Num(e) = exp {
                    // fold constant powers that stay real
                    if let Canon::Num(b) = &base {
                        if *b >= 0.0 || e.fract() == 0.0 {
                            return Canon::Num(b.powf(e));
                        }
                    }
                    if e == 1.0 {
                        return base;
                    }
                    if e == 0.0 {
                        return Canon::Num(1.0);
                    }
                    return Canon::Pow(Box::new(base), Box::new(Canon::Num(e)));
                }
                Canon::Pow(Box::new(base), Box::new(exp))
            },
            Canon::Sum(terms) => {
                let mut constant = 0.0;
                let mut rest = Vec::new();
                for term in terms {
                    match term.fold() {
                        Canon::Num(num) => constant += num,
                        Canon::Sum(inner) => {
                            for inner_term in inner {
                                match inner_term {
                                    Canon::Num(num) => constant += num,
                                    other => rest.push(other),
                                }
                            }
                        },
                        other => rest.push(other),
                    }
                }
                if constant != 0.0 || rest.is_empty() {
                    rest.push(Canon::Num(constant));
                }
                sort_operands(&mut rest);
                collapse(rest, Canon::Sum)
            },
            Canon::Prod(factors) => {
                let mut constant = 1.0;
                let mut rest = Vec::new();
                for factor in factors {
                    match factor.fold() {
                        Canon::Num(num) => constant *= num,
                        Canon::Prod(inner) => {
                            for inner_factor in inner {
                                match inner_factor {
                                    Canon::Num(num) => constant *= num,
                                    other => rest.push(other),
                                }
                            }
                        },
                        other => rest.push(other),
                    }
                }
                if constant == 0.0 {
                    return Canon::Num(0.0);
                }
                if constant != 1.0 || rest.is_empty() {
                    rest.push(Canon::Num(constant));
                }
                sort_operands(&mut rest);
                collapse(rest, Canon::Prod)
            },
        }
    }

    /// Renders the node into its canonical string.
    fn render(&self) -> String {
        match self {
            Canon::Num(num) => {
                if num.fract() == 0.0 && num.abs() < MAX_EXACT_INT {
                    format!("{}", *num as i64)
                } else {
                    format!("{}", num)
                }
            },
            Canon::Sym(name) => name.clone(),
            Canon::Call(name, args) => {
                let rendered = args
                    .iter()
                    .map(Canon::render)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}({})", name, rendered)
            },
            Canon::Pow(base, exp) => format!("({})^({})", base.render(), exp.render()),
            Canon::Sum(terms) => terms
                .iter()
                .map(Canon::render)
                .collect::<Vec<_>>()
                .join(" + "),
            Canon::Prod(factors) => factors
                .iter()
                .map(Canon::render)
                .collect::<Vec<_>>()
                .join(" * "),
        }
    }
}

/// Sorts operands of a sum or product: the constant first, then by rendered string.
fn sort_operands(operands: &mut [Canon]) {
    operands.sort_by_cached_key(|operand| {
        let is_sym = !matches!(operand, Canon::Num(_));
        (is_sym, operand.render())
    });
}

/// Collapses a single-operand sum or product into the operand itself.
fn collapse(mut operands: Vec<Canon>, wrap: fn(Vec<Canon>) -> Canon) -> Canon {
    if operands.len() == 1 {
        operands.remove(0)
    } else {
        wrap(operands)
    }
}

/// Renders an expression into its canonical string.
pub fn canonical(expr: &Expr) -> String {
    Canon::from_expr(expr).fold().render()
}

#[cfg(test)]
mod tests {
    use grade_parser::parser::{ast::Expr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    fn canon(source: &str) -> String {
        let expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
        canonical(&expr)
    }

    #[test]
    fn reordered_terms_agree() {
        assert_eq!(canon("3x + 2"), canon("2 + 3 * x"));
        assert_eq!(canon("x * 3 + 2"), canon("2 + 3x"));
    }

    #[test]
    fn constants_fold() {
        assert_eq!(canon("1 + 1 + x"), canon("x + 2"));
        assert_eq!(canon("2 * 3 * x"), canon("6x"));
        assert_eq!(canon("2^3"), "8");
    }

    #[test]
    fn subtraction_and_division_normalize() {
        assert_eq!(canon("x - 1"), canon("-1 + x"));
        assert_eq!(canon("x / 2"), canon("x * 2^(-1)"));
    }

    #[test]
    fn parens_disappear() {
        assert_eq!(canon("((x))"), "x");
        assert_eq!(canon("(x + 1) + 2"), canon("x + 3"));
    }

    #[test]
    fn distinct_expressions_stay_distinct() {
        assert_ne!(canon("x + 1"), canon("x + 2"));
        assert_ne!(canon("x^2"), canon("x * 2"));
        assert_ne!(canon("sin(x)"), canon("cos(x)"));
    }

    #[test]
    fn calls_canonicalize_arguments() {
        assert_eq!(canon("sin(1 + x)"), canon("sin(x + 1)"));
    }
}
