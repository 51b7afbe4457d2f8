//! Numeric evaluation of the AST.

mod binary;
mod call;
mod literal;
mod paren;
mod unary;

use grade_parser::parser::ast::Expr;
use crate::{ctxt::Ctxt, error::Error, value::Value};

/// Any type that can be evaluated to produce a [`Value`].
pub trait Eval {
    /// Evaluate the expression in the given context.
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error>;

    /// Evaluate the expression in the default context.
    fn eval_default(&self) -> Result<Value, Error> {
        self.eval(&mut Ctxt::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        match self {
            Expr::Literal(literal) => literal.eval(ctxt),
            Expr::Paren(paren) => paren.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use grade_parser::parser::{ast::Expr, Parser};
    use super::*;

    fn eval_str(source: &str) -> Value {
        let expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
        expr.eval_default().unwrap()
    }

    fn eval_with_x(source: &str, x: f64) -> Value {
        let expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
        let mut ctxt = Ctxt::new();
        ctxt.set_var("x", Value::Float(x));
        expr.eval(&mut ctxt).unwrap()
    }

    fn assert_real(value: Value, expected: f64) {
        let Value::Float(float) = value else { panic!("expected real, got {:?}", value) };
        assert_float_absolute_eq!(float, expected, 1e-10);
    }

    #[test]
    fn arithmetic() {
        assert_real(eval_str("1 + 2 * 3"), 7.0);
        assert_real(eval_str("(1 + 2) * 3"), 9.0);
        assert_real(eval_str("10 / 4"), 2.5);
        assert_real(eval_str("2^10"), 1024.0);
        assert_real(eval_str("-2^2"), -4.0);
    }

    #[test]
    fn variables() {
        assert_real(eval_with_x("3 * x + 2", 2.0), 8.0);
        assert_real(eval_with_x("x^2 - 1", 3.0), 8.0);
    }

    #[test]
    fn undefined_variable_fails() {
        let expr = Parser::new("3q + 2").try_parse_full::<Expr>().unwrap();
        assert!(expr.eval_default().is_err());
    }

    #[test]
    fn undefined_function_fails() {
        let expr = Parser::new("sine(1)").try_parse_full::<Expr>().unwrap();
        assert!(expr.eval_default().is_err());
    }

    #[test]
    fn functions() {
        assert_real(eval_str("sqrt(16)"), 4.0);
        assert_real(eval_str("log(100)"), 2.0);
        assert_real(eval_str("log(8, 2)"), 3.0);
        assert_real(eval_str("ln(e)"), 1.0);
        assert_real(eval_str("e^(ln(5))"), 5.0);
    }

    #[test]
    fn pythagorean_identity_with_x() {
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0] {
            assert_real(eval_with_x("sin(x)^(2) + cos(x)^(2)", x), 1.0);
        }
    }

    #[test]
    fn complex_arithmetic() {
        let value = eval_str("(3 + 4i) + (2 - 3i)");
        let Value::Complex(complex) = value else { panic!("expected complex, got {:?}", value) };
        assert_float_absolute_eq!(complex.re, 5.0, 1e-10);
        assert_float_absolute_eq!(complex.im, 1.0, 1e-10);
    }

    #[test]
    fn i_squared_is_real() {
        // the imaginary component collapses, so the result demotes to a real
        assert_real(eval_str("i^2"), -1.0);
    }

    #[test]
    fn sqrt_of_negative_promotes() {
        let value = eval_str("sqrt(-4)");
        let Value::Complex(complex) = value else { panic!("expected complex, got {:?}", value) };
        assert_float_absolute_eq!(complex.re, 0.0, 1e-12);
        assert_float_absolute_eq!(complex.im, 2.0, 1e-12);
    }

    #[test]
    fn negative_base_fractional_exponent_promotes() {
        // (-8)^(1/3) is the principal complex cube root, not -2
        let value = eval_with_x("x^(1/3)", -8.0);
        let Value::Complex(complex) = value else { panic!("expected complex, got {:?}", value) };
        assert_float_absolute_eq!(complex.re, 1.0, 1e-10);
        assert_float_absolute_eq!(complex.im, 3.0f64.sqrt(), 1e-10);
    }
}
