use grade_parser::parser::{ast::Binary, op::BinOpKind};
use crate::{ctxt::Ctxt, error::Error, value::Value};
use super::Eval;

/// Applies a binary operation to two real operands. Returns [`None`] if the operation leaves the
/// real domain and must be retried with complex operands.
fn eval_real(lhs: f64, op: BinOpKind, rhs: f64) -> Option<f64> {
    match op {
        BinOpKind::Exp => {
            // a negative base with a fractional exponent has a complex principal value
            if lhs < 0.0 && rhs.fract() != 0.0 {
                None
            } else {
                Some(lhs.powf(rhs))
            }
        },
        BinOpKind::Mul => Some(lhs * rhs),
        BinOpKind::Div => Some(lhs / rhs),
        BinOpKind::Add => Some(lhs + rhs),
        BinOpKind::Sub => Some(lhs - rhs),
    }
}

/// Applies a binary operation to two values, widening to complex when necessary.
pub fn eval_operands(lhs: Value, op: BinOpKind, rhs: Value) -> Value {
    if let (Value::Float(left), Value::Float(right)) = (lhs, rhs) {
        if let Some(result) = eval_real(left, op, right) {
            return Value::Float(result);
        }
    }

    let (left, right) = (lhs.into_complex(), rhs.into_complex());
    let result = match op {
        BinOpKind::Exp => left.pow(right),
        BinOpKind::Mul => left * right,
        BinOpKind::Div => left / right,
        BinOpKind::Add => left + right,
        BinOpKind::Sub => left - right,
    };
    Value::Complex(result).coerce_float()
}

impl Eval for Binary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let lhs = self.lhs.eval(ctxt)?;
        let rhs = self.rhs.eval(ctxt)?;
        Ok(eval_operands(lhs, self.op.kind, rhs))
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use super::*;

    #[test]
    fn real_fast_path() {
        assert_eq!(
            eval_operands(Value::Float(2.0), BinOpKind::Exp, Value::Float(10.0)),
            Value::Float(1024.0),
        );
        assert_eq!(
            eval_operands(Value::Float(-8.0), BinOpKind::Exp, Value::Float(2.0)),
            Value::Float(64.0),
        );
    }

    #[test]
    fn negative_base_promotes() {
        let value = eval_operands(Value::Float(-8.0), BinOpKind::Exp, Value::Float(1.0 / 3.0));
        let Value::Complex(complex) = value else { panic!("expected complex, got {:?}", value) };
        assert_float_absolute_eq!(complex.re, 1.0, 1e-10);
        assert_float_absolute_eq!(complex.im, 3.0f64.sqrt(), 1e-10);
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert_eq!(
            eval_operands(Value::Float(1.0), BinOpKind::Div, Value::Float(0.0)),
            Value::Float(f64::INFINITY),
        );
    }
}
