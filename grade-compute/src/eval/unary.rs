use grade_parser::parser::{ast::Unary, op::UnaryOpKind};
use crate::{ctxt::Ctxt, error::Error, value::Value};
use super::Eval;

impl Eval for Unary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let operand = self.operand.eval(ctxt)?;
        Ok(match self.op.kind {
            UnaryOpKind::Neg => match operand {
                Value::Float(float) => Value::Float(-float),
                Value::Complex(complex) => Value::Complex(-complex),
            },
        })
    }
}
