use grade_parser::parser::ast::{LitFloat, LitInt, LitSym, Literal};
use crate::{ctxt::Ctxt, error::{kind, Error}, value::Value};
use super::Eval;

impl Eval for LitInt {
    fn eval(&self, _ctxt: &mut Ctxt) -> Result<Value, Error> {
        // the lexeme is all digits, so this cannot fail
        Ok(Value::Float(self.value.parse().unwrap_or(f64::NAN)))
    }
}

impl Eval for LitFloat {
    fn eval(&self, _ctxt: &mut Ctxt) -> Result<Value, Error> {
        Ok(Value::Float(self.value.parse().unwrap_or(f64::NAN)))
    }
}

impl Eval for LitSym {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        ctxt.get_var(&self.name).ok_or_else(|| {
            Error::new(vec![self.span.clone()], kind::UndefinedVariable {
                name: self.name.clone(),
                suggestions: ctxt.get_similar_vars(&self.name),
            })
        })
    }
}

impl Eval for Literal {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        match self {
            Literal::Integer(int) => int.eval(ctxt),
            Literal::Float(float) => float.eval(ctxt),
            Literal::Symbol(sym) => sym.eval(ctxt),
        }
    }
}
