use grade_parser::parser::ast::Paren;
use crate::{ctxt::Ctxt, error::Error, value::Value};
use super::Eval;

impl Eval for Paren {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        self.expr.eval(ctxt)
    }
}
