use grade_parser::parser::ast::Call;
use crate::{
    builtin::{check_arity, BuiltinError},
    ctxt::Ctxt,
    error::{kind, Error},
    value::Value,
};
use super::Eval;

impl Eval for Call {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let builtin = ctxt.get_func(&self.name.name).ok_or_else(|| {
            Error::new(vec![self.name.span.clone()], kind::UndefinedFunction {
                name: self.name.name.clone(),
                suggestions: ctxt.get_similar_funcs(&self.name.name),
            })
        })?;

        let args = self.args
            .iter()
            .map(|arg| arg.eval(ctxt))
            .collect::<Result<Vec<_>, _>>()?;

        check_arity(builtin.sig(), &args)
            .and_then(|_| builtin.eval(args))
            .map(Value::coerce_float)
            .map_err(|err| builtin_error(self, builtin.sig().len(), err))
    }
}

/// Attaches the call's name and spans to an arity error from a builtin.
fn builtin_error(call: &Call, max_args: usize, err: BuiltinError) -> Error {
    match err {
        BuiltinError::MissingArgument { index } => {
            Error::new(vec![call.paren_span.clone()], kind::MissingArgument {
                name: call.name.name.clone(),
                index,
                expected: max_args,
                given: call.args.len(),
            })
        },
        BuiltinError::TooManyArguments => {
            Error::new(vec![call.paren_span.clone()], kind::TooManyArguments {
                name: call.name.name.clone(),
                expected: max_args,
                given: call.args.len(),
            })
        },
    }
}
