//! The interface implemented by builtin functions.

use crate::value::Value;

/// An error produced while calling a builtin function. The caller is responsible for attaching
/// the function's name and span before surfacing the error to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltinError {
    /// A required argument was not provided.
    MissingArgument {
        /// The zero-based index of the missing argument.
        index: usize,
    },

    /// More arguments were provided than the function accepts.
    TooManyArguments,
}

/// A parameter of a builtin function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// A required parameter.
    Required(&'static str),

    /// An optional parameter with a default value.
    Optional(&'static str),
}

/// A builtin function known to the evaluator.
pub trait Builtin: Send + Sync {
    /// The name the function is called by.
    fn name(&self) -> &'static str;

    /// The signature of the function.
    fn sig(&self) -> &'static [Param];

    /// Evaluates the function with the given arguments. Arity has already been validated against
    /// [`Builtin::sig`] by [`check_arity`].
    fn eval(&self, args: Vec<Value>) -> Result<Value, BuiltinError>;
}

/// Validates the number of arguments against a signature.
pub fn check_arity(sig: &[Param], args: &[Value]) -> Result<(), BuiltinError> {
    let required = sig
        .iter()
        .filter(|param| matches!(param, Param::Required(_)))
        .count();
    if args.len() < required {
        return Err(BuiltinError::MissingArgument { index: args.len() });
    }
    if args.len() > sig.len() {
        return Err(BuiltinError::TooManyArguments);
    }
    Ok(())
}
