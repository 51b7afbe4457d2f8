//! Roots, exponentials, and logarithms.

use crate::{
    builtin::{Builtin, BuiltinError, Param},
    value::Value,
};

/// The square root function. A negative real argument produces a complex result.
pub struct Sqrt;

impl Builtin for Sqrt {
    fn name(&self) -> &'static str {
        "sqrt"
    }

    fn sig(&self) -> &'static [Param] {
        &[Param::Required("x")]
    }

    fn eval(&self, args: Vec<Value>) -> Result<Value, BuiltinError> {
        let value = match args[0] {
            Value::Float(float) if float >= 0.0 => Value::Float(float.sqrt()),
            other => Value::Complex(other.into_complex().sqrt()),
        };
        Ok(value.coerce_float())
    }
}

/// The exponential function, `e^x`.
pub struct Exp;

impl Builtin for Exp {
    fn name(&self) -> &'static str {
        "exp"
    }

    fn sig(&self) -> &'static [Param] {
        &[Param::Required("x")]
    }

    fn eval(&self, args: Vec<Value>) -> Result<Value, BuiltinError> {
        let value = match args[0] {
            Value::Float(float) => Value::Float(float.exp()),
            Value::Complex(complex) => Value::Complex(complex.exp()),
        };
        Ok(value.coerce_float())
    }
}

/// The natural logarithm. A nonpositive real argument produces a complex (or infinite) result.
pub struct Ln;

impl Builtin for Ln {
    fn name(&self) -> &'static str {
        "ln"
    }

    fn sig(&self) -> &'static [Param] {
        &[Param::Required("x")]
    }

    fn eval(&self, args: Vec<Value>) -> Result<Value, BuiltinError> {
        let value = match args[0] {
            Value::Float(float) if float >= 0.0 => Value::Float(float.ln()),
            other => Value::Complex(other.into_complex().ln()),
        };
        Ok(value.coerce_float())
    }
}

/// The logarithm function, defaulting to base 10. An optional second argument selects the base,
/// so `log(8, 2)` is 3.
pub struct Log;

impl Builtin for Log {
    fn name(&self) -> &'static str {
        "log"
    }

    fn sig(&self) -> &'static [Param] {
        &[Param::Required("x"), Param::Optional("base")]
    }

    fn eval(&self, args: Vec<Value>) -> Result<Value, BuiltinError> {
        let base = args.get(1).copied().unwrap_or(Value::Float(10.0));
        let value = match (args[0], base) {
            (Value::Float(x), Value::Float(b)) if x > 0.0 && b > 0.0 => Value::Float(x.log(b)),
            (x, b) => {
                let quotient = x.into_complex().ln() / b.into_complex().ln();
                Value::Complex(quotient)
            },
        };
        Ok(value.coerce_float())
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use crate::consts::E;
    use super::*;

    fn eval_real(builtin: &dyn Builtin, args: Vec<Value>) -> f64 {
        match builtin.eval(args) {
            Ok(Value::Float(float)) => float,
            other => panic!("expected a real result, got {:?}", other),
        }
    }

    #[test]
    fn sqrt_of_negative_is_complex() {
        let value = Sqrt.eval(vec![Value::Float(-4.0)]).unwrap();
        let Value::Complex(complex) = value else { panic!("expected complex") };
        assert_float_absolute_eq!(complex.re, 0.0, 1e-12);
        assert_float_absolute_eq!(complex.im, 2.0, 1e-12);
    }

    #[test]
    fn log_defaults_to_base_ten() {
        assert_float_absolute_eq!(eval_real(&Log, vec![Value::Float(100.0)]), 2.0, 1e-12);
    }

    #[test]
    fn log_with_explicit_base() {
        let args = vec![Value::Float(8.0), Value::Float(2.0)];
        assert_float_absolute_eq!(eval_real(&Log, args), 3.0, 1e-12);
    }

    #[test]
    fn ln_is_natural() {
        assert_float_absolute_eq!(eval_real(&Ln, vec![Value::Float(E)]), 1.0, 1e-12);
    }

    #[test]
    fn exp_inverts_ln() {
        let ln5 = eval_real(&Ln, vec![Value::Float(5.0)]);
        assert_float_absolute_eq!(eval_real(&Exp, vec![Value::Float(ln5)]), 5.0, 1e-12);
    }
}
