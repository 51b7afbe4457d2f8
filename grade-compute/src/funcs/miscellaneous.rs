//! Miscellaneous functions.

use crate::{
    builtin::{Builtin, BuiltinError, Param},
    value::Value,
};

/// The absolute value function. For a complex argument this is the magnitude, which is always
/// real.
pub struct Abs;

impl Builtin for Abs {
    fn name(&self) -> &'static str {
        "abs"
    }

    fn sig(&self) -> &'static [Param] {
        &[Param::Required("x")]
    }

    fn eval(&self, args: Vec<Value>) -> Result<Value, BuiltinError> {
        let value = match args[0] {
            Value::Float(float) => float.abs(),
            Value::Complex(complex) => complex.abs(),
        };
        Ok(Value::Float(value))
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use crate::complex::Complex;
    use super::*;

    #[test]
    fn real_abs() {
        assert_eq!(Abs.eval(vec![Value::Float(-3.5)]), Ok(Value::Float(3.5)));
    }

    #[test]
    fn complex_magnitude() {
        let value = Abs.eval(vec![Value::Complex(Complex::new(3.0, 4.0))]).unwrap();
        let Value::Float(float) = value else { panic!("expected real") };
        assert_float_absolute_eq!(float, 5.0, 1e-12);
    }
}
