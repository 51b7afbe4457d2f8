//! Trigonometric functions.

use crate::{
    builtin::{Builtin, BuiltinError, Param},
    value::Value,
};

macro_rules! trig {
    ($(#[$attr:meta])* $struct_name:ident, $fn_name:literal, $method:ident) => {
        $(#[$attr])*
        pub struct $struct_name;

        impl Builtin for $struct_name {
            fn name(&self) -> &'static str {
                $fn_name
            }

            fn sig(&self) -> &'static [Param] {
                &[Param::Required("x")]
            }

            fn eval(&self, args: Vec<Value>) -> Result<Value, BuiltinError> {
                let value = match args[0] {
                    Value::Float(float) => Value::Float(float.$method()),
                    Value::Complex(complex) => Value::Complex(complex.$method()),
                };
                Ok(value.coerce_float())
            }
        }
    };
}

trig! {
    /// The sine function, in radians.
    Sin, "sin", sin
}

trig! {
    /// The cosine function, in radians.
    Cos, "cos", cos
}

trig! {
    /// The tangent function, in radians.
    Tan, "tan", tan
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use crate::consts::PI;
    use super::*;

    fn eval_real(builtin: &dyn Builtin, x: f64) -> f64 {
        match builtin.eval(vec![Value::Float(x)]) {
            Ok(Value::Float(float)) => float,
            other => panic!("expected a real result, got {:?}", other),
        }
    }

    #[test]
    fn pythagorean_identity() {
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0] {
            let sum = eval_real(&Sin, x).powi(2) + eval_real(&Cos, x).powi(2);
            assert_float_absolute_eq!(sum, 1.0, 1e-12);
        }
    }

    #[test]
    fn known_values() {
        assert_float_absolute_eq!(eval_real(&Sin, PI / 2.0), 1.0, 1e-12);
        assert_float_absolute_eq!(eval_real(&Cos, 0.0), 1.0, 1e-12);
        assert_float_absolute_eq!(eval_real(&Tan, PI / 4.0), 1.0, 1e-12);
    }
}
