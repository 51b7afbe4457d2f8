//! The value produced by evaluating an expression.

use std::fmt;
use crate::complex::Complex;

/// Tolerance used when deciding whether an imaginary component is negligible.
const IM_EPSILON: f64 = 1e-12;

/// A value produced by the evaluator.
///
/// Evaluation begins in the real domain and is promoted to [`Value::Complex`] when an operation
/// leaves the reals, such as `sqrt(-1)` or `ln(-2)`. A complex value whose imaginary component
/// collapses back to (nearly) zero is demoted to a real by [`Value::coerce_float`] so that
/// `sqrt(-4) * sqrt(-4)` compares equal to `-4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A real number.
    Float(f64),

    /// A complex number.
    Complex(Complex),
}

impl Value {
    /// If the value is a complex number with a negligible imaginary component, coerces it to a
    /// real number. Otherwise, returns the value unchanged.
    pub fn coerce_float(self) -> Self {
        match self {
            Value::Complex(complex) if complex.im.abs() < IM_EPSILON => Value::Float(complex.re),
            other => other,
        }
    }

    /// Returns the value as a complex number, widening a real if necessary.
    pub fn into_complex(self) -> Complex {
        match self {
            Value::Float(float) => Complex::from(float),
            Value::Complex(complex) => complex,
        }
    }

    /// Returns true if the value is real, after coercion.
    pub fn is_real(self) -> bool {
        matches!(self.coerce_float(), Value::Float(_))
    }

    /// Returns true if any component of the value is NaN.
    pub fn is_nan(self) -> bool {
        match self {
            Value::Float(float) => float.is_nan(),
            Value::Complex(complex) => complex.re.is_nan() || complex.im.is_nan(),
        }
    }
}

impl From<f64> for Value {
    fn from(float: f64) -> Self {
        Value::Float(float)
    }
}

impl From<Complex> for Value {
    fn from(complex: Complex) -> Self {
        Value::Complex(complex)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Float(float) => write!(f, "{}", float),
            Value::Complex(complex) => write!(f, "{}", complex),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_float_drops_tiny_imaginary() {
        let value = Value::Complex(Complex::new(2.0, 1e-15));
        assert_eq!(value.coerce_float(), Value::Float(2.0));
    }

    #[test]
    fn coerce_float_keeps_genuine_complex() {
        let value = Value::Complex(Complex::new(2.0, 3.0));
        assert_eq!(value.coerce_float(), value);
        assert!(!value.is_real());
    }

    #[test]
    fn display() {
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Complex(Complex::new(5.0, 1.0)).to_string(), "5 + 1i");
        assert_eq!(Value::Complex(Complex::new(5.0, -1.0)).to_string(), "5 - 1i");
    }
}
