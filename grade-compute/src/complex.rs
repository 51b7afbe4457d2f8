//! A complex number backed by a pair of `f64`s.

use std::{fmt, ops::{Add, Div, Mul, Neg, Sub}};

/// A complex number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    /// The real component.
    pub re: f64,

    /// The imaginary component.
    pub im: f64,
}

impl Complex {
    /// The additive identity.
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    /// The imaginary unit.
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    /// Creates a new complex number with the given components.
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Returns true if both components are zero.
    pub fn is_zero(self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// Returns the magnitude of the complex number.
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Returns the argument (phase angle) of the complex number.
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Returns the complex conjugate.
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Returns the principal natural logarithm.
    pub fn ln(self) -> Self {
        Self::new(self.abs().ln(), self.arg())
    }

    /// Returns `e` raised to this complex number.
    pub fn exp(self) -> Self {
        let r = self.re.exp();
        Self::new(r * self.im.cos(), r * self.im.sin())
    }

    /// Raises the complex number to a complex power, via `z^w = e^(w ln z)`.
    pub fn pow(self, exp: Self) -> Self {
        if self.is_zero() {
            if exp.is_zero() {
                return Self::new(1.0, 0.0);
            }
            if exp.im == 0.0 && exp.re > 0.0 {
                return Self::ZERO;
            }
            return Self::new(f64::NAN, f64::NAN);
        }

        (exp * self.ln()).exp()
    }

    /// Returns the principal square root.
    pub fn sqrt(self) -> Self {
        self.pow(Self::new(0.5, 0.0))
    }

    /// Returns the sine of the complex number.
    pub fn sin(self) -> Self {
        Self::new(self.re.sin() * self.im.cosh(), self.re.cos() * self.im.sinh())
    }

    /// Returns the cosine of the complex number.
    pub fn cos(self) -> Self {
        Self::new(self.re.cos() * self.im.cosh(), -self.re.sin() * self.im.sinh())
    }

    /// Returns the tangent of the complex number.
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Self) -> Self {
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        let num = self * rhs.conj();
        Self::new(num.re / denom, num.im / denom)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}
