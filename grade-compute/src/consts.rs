//! Mathematical constants bound in every evaluation context.

use crate::complex::Complex;

/// The circle constant, `π`.
pub const PI: f64 = std::f64::consts::PI;

/// Twice the circle constant, `τ = 2π`.
pub const TAU: f64 = std::f64::consts::TAU;

/// Euler's number, `e`.
pub const E: f64 = std::f64::consts::E;

/// The imaginary unit, `i`.
pub const I: Complex = Complex::I;
