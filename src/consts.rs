//! Mathematical constants as double-precision literals.
//!
//! These are spelled out rather than taken from `std::f64::consts` so the
//! whole crate evaluates against one fixed table.

#![allow(clippy::excessive_precision, clippy::approx_constant)]

/// π
pub const PI: f64 = 3.1415926535897932;

/// τ = 2π
pub const TAU: f64 = 6.2831853071795864;

/// Euler's number e
pub const E: f64 = 2.7182818284590452;

/// Golden ratio φ = (1 + √5) / 2
pub const PHI: f64 = 1.6180339887498948;

/// ln 2
pub const LN2: f64 = 0.6931471805599453;

/// ln 10
pub const LN10: f64 = 2.3025850929940457;

/// log₂ e
pub const LOG2E: f64 = 1.4426950408889634;

/// log₁₀ e
pub const LOG10E: f64 = 0.4342944819032518;

/// Euler–Mascheroni constant γ
pub const EULER: f64 = 0.5772156649015329;

/// Catalan's constant G
pub const CATALAN: f64 = 0.9159655941772190;
