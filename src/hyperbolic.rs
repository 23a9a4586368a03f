//! Hyperbolic functions and their inverses.
//!
//! The forward functions are closed forms over [`exp`]; the inverses are
//! closed forms over [`ln`] and [`sqrt`]. Where a closed form is exact at
//! zero (`sinh`, `cosh`, `tanh`, `sech`) the zero case short-circuits.
//! `csch` and `coth` have poles at zero and return ±∞ there.

use crate::arith::{abs, require_domain, require_finite};
use crate::exp::{exp, ln};
use crate::roots::sqrt;

/// Hyperbolic sine, `(eᵃ − e⁻ᵃ) / 2`.
///
/// # Examples
/// ```
/// use u_mathlib::sinh;
/// assert_eq!(sinh(0.0), 0.0);
/// assert!((sinh(1.0) - 1.1752011936438014).abs() < 1e-12);
/// ```
pub fn sinh(a: f64) -> f64 {
    require_finite("sinh", a);
    if a == 0.0 {
        return 0.0;
    }
    let ea = exp(a);
    (ea - 1.0 / ea) / 2.0
}

/// Hyperbolic cosine, `(eᵃ + e⁻ᵃ) / 2`.
pub fn cosh(a: f64) -> f64 {
    require_finite("cosh", a);
    if a == 0.0 {
        return 1.0;
    }
    let ea = exp(a);
    (ea + 1.0 / ea) / 2.0
}

/// Hyperbolic tangent.
///
/// Evaluated as `±(1 − e⁻²|ᵃ|) / (1 + e⁻²|ᵃ|)` so that large arguments
/// saturate at ±1 instead of forming `∞/∞`.
pub fn tanh(a: f64) -> f64 {
    require_finite("tanh", a);
    if a == 0.0 {
        return 0.0;
    }
    let e = exp(-2.0 * abs(a));
    let t = (1.0 - e) / (1.0 + e);
    if a < 0.0 {
        -t
    } else {
        t
    }
}

/// Hyperbolic secant, `2 / (eᵃ + e⁻ᵃ)`.
pub fn sech(a: f64) -> f64 {
    require_finite("sech", a);
    if a == 0.0 {
        return 1.0;
    }
    let ea = exp(a);
    2.0 / (ea + 1.0 / ea)
}

/// Hyperbolic cosecant, `2 / (eᵃ − e⁻ᵃ)`. `csch(0.0)` is `+∞`.
pub fn csch(a: f64) -> f64 {
    require_finite("csch", a);
    let ea = exp(a);
    2.0 / (ea - 1.0 / ea)
}

/// Hyperbolic cotangent.
///
/// Evaluated as `±(1 + e⁻²|ᵃ|) / (1 − e⁻²|ᵃ|)`; `coth(0.0)` is `+∞`.
pub fn coth(a: f64) -> f64 {
    require_finite("coth", a);
    let e = exp(-2.0 * abs(a));
    let t = (1.0 + e) / (1.0 - e);
    if a < 0.0 {
        -t
    } else {
        t
    }
}

/// Inverse hyperbolic sine, `ln(a + √(a² + 1))`.
///
/// Negative arguments use the odd symmetry `asinh(−a) = −asinh(a)`, which
/// avoids the cancellation in `a + √(a² + 1)` for large negative `a`.
///
/// # Panics
/// If `a` is not finite or `a²` overflows.
pub fn asinh(a: f64) -> f64 {
    require_finite("asinh", a);
    let m = abs(a);
    let r = ln(m + sqrt(m * m + 1.0));
    if a < 0.0 {
        -r
    } else {
        r
    }
}

/// Inverse hyperbolic cosine, `ln(a + √(a² − 1))`.
///
/// # Panics
/// If `a < 1`, `a` is not finite, or `a²` overflows.
pub fn acosh(a: f64) -> f64 {
    require_finite("acosh", a);
    require_domain(a >= 1.0, "acosh", a, "[1, inf)");
    ln(a + sqrt(a * a - 1.0))
}

/// Inverse hyperbolic tangent, `½·ln((1 + a) / (1 − a))`.
///
/// # Panics
/// If `a` is outside the open interval `(-1, 1)`.
pub fn atanh(a: f64) -> f64 {
    require_finite("atanh", a);
    require_domain(a > -1.0 && a < 1.0, "atanh", a, "(-1, 1)");
    0.5 * ln((1.0 + a) / (1.0 - a))
}
