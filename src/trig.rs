//! Trigonometric kernel.
//!
//! [`sin`] and [`cos`] fold the argument into `[-π, π]` and evaluate a
//! fixed 8-term Maclaurin series with a running term recurrence. Every
//! other function in this module is a composition of those two, plus the
//! polynomial [`asin`] and the rational [`atan`] approximations.
//!
//! # Accuracy
//!
//! The series is truncated after the x¹⁵ (sine) and x¹⁴ (cosine) terms, so
//! the absolute error peaks at the ends of the folded interval: about
//! 8 × 10⁻⁷ for `sin` and 4 × 10⁻⁶ for `cos` near ±π.
//!
//! # Division by zero
//!
//! [`tan`], [`sec`], [`csc`] and [`cot`] divide without checking the
//! denominator. At the poles they return whatever IEEE-754 division gives
//! (±∞ or NaN).

use crate::arith::{abs, pow, require_domain, require_finite};
use crate::consts::{PI, TAU};

/// Number of Maclaurin terms used by [`sin`] and [`cos`].
const SERIES_TERMS: u32 = 8;

/// Folds `a` into `[-π, π]` by adding or subtracting whole turns.
///
/// Small arguments are adjusted one 2π step at a time. Larger ones first
/// go through a binary long division by `2π·2ʲ`; each subtraction there is
/// between values within a factor of two of each other and therefore
/// exact, so the loop terminates for every finite input. The only error is
/// the representation error of `2π` itself, which grows with the number
/// of turns removed.
fn fold_to_pi(a: f64) -> f64 {
    let mut a = a;
    if abs(a) > TAU {
        let mut step = TAU;
        while step * 2.0 <= abs(a) {
            step *= 2.0;
        }
        while step >= TAU {
            if a >= step {
                a -= step;
            } else if a <= -step {
                a += step;
            }
            step /= 2.0;
        }
    }
    while a > PI {
        a -= TAU;
    }
    while a < -PI {
        a += TAU;
    }
    a
}

/// Sine of `a` radians.
///
/// # Panics
/// If `a` is NaN or infinite.
///
/// # Examples
/// ```
/// use u_mathlib::{sin, PI};
/// assert_eq!(sin(0.0), 0.0);
/// assert!((sin(PI / 6.0) - 0.5).abs() < 1e-9);
/// ```
pub fn sin(a: f64) -> f64 {
    require_finite("sin", a);
    let a = fold_to_pi(a);

    let mut term = a;
    let mut result = a;
    for i in 1..SERIES_TERMS {
        let i = f64::from(i);
        term *= -a * a / ((2.0 * i) * (2.0 * i + 1.0));
        result += term;
    }
    result
}

/// Cosine of `a` radians.
///
/// # Panics
/// If `a` is NaN or infinite.
pub fn cos(a: f64) -> f64 {
    require_finite("cos", a);
    let a = fold_to_pi(a);

    let mut term = 1.0;
    let mut result = 1.0;
    for i in 1..SERIES_TERMS {
        let i = f64::from(i);
        term *= -a * a / ((2.0 * i - 1.0) * (2.0 * i));
        result += term;
    }
    result
}

/// Tangent, `sin(a) / cos(a)`.
pub fn tan(a: f64) -> f64 {
    require_finite("tan", a);
    sin(a) / cos(a)
}

/// Secant, `1 / cos(a)`.
pub fn sec(a: f64) -> f64 {
    require_finite("sec", a);
    1.0 / cos(a)
}

/// Cosecant, `1 / sin(a)`. `csc(0.0)` is `+∞`.
pub fn csc(a: f64) -> f64 {
    require_finite("csc", a);
    1.0 / sin(a)
}

/// Cotangent, `cos(a) / sin(a)`. `cot(0.0)` is `+∞`.
pub fn cot(a: f64) -> f64 {
    require_finite("cot", a);
    cos(a) / sin(a)
}

/// Arcsine by a truncated odd polynomial.
///
/// # Algorithm
/// The first five terms of the arcsine Maclaurin series in Horner form:
/// ```text
/// asin(a) ≈ a + a·a²·(1/6 + a²·(3/40 + a²·(5/112 + a²·35/1152)))
/// ```
/// The polynomial is not extended, so the error grows toward the ends of
/// the domain (about 0.07 at `a = ±1`, where the true value is ±π/2).
///
/// # Panics
/// If `a` is outside `[-1, 1]`.
pub fn asin(a: f64) -> f64 {
    require_finite("asin", a);
    require_domain((-1.0..=1.0).contains(&a), "asin", a, "[-1, 1]");

    let a2 = pow(a, 2);
    a + a * a2 * (1.0 / 6.0 + a2 * (3.0 / 40.0 + a2 * (5.0 / 112.0 + a2 * 35.0 / 1152.0)))
}

/// Arccosine, `π/2 − asin(a)`.
///
/// # Panics
/// If `a` is outside `[-1, 1]`.
pub fn acos(a: f64) -> f64 {
    require_finite("acos", a);
    require_domain((-1.0..=1.0).contains(&a), "acos", a, "[-1, 1]");
    PI / 2.0 - asin(a)
}

/// Crude rational stand-in for the arctangent: `a / (1.28·a²)`.
///
/// This is **not** an arctangent approximation outside a narrow band: it
/// behaves like `0.78/a`, diverges at zero (`atan(0.0)` is NaN) and decays
/// for large `|a|` where the arctangent tends to ±π/2. It is kept as-is
/// because [`atan2`] is defined on top of it; callers needing a faithful
/// arctangent should not rely on it.
pub fn atan(a: f64) -> f64 {
    require_finite("atan", a);
    a / (1.28 * pow(a, 2))
}

/// Two-argument arctangent of `a / b` with quadrant resolution.
///
/// - `b == 0`: `π/2` for `a > 0`, `−π/2` for `a < 0`, `0` for `a == 0`.
/// - `b < 0`: `atan(a/b) + π` when `a >= 0`, `atan(a/b) − π` otherwise.
/// - `b > 0`: `atan(a/b)`.
///
/// Inherits the fidelity of [`atan`].
pub fn atan2(a: f64, b: f64) -> f64 {
    require_finite("atan2", a);
    require_finite("atan2", b);

    if b == 0.0 {
        if a > 0.0 {
            return PI / 2.0;
        }
        if a < 0.0 {
            return -PI / 2.0;
        }
        return 0.0;
    }

    let result = atan(a / b);
    if b < 0.0 {
        if a >= 0.0 {
            return result + PI;
        }
        return result - PI;
    }
    result
}
