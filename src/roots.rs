//! Square roots: Newton–Raphson [`sqrt`], its reciprocal [`isqrt`], and
//! the bit-hack fast inverse square root [`qisqrt`].
//!
//! # Algorithm
//!
//! [`sqrt`] runs a fixed number of Newton steps `y ← (y + a/y) / 2` with no
//! convergence test. The starting point is read off the IEEE-754 exponent
//! of `a` (halving the biased exponent gives a guess within a few percent
//! of the root), so the fixed step count is enough across the whole `f64`
//! range. Newton's method for square roots converges quadratically once
//! the guess is that close.
//!
//! [`qisqrt`] is the classic magic-constant reciprocal square root on the
//! 32-bit pattern of the input followed by two Newton refinements. It is
//! fast and deliberately low-precision (relative error around 5 × 10⁻⁶);
//! use [`isqrt`] when accuracy matters.

use crate::arith::{require_domain, require_finite};
use crate::bits::{to_bits, to_float};

/// Newton iterations performed by [`sqrt`].
const NEWTON_STEPS: usize = 17;

/// Magic constant of the fast inverse square root.
const QISQRT_MAGIC: i32 = 0x5f37_59df;

/// Smallest positive normal `f64`.
const MIN_NORMAL: f64 = 2.2250738585072014e-308;

/// 2¹⁰⁴, lifts subnormals into the normal range.
const TWO_POW_104: f64 = 20_282_409_603_651_670_423_947_251_286_016.0;

/// 2⁵², the square root of [`TWO_POW_104`].
const TWO_POW_52: f64 = 4_503_599_627_370_496.0;

/// Square root by Newton–Raphson iteration.
///
/// # Panics
/// If `a` is negative, NaN or infinite.
///
/// # Examples
/// ```
/// use u_mathlib::sqrt;
/// assert_eq!(sqrt(0.0), 0.0);
/// assert!((sqrt(2.0) - std::f64::consts::SQRT_2).abs() < 1e-15);
/// assert!((sqrt(1e12) - 1e6).abs() < 1e-6);
/// ```
pub fn sqrt(a: f64) -> f64 {
    require_finite("sqrt", a);
    require_domain(a >= 0.0, "sqrt", a, "[0, inf)");

    if a == 0.0 {
        return 0.0;
    }
    if a < MIN_NORMAL {
        // Scaling by an even power of two is exact and keeps the exponent
        // seed meaningful.
        return sqrt(a * TWO_POW_104) / TWO_POW_52;
    }

    let mut root = exponent_seed(a);
    for _ in 0..NEWTON_STEPS {
        root = (root + a / root) / 2.0;
    }
    root
}

/// Initial guess for `√a`: halves the biased exponent of a positive
/// normal `a`, carrying the low exponent bit into the mantissa.
fn exponent_seed(a: f64) -> f64 {
    const HALF_BIAS: u64 = 0x1ff8_0000_0000_0000;
    f64::from_bits((a.to_bits() >> 1) + HALF_BIAS)
}

/// Reciprocal square root `1 / sqrt(a)`.
///
/// `isqrt(0.0)` is `+∞`; the division is not guarded.
///
/// # Panics
/// If `a` is negative, NaN or infinite.
pub fn isqrt(a: f64) -> f64 {
    require_finite("isqrt", a);
    1.0 / sqrt(a)
}

/// Fast approximate reciprocal square root.
///
/// # Algorithm
/// 1. Narrow `a` to `f32` and reinterpret its bits as `i`.
/// 2. `i ← 0x5f3759df − (i >> 1)`; reinterpret back as the guess `y`.
/// 3. Two Newton steps `y ← y · (1.5 − ½·a·y²)`.
///
/// # Accuracy
/// Relative error below 10⁻⁵; not a substitute for [`isqrt`]. The magic
/// constant only yields a usable seed for normal `f32` patterns, so the
/// domain stops at `f32::MIN_POSITIVE`.
///
/// # Panics
/// If `a` is not in `[f32::MIN_POSITIVE, f32::MAX]`.
///
/// # Examples
/// ```
/// use u_mathlib::qisqrt;
/// assert!((qisqrt(4.0) - 0.5).abs() < 1e-4);
/// ```
pub fn qisqrt(a: f64) -> f64 {
    require_finite("qisqrt", a);
    require_domain(
        (f64::from(f32::MIN_POSITIVE)..=f64::from(f32::MAX)).contains(&a),
        "qisqrt",
        a,
        "[f32::MIN_POSITIVE, f32::MAX]",
    );

    let half = a * 0.5;
    let i = QISQRT_MAGIC - (to_bits(a as f32) >> 1);
    let mut y = f64::from(to_float(i));
    y *= 1.5 - half * y * y;
    y *= 1.5 - half * y * y;
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_err(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    // --- sqrt ---

    #[test]
    fn test_sqrt_zero() {
        assert_eq!(sqrt(0.0), 0.0);
    }

    #[test]
    fn test_sqrt_perfect_squares() {
        for n in 1..=100 {
            let x = (n * n) as f64;
            assert!(
                (sqrt(x) - n as f64).abs() < 1e-12,
                "sqrt({x}) = {}, expected {n}",
                sqrt(x)
            );
        }
    }

    #[test]
    fn test_sqrt_wide_range() {
        for &x in &[1e-300, 1e-12, 0.25, 2.0, 1e12, 1e300, f64::MAX] {
            let r = sqrt(x);
            assert!(rel_err(r, x.sqrt()) < 1e-15, "sqrt({x}) = {r}");
        }
    }

    #[test]
    fn test_sqrt_subnormal() {
        let x = 5e-324;
        assert!(rel_err(sqrt(x), x.sqrt()) < 1e-12);
        let y = 1e-310;
        assert!(rel_err(sqrt(y), y.sqrt()) < 1e-12);
    }

    #[test]
    #[should_panic(expected = "sqrt: argument must be in [0, inf)")]
    fn test_sqrt_negative_panics() {
        sqrt(-1.0);
    }

    #[test]
    #[should_panic(expected = "sqrt: argument must be finite")]
    fn test_sqrt_nan_panics() {
        sqrt(f64::NAN);
    }

    // --- isqrt ---

    #[test]
    fn test_isqrt() {
        assert!((isqrt(4.0) - 0.5).abs() < 1e-15);
        assert!(rel_err(isqrt(2.0), std::f64::consts::FRAC_1_SQRT_2) < 1e-15);
        assert_eq!(isqrt(0.0), f64::INFINITY);
    }

    // --- qisqrt ---

    #[test]
    fn test_qisqrt_close() {
        for &x in &[1e-6, 0.01, 0.5, 1.0, 2.0, 10.0, 12345.0, 1e20] {
            let q = qisqrt(x);
            let exact = 1.0 / x.sqrt();
            assert!(rel_err(q, exact) < 1e-3, "qisqrt({x}) = {q}, exact {exact}");
        }
    }

    #[test]
    fn test_qisqrt_lower_fidelity_than_isqrt() {
        let xs: Vec<f64> = (1..200).map(|i| i as f64 * 0.37).collect();
        let worst_fast = xs
            .iter()
            .map(|&x| rel_err(qisqrt(x), 1.0 / x.sqrt()))
            .fold(0.0, f64::max);
        let worst_exact = xs
            .iter()
            .map(|&x| rel_err(isqrt(x), 1.0 / x.sqrt()))
            .fold(0.0, f64::max);
        assert!(worst_fast > 1e-9, "qisqrt unexpectedly exact: {worst_fast}");
        assert!(worst_exact < 1e-14, "isqrt error too large: {worst_exact}");
    }

    #[test]
    #[should_panic(expected = "qisqrt")]
    fn test_qisqrt_zero_panics() {
        qisqrt(0.0);
    }

    #[test]
    fn test_qisqrt_domain_edges() {
        for &x in &[f64::from(f32::MIN_POSITIVE), 1e-30, f64::from(f32::MAX)] {
            let q = qisqrt(x);
            let exact = 1.0 / x.sqrt();
            assert!(rel_err(q, exact) < 1e-3, "qisqrt({x}) = {q}, exact {exact}");
        }
    }

    #[test]
    #[should_panic(expected = "qisqrt: argument must be in [f32::MIN_POSITIVE, f32::MAX]")]
    fn test_qisqrt_below_normal_f32_panics() {
        qisqrt(1e-39);
    }

    #[test]
    #[should_panic(expected = "qisqrt")]
    fn test_qisqrt_beyond_f32_panics() {
        qisqrt(1e40);
    }
}
