//! Exponential and logarithm kernels.
//!
//! # Algorithms
//!
//! - **exp**: range reduction `a = k·ln2 + r` with `k = ⌊a·log₂e⌋`, so
//!   `r ∈ [0, ln2)`. The power series `Σ rⁿ/n!` is summed for at most 13
//!   terms, stopping early once a term is below `10⁻¹⁵` of the running sum,
//!   and the result is rescaled by `2ᵏ`.
//! - **ln**: the argument is halved or doubled into `[1, 2)` while counting
//!   the power of two, then folded once more into `(√2/2, √2]` so that
//!   `x = a − 1` satisfies `|x| < 0.42`. The alternating series
//!   `ln(1+x) = x − x²/2 + x³/3 − …` is summed until a term falls below
//!   `10⁻¹⁵`, and `exponent · ln2` is added back.
//!
//! All other logarithms are ratios of [`ln`].

use crate::arith::{floor, pow, require_domain, require_finite};
use crate::consts::{LN10, LN2, LOG2E};

/// Maximum number of series terms (including the constant `1`) for [`exp`].
const EXP_MAX_TERMS: u32 = 13;

/// Relative cut-off for [`exp`] series terms.
const EXP_TERM_EPS: f64 = 1e-15;

/// Absolute cut-off for [`ln`] series terms.
const LN_TERM_EPS: f64 = 1e-15;

/// √2, upper bound of the reduced [`ln`] argument.
const SQRT_2: f64 = 1.4142135623730951;

/// Above this, `exp` overflows `f64`.
const EXP_OVERFLOW: f64 = 709.782712893384;

/// Below this, `exp` underflows to zero.
const EXP_UNDERFLOW: f64 = -745.1332191019412;

/// `2^-MIN_NORMAL_EXP` is the smallest positive normal `f64`.
const MIN_NORMAL_EXP: u32 = 1022;

/// Natural exponential `eᵃ`.
///
/// Returns `+∞` above ≈709.78 and `0.0` below ≈−745.13, the points where
/// the result leaves the `f64` range.
///
/// # Panics
/// If `a` is NaN or infinite.
///
/// # Examples
/// ```
/// use u_mathlib::{exp, E};
/// assert_eq!(exp(0.0), 1.0);
/// assert!((exp(1.0) - E).abs() < 1e-14);
/// ```
pub fn exp(a: f64) -> f64 {
    require_finite("exp", a);

    if a == 0.0 {
        return 1.0;
    }
    if a > EXP_OVERFLOW {
        return f64::INFINITY;
    }
    if a < EXP_UNDERFLOW {
        return 0.0;
    }

    let k = floor(a * LOG2E);
    let r = a - k as f64 * LN2;

    let mut result = 1.0 + r;
    let mut term = r;
    for i in 2..EXP_MAX_TERMS {
        term *= r / f64::from(i);
        result += term;
        if term < EXP_TERM_EPS * result {
            break;
        }
    }

    // |k| <= 1075 inside the overflow/underflow limits.
    let power = k.unsigned_abs() as u32;
    if k >= 0 {
        return result * pow(2.0, power);
    }
    if power > MIN_NORMAL_EXP {
        // 2^-1075 itself rounds to zero; land on the normal range first so
        // the subnormal result is rounded once.
        return result * pow(0.5, MIN_NORMAL_EXP) * pow(0.5, power - MIN_NORMAL_EXP);
    }
    result * pow(0.5, power)
}

/// Natural logarithm.
///
/// # Panics
/// If `a` is not finite or `a <= 0`.
///
/// # Examples
/// ```
/// use u_mathlib::{ln, E};
/// assert_eq!(ln(1.0), 0.0);
/// assert!((ln(E) - 1.0).abs() < 1e-15);
/// ```
pub fn ln(a: f64) -> f64 {
    require_finite("ln", a);
    require_domain(a > 0.0, "ln", a, "(0, inf)");

    if a == 1.0 {
        return 0.0;
    }

    let mut a = a;
    let mut exponent: i32 = 0;
    while a >= 2.0 {
        a /= 2.0;
        exponent += 1;
    }
    while a < 1.0 {
        a *= 2.0;
        exponent -= 1;
    }
    if a > SQRT_2 {
        a /= 2.0;
        exponent += 1;
    }

    let x = a - 1.0;
    let mut term = x;
    let mut sum = term;
    let mut i = 1.0;
    while term.abs() > LN_TERM_EPS {
        i += 1.0;
        term *= -x * (i - 1.0) / i;
        sum += term;
    }

    sum + f64::from(exponent) * LN2
}

/// Logarithm of `a` in an arbitrary `base`, `ln(a) / ln(base)`.
///
/// `base == 1` divides by zero and yields ±∞ (or NaN for `a == 1`).
///
/// # Panics
/// If either argument is not finite or not positive.
pub fn log(a: f64, base: f64) -> f64 {
    require_finite("log", a);
    require_finite("log", base);
    ln(a) / ln(base)
}

/// Base-2 logarithm.
pub fn log2(a: f64) -> f64 {
    require_finite("log2", a);
    ln(a) / LN2
}

/// Base-10 logarithm.
pub fn log10(a: f64) -> f64 {
    require_finite("log10", a);
    ln(a) / LN10
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::E;

    fn rel_err(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    // --- exp ---

    #[test]
    fn test_exp_zero() {
        assert_eq!(exp(0.0), 1.0);
    }

    #[test]
    fn test_exp_known_values() {
        assert!(rel_err(exp(1.0), E) < 1e-14);
        assert!(rel_err(exp(-1.0), 1.0 / E) < 1e-14);
        assert!(rel_err(exp(LN2), 2.0) < 1e-14);
        assert!(rel_err(exp(10.0), 22026.465794806718) < 1e-13);
        assert!(rel_err(exp(-10.0), 4.5399929762484854e-5) < 1e-13);
    }

    #[test]
    fn test_exp_matches_std() {
        for i in -200..=200 {
            let a = i as f64 * 0.173;
            let got = exp(a);
            let want = a.exp();
            assert!(
                rel_err(got, want) < 2e-12,
                "exp({a}) = {got}, expected {want}"
            );
        }
    }

    #[test]
    fn test_exp_range_limits() {
        assert_eq!(exp(710.0), f64::INFINITY);
        assert_eq!(exp(-800.0), 0.0);
        assert!(exp(709.0).is_finite());
        assert!(exp(-740.0) > 0.0);
    }

    #[test]
    fn test_exp_subnormal_tail() {
        for &a in &[-744.4, -744.5, -744.9, -745.0, -745.1] {
            assert_eq!(exp(a), a.exp(), "exp({a})");
            assert!(exp(a) > 0.0, "exp({a}) underflowed early");
        }
        assert!(rel_err(exp(-720.0), (-720.0_f64).exp()) < 1e-9);
    }

    #[test]
    #[should_panic(expected = "exp: argument must be finite")]
    fn test_exp_infinity_panics() {
        exp(f64::INFINITY);
    }

    // --- ln ---

    #[test]
    fn test_ln_one() {
        assert_eq!(ln(1.0), 0.0);
    }

    #[test]
    fn test_ln_known_values() {
        assert!((ln(2.0) - LN2).abs() < 1e-15);
        assert!((ln(10.0) - LN10).abs() < 1e-14);
        assert!((ln(E) - 1.0).abs() < 1e-15);
        assert!((ln(0.5) + LN2).abs() < 1e-15);
    }

    #[test]
    fn test_ln_near_two() {
        // Arguments just below 2 sit at the slow end of the raw series.
        for &a in &[1.9999999, 1.99999999999, 1.41421, 1.41422] {
            assert!((ln(a) - a.ln()).abs() < 1e-14, "ln({a})");
        }
    }

    #[test]
    fn test_ln_extremes() {
        assert!(rel_err(ln(f64::MAX), f64::MAX.ln()) < 1e-14);
        assert!(rel_err(ln(1e-300), (1e-300_f64).ln()) < 1e-14);
        assert!(rel_err(ln(5e-324), (5e-324_f64).ln()) < 1e-14);
    }

    #[test]
    #[should_panic(expected = "ln: argument must be in (0, inf)")]
    fn test_ln_zero_panics() {
        ln(0.0);
    }

    #[test]
    #[should_panic(expected = "ln: argument must be in (0, inf)")]
    fn test_ln_negative_panics() {
        ln(-1.0);
    }

    // --- log family ---

    #[test]
    fn test_log_bases() {
        assert!((log2(8.0) - 3.0).abs() < 1e-14);
        assert!((log10(1000.0) - 3.0).abs() < 1e-14);
        assert!((log(81.0, 3.0) - 4.0).abs() < 1e-14);
        assert!((log(0.125, 2.0) + 3.0).abs() < 1e-14);
    }

    #[test]
    fn test_log_base_one_is_unguarded() {
        assert_eq!(log(5.0, 1.0), f64::INFINITY);
    }

    #[test]
    #[should_panic(expected = "log: argument must be finite")]
    fn test_log_nan_base_panics() {
        log(2.0, f64::NAN);
    }
}
