//! Core arithmetic, float classification and argument preconditions.
//!
//! Everything here is a direct integer or float primitive: no iterative
//! approximation is involved. The classification functions
//! ([`is_nan`], [`is_infinite`], [`is_finite`]) are built from IEEE-754
//! self-comparison identities and define what "finite" means for every
//! precondition in the crate.
//!
//! # Panics
//!
//! Every function that takes a float panics if that float is NaN or
//! infinite. Domain violations (`b <= 0` for [`rem`]/[`fdiv`], a result
//! that does not fit in `i64`) panic as well.

use crate::consts::PI;

/// Exclusive upper bound on the magnitude of a float that can be
/// converted to `i64` (2⁶³).
pub(crate) const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Largest argument for which [`fact`] fits in a `u64`.
const FACT_MAX: i64 = 20;

// ============================================================================
// Preconditions
// ============================================================================

/// Panics unless `a` is finite.
#[track_caller]
pub(crate) fn require_finite(op: &str, a: f64) {
    assert!(is_finite(a), "{op}: argument must be finite, got {a}");
}

/// Panics with `{op}: argument must be in {domain}, got {a}` unless `ok`.
#[track_caller]
pub(crate) fn require_domain(ok: bool, op: &str, a: f64, domain: &str) {
    assert!(ok, "{op}: argument must be in {domain}, got {a}");
}

/// Panics unless `a` fits in an `i64` after truncation.
#[track_caller]
fn require_i64_range(op: &str, a: f64) {
    require_domain(
        (-I64_LIMIT..I64_LIMIT).contains(&a),
        op,
        a,
        "[-2^63, 2^63)",
    );
}

// ============================================================================
// Classification
// ============================================================================

/// Returns `true` if `a` is NaN, using the `a != a` identity.
#[allow(clippy::eq_op)]
pub fn is_nan(a: f64) -> bool {
    a != a
}

/// Returns `true` if `a` is not a finite number, using the self-division
/// identity `a / a != a / a`.
///
/// Any finite non-zero `a` divides itself to exactly `1.0`; ±∞ and NaN
/// both divide themselves to NaN. Zero is finite but `0 / 0` is NaN, so
/// zero is tested before the division. NaN is reported as infinite here;
/// use [`is_nan`] to tell the two apart.
///
/// # Examples
/// ```
/// use u_mathlib::is_infinite;
/// assert!(is_infinite(f64::INFINITY));
/// assert!(!is_infinite(0.0));
/// assert!(!is_infinite(-3.5));
/// ```
#[allow(clippy::eq_op)]
pub fn is_infinite(a: f64) -> bool {
    a != 0.0 && a / a != a / a
}

/// Returns `true` if `a` is neither infinite nor NaN.
pub fn is_finite(a: f64) -> bool {
    !is_infinite(a) && !is_nan(a)
}

// ============================================================================
// Angle conversion
// ============================================================================

/// Converts degrees to radians.
pub fn to_radian(deg: f64) -> f64 {
    require_finite("to_radian", deg);
    deg * (PI / 180.0)
}

/// Converts radians to degrees.
pub fn to_degree(rad: f64) -> f64 {
    require_finite("to_degree", rad);
    rad * (180.0 / PI)
}

// ============================================================================
// Rounding
// ============================================================================

/// Largest integer less than or equal to `a`.
///
/// # Panics
/// If `a` is not finite or lies outside the `i64` range.
///
/// # Examples
/// ```
/// use u_mathlib::floor;
/// assert_eq!(floor(2.7), 2);
/// assert_eq!(floor(-2.3), -3);
/// ```
pub fn floor(a: f64) -> i64 {
    require_finite("floor", a);
    require_i64_range("floor", a);
    let t = a as i64;
    if (t as f64) > a {
        t - 1
    } else {
        t
    }
}

/// Smallest integer greater than or equal to `a`.
///
/// # Panics
/// If `a` is not finite or lies outside the `i64` range.
pub fn ceil(a: f64) -> i64 {
    require_finite("ceil", a);
    require_i64_range("ceil", a);
    let t = a as i64;
    if a > t as f64 {
        t + 1
    } else {
        t
    }
}

/// Nearest integer to `a`; halves round toward +∞.
///
/// # Examples
/// ```
/// use u_mathlib::round;
/// assert_eq!(round(2.5), 3);
/// assert_eq!(round(2.4), 2);
/// assert_eq!(round(-2.5), -2);
/// assert_eq!(round(-2.6), -3);
/// ```
pub fn round(a: f64) -> i64 {
    require_finite("round", a);
    require_i64_range("round", a + 0.5);
    floor(a + 0.5)
}

/// Absolute value.
pub fn abs(a: f64) -> f64 {
    require_finite("abs", a);
    if a < 0.0 {
        -a
    } else {
        a
    }
}

// ============================================================================
// Comparison
// ============================================================================

/// Smaller of `a` and `b`; `b` when they compare equal.
pub fn min(a: f64, b: f64) -> f64 {
    require_finite("min", a);
    require_finite("min", b);
    if a < b {
        a
    } else {
        b
    }
}

/// Larger of `a` and `b`; `b` when they compare equal.
pub fn max(a: f64, b: f64) -> f64 {
    require_finite("max", a);
    require_finite("max", b);
    if a > b {
        a
    } else {
        b
    }
}

/// Restricts `value` to `[min_val, max_val]`.
///
/// The bounds are not checked against each other; with `min_val > max_val`
/// the lower bound wins for values below it and the upper bound otherwise.
pub fn clamp(value: f64, min_val: f64, max_val: f64) -> f64 {
    require_finite("clamp", value);
    require_finite("clamp", min_val);
    require_finite("clamp", max_val);
    if value < min_val {
        return min_val;
    }
    if value > max_val {
        return max_val;
    }
    value
}

// ============================================================================
// Integer division
// ============================================================================

/// Remainder of `a / b` with the sign of the divisor, i.e. in `[0, b)`.
///
/// # Panics
/// If `b <= 0`.
///
/// # Examples
/// ```
/// use u_mathlib::rem;
/// assert_eq!(rem(7, 3), 1);
/// assert_eq!(rem(-7, 3), 2);
/// ```
pub fn rem(a: i64, b: i64) -> i64 {
    assert!(b > 0, "rem: divisor must be positive, got {b}");
    a.rem_euclid(b)
}

/// Floored quotient `floor(a / b)`.
///
/// # Panics
/// If either argument is not finite, or `b <= 0`.
pub fn fdiv(a: f64, b: f64) -> i64 {
    require_finite("fdiv", a);
    require_finite("fdiv", b);
    require_domain(b > 0.0, "fdiv", b, "(0, inf)");
    floor(a / b)
}

// ============================================================================
// Powers and number theory
// ============================================================================

/// `base` raised to a non-negative integer `power` by repeated
/// multiplication.
///
/// `power == 0` yields `1.0` for every base, including `0⁰`.
///
/// # Examples
/// ```
/// use u_mathlib::pow;
/// assert_eq!(pow(2.0, 10), 1024.0);
/// assert_eq!(pow(0.0, 0), 1.0);
/// ```
pub fn pow(base: f64, power: u32) -> f64 {
    require_finite("pow", base);
    if power == 0 {
        return 1.0;
    }
    let mut product = base;
    for _ in 1..power {
        product *= base;
    }
    product
}

/// Greatest common divisor by Euclid's algorithm on absolute values.
///
/// `gcd(0, 0) == 0`, and `gcd(a, 0) == |a|`.
///
/// # Panics
/// If the result is `2⁶³`, which only happens for `gcd(i64::MIN, 0)` and
/// `gcd(i64::MIN, i64::MIN)`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    i64::try_from(a).unwrap_or_else(|_| panic!("gcd: result {a} overflows i64"))
}

/// Least common multiple, always non-negative.
///
/// Returns `0` when both arguments are zero.
///
/// # Panics
/// If the result overflows `i64`.
///
/// # Examples
/// ```
/// use u_mathlib::lcm;
/// assert_eq!(lcm(4, 6), 12);
/// assert_eq!(lcm(-4, 6), 12);
/// ```
pub fn lcm(a: i64, b: i64) -> i64 {
    let g = gcd(a, b);
    if g == 0 {
        return 0;
    }
    (a / g)
        .checked_mul(b)
        .and_then(i64::checked_abs)
        .unwrap_or_else(|| panic!("lcm: lcm({a}, {b}) overflows i64"))
}

/// Factorial `a!` as the iterative product `2 · 3 · … · a`.
///
/// Every `a <= 1` (negative included) yields `1`.
///
/// # Panics
/// If `a > 20`, where the product no longer fits in `u64`.
pub fn fact(a: i64) -> u64 {
    assert!(a <= FACT_MAX, "fact: argument must be at most {FACT_MAX}, got {a}");
    (2..=a.max(1) as u64).product()
}

/// Primality by trial division.
///
/// # Examples
/// ```
/// use u_mathlib::is_prime;
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91));
/// ```
pub fn is_prime(a: i64) -> bool {
    if a < 2 {
        return false;
    }
    if a > 2 && a % 2 == 0 {
        return false;
    }
    let mut i: i64 = 3;
    while i <= a / i {
        if a % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}
