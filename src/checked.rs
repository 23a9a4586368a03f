//! Fallible counterparts of the domain-restricted operations.
//!
//! The primary API treats a bad argument as a programming error and
//! panics. The functions here validate the same preconditions up front and
//! return a [`DomainError`] instead, so callers working with untrusted
//! input never reach the panic path. On success they delegate to the
//! primary implementation and return its result unchanged.
//!
//! Rejected inputs are reported through `log::debug!`.
//!
//! # Examples
//! ```
//! use u_mathlib::checked::{self, DomainError};
//!
//! assert_eq!(checked::sqrt(4.0), Ok(2.0));
//! assert!(matches!(checked::sqrt(-1.0), Err(DomainError::OutOfDomain { .. })));
//! assert_eq!(
//!     checked::mean(&[]),
//!     Err(DomainError::EmptyInput { op: "mean" })
//! );
//! ```

use crate::arith::{self, is_finite, I64_LIMIT};
use crate::exp as exp_kernel;
use crate::{hyperbolic, roots, stats, trig};

/// Error returned when an argument violates an operation's preconditions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// An argument or sample is NaN or infinite.
    #[error("{op}: argument must be finite, got {value}")]
    NonFinite { op: &'static str, value: f64 },

    /// An argument lies outside the operation's domain.
    #[error("{op}: argument must be in {domain}, got {value}")]
    OutOfDomain {
        op: &'static str,
        value: f64,
        domain: &'static str,
    },

    /// A statistics operation received no samples.
    #[error("{op}: input is empty")]
    EmptyInput { op: &'static str },

    /// A statistics operation received fewer samples than it needs.
    #[error("{op}: need at least {required} samples, got {actual}")]
    TooFewSamples {
        op: &'static str,
        required: usize,
        actual: usize,
    },

    /// The exact result does not fit in the return type.
    #[error("{op}: result overflows")]
    Overflow { op: &'static str },
}

fn reject<T>(err: DomainError) -> Result<T, DomainError> {
    log::debug!("rejected input: {err}");
    Err(err)
}

fn finite(op: &'static str, value: f64) -> Result<(), DomainError> {
    if is_finite(value) {
        Ok(())
    } else {
        reject(DomainError::NonFinite { op, value })
    }
}

fn within(
    op: &'static str,
    value: f64,
    ok: bool,
    domain: &'static str,
) -> Result<(), DomainError> {
    finite(op, value)?;
    if ok {
        Ok(())
    } else {
        reject(DomainError::OutOfDomain { op, value, domain })
    }
}

fn samples(op: &'static str, data: &[f64], required: usize) -> Result<(), DomainError> {
    if data.is_empty() {
        return reject(DomainError::EmptyInput { op });
    }
    if data.len() < required {
        return reject(DomainError::TooFewSamples {
            op,
            required,
            actual: data.len(),
        });
    }
    data.iter().try_for_each(|&x| finite(op, x))
}

// ============================================================================
// Roots
// ============================================================================

/// Fallible [`crate::sqrt`].
pub fn sqrt(a: f64) -> Result<f64, DomainError> {
    within("sqrt", a, a >= 0.0, "[0, inf)")?;
    Ok(roots::sqrt(a))
}

/// Fallible [`crate::isqrt`]. `isqrt(0.0)` is `Ok(+∞)`.
pub fn isqrt(a: f64) -> Result<f64, DomainError> {
    within("isqrt", a, a >= 0.0, "[0, inf)")?;
    Ok(roots::isqrt(a))
}

// ============================================================================
// Exponential / logarithm
// ============================================================================

/// Fallible [`crate::exp`].
pub fn exp(a: f64) -> Result<f64, DomainError> {
    finite("exp", a)?;
    Ok(exp_kernel::exp(a))
}

/// Fallible [`crate::ln`].
pub fn ln(a: f64) -> Result<f64, DomainError> {
    within("ln", a, a > 0.0, "(0, inf)")?;
    Ok(exp_kernel::ln(a))
}

/// Fallible [`crate::log`].
pub fn log(a: f64, base: f64) -> Result<f64, DomainError> {
    within("log", a, a > 0.0, "(0, inf)")?;
    within("log", base, base > 0.0, "(0, inf)")?;
    Ok(exp_kernel::log(a, base))
}

/// Fallible [`crate::log2`].
pub fn log2(a: f64) -> Result<f64, DomainError> {
    within("log2", a, a > 0.0, "(0, inf)")?;
    Ok(exp_kernel::log2(a))
}

/// Fallible [`crate::log10`].
pub fn log10(a: f64) -> Result<f64, DomainError> {
    within("log10", a, a > 0.0, "(0, inf)")?;
    Ok(exp_kernel::log10(a))
}

// ============================================================================
// Inverse trigonometric / hyperbolic
// ============================================================================

/// Fallible [`crate::asin`].
pub fn asin(a: f64) -> Result<f64, DomainError> {
    within("asin", a, (-1.0..=1.0).contains(&a), "[-1, 1]")?;
    Ok(trig::asin(a))
}

/// Fallible [`crate::acos`].
pub fn acos(a: f64) -> Result<f64, DomainError> {
    within("acos", a, (-1.0..=1.0).contains(&a), "[-1, 1]")?;
    Ok(trig::acos(a))
}

/// Fallible [`crate::acosh`].
pub fn acosh(a: f64) -> Result<f64, DomainError> {
    within("acosh", a, a >= 1.0, "[1, inf)")?;
    Ok(hyperbolic::acosh(a))
}

/// Fallible [`crate::atanh`].
pub fn atanh(a: f64) -> Result<f64, DomainError> {
    within("atanh", a, a > -1.0 && a < 1.0, "(-1, 1)")?;
    Ok(hyperbolic::atanh(a))
}

// ============================================================================
// Integer arithmetic
// ============================================================================

/// Fallible [`crate::fact`]; `Overflow` for `a > 20`.
pub fn fact(a: i64) -> Result<u64, DomainError> {
    if a > 20 {
        return reject(DomainError::Overflow { op: "fact" });
    }
    Ok(arith::fact(a))
}

/// Fallible [`crate::rem`].
pub fn rem(a: i64, b: i64) -> Result<i64, DomainError> {
    if b <= 0 {
        return reject(DomainError::OutOfDomain {
            op: "rem",
            value: b as f64,
            domain: "(0, inf)",
        });
    }
    Ok(arith::rem(a, b))
}

/// Fallible [`crate::fdiv`]; `Overflow` if the quotient leaves the `i64`
/// range.
pub fn fdiv(a: f64, b: f64) -> Result<i64, DomainError> {
    finite("fdiv", a)?;
    within("fdiv", b, b > 0.0, "(0, inf)")?;
    let q = a / b;
    if !(-I64_LIMIT..I64_LIMIT).contains(&q) {
        return reject(DomainError::Overflow { op: "fdiv" });
    }
    Ok(arith::fdiv(a, b))
}

// ============================================================================
// Statistics
// ============================================================================

/// Fallible [`crate::stats::sum`].
pub fn sum(data: &[f64]) -> Result<f64, DomainError> {
    samples("sum", data, 1)?;
    Ok(stats::sum(data))
}

/// Fallible [`crate::stats::mean`].
pub fn mean(data: &[f64]) -> Result<f64, DomainError> {
    samples("mean", data, 1)?;
    Ok(stats::mean(data))
}

/// Fallible [`crate::stats::median`]. `data` is sorted in place only when
/// the call succeeds.
pub fn median(data: &mut [f64]) -> Result<f64, DomainError> {
    samples("median", data, 1)?;
    Ok(stats::median(data))
}

/// Fallible [`crate::stats::mode`]. The input must still be sorted.
pub fn mode(data: &[f64]) -> Result<f64, DomainError> {
    samples("mode", data, 1)?;
    Ok(stats::mode(data))
}

/// Fallible [`crate::stats::stddev`].
pub fn stddev(data: &[f64]) -> Result<f64, DomainError> {
    samples("stddev", data, 2)?;
    Ok(stats::stddev(data))
}
