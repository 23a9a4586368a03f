//! # u-mathlib
//!
//! Scalar math built from first principles.
//!
//! This crate reimplements elementary arithmetic, transcendental functions
//! and a small descriptive-statistics kernel without calling into the
//! platform math library. Every transcendental is a range reduction
//! followed by a truncated series, and every square root is a Newton
//! iteration, so the numerical behaviour is the same on every target.
//!
//! ## Modules
//!
//! - [`consts`]: π, τ, e, φ, logarithm constants, Euler–Mascheroni, Catalan
//! - [`bits`]: 32-bit IEEE-754 bit reinterpretation
//! - [`arith`]: classification, rounding, comparison, `pow`, `gcd`/`lcm`, factorial
//! - [`roots`]: Newton square root and the fast inverse square root
//! - [`exp`]: range-reduced `exp` and `ln`, derived logarithms
//! - [`trig`]: range-reduced `sin`/`cos` and everything derived from them
//! - [`hyperbolic`]: hyperbolic functions and their inverses
//! - [`stats`]: sum, mean, median, mode, sample standard deviation
//! - [`checked`]: `Result`-returning variants of the domain-restricted functions
//!
//! All functions are also re-exported at the crate root.
//!
//! ## Preconditions
//!
//! Every float argument must be finite, and restricted functions (`sqrt`,
//! `ln`, `asin`, `acosh`, …) must be called inside their domain. A
//! violation is a programming error and panics. Use [`checked`] when
//! inputs are not known to be valid.
//!
//! Division by zero reachable from valid inputs (`tan` at π/2, `cot` at 0)
//! is not a precondition violation and yields ±∞ or NaN.
//!
//! ## Example
//! ```
//! use u_mathlib::{cos, exp, ln, sin, sqrt, PI};
//!
//! assert!((sqrt(2.0) * sqrt(2.0) - 2.0).abs() < 1e-15);
//! assert!((exp(ln(10.0)) - 10.0).abs() < 1e-10);
//! let (s, c) = (sin(PI / 3.0), cos(PI / 3.0));
//! assert!((s * s + c * c - 1.0).abs() < 1e-4);
//! ```

pub mod arith;
pub mod bits;
pub mod checked;
pub mod consts;
pub mod exp;
pub mod hyperbolic;
pub mod roots;
pub mod stats;
pub mod trig;

pub use arith::{
    abs, ceil, clamp, fact, fdiv, floor, gcd, is_finite, is_infinite, is_nan, is_prime, lcm, max,
    min, pow, rem, round, to_degree, to_radian,
};
pub use bits::{to_bits, to_float};
pub use checked::DomainError;
pub use consts::{CATALAN, E, EULER, LN10, LN2, LOG10E, LOG2E, PHI, PI, TAU};
pub use exp::{exp, ln, log, log10, log2};
pub use hyperbolic::{acosh, asinh, atanh, cosh, coth, csch, sech, sinh, tanh};
pub use roots::{isqrt, qisqrt, sqrt};
pub use stats::{bubble_sort, mean, median, mode, stddev, sum};
pub use trig::{acos, asin, atan, atan2, cos, cot, csc, sec, sin, tan};
