//! IEEE-754 single-precision bit codec.
//!
//! Reinterprets the 4-byte big-endian encoding of an `f32` as an `i32` and
//! back. No numeric conversion happens in either direction, so
//! `to_float(to_bits(x))` reproduces `x` bit for bit. The integer width is
//! fixed at 32 bits on every target.

use crate::arith::require_finite;

/// Reinterprets the bit pattern of `x` as a signed 32-bit integer.
///
/// # Panics
/// If `x` is NaN or infinite.
///
/// # Examples
/// ```
/// use u_mathlib::bits::to_bits;
/// assert_eq!(to_bits(1.0), 0x3f80_0000);
/// assert_eq!(to_bits(-2.0), 0xc000_0000_u32 as i32);
/// ```
pub fn to_bits(x: f32) -> i32 {
    require_finite("to_bits", f64::from(x));
    i32::from_be_bytes(x.to_be_bytes())
}

/// Reinterprets a signed 32-bit integer as an `f32` bit pattern.
///
/// # Panics
/// If the decoded value is NaN or infinite (exponent field all ones).
pub fn to_float(bits: i32) -> f32 {
    let x = f32::from_be_bytes(bits.to_be_bytes());
    require_finite("to_float", f64::from(x));
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_patterns() {
        assert_eq!(to_bits(0.0), 0);
        assert_eq!(to_bits(-0.0), i32::MIN);
        assert_eq!(to_bits(1.0), 0x3f80_0000);
        assert_eq!(to_bits(0.5), 0x3f00_0000);
        assert_eq!(to_bits(f32::MAX), 0x7f7f_ffff);
        assert_eq!(to_bits(f32::from_bits(1)), 1);
    }

    #[test]
    fn test_matches_std_bit_cast() {
        for &x in &[1.5_f32, -3.25, 1e-40, 123456.78, -f32::MIN_POSITIVE] {
            assert_eq!(to_bits(x) as u32, x.to_bits());
        }
    }

    #[test]
    fn test_to_float_inverse() {
        assert_eq!(to_float(0x4049_0fdb), std::f32::consts::PI);
        assert_eq!(to_float(0), 0.0);
    }

    #[test]
    fn test_negative_zero_roundtrip() {
        let z = to_float(to_bits(-0.0));
        assert!(z == 0.0 && z.is_sign_negative());
    }

    #[test]
    #[should_panic(expected = "to_bits: argument must be finite")]
    fn test_to_bits_nan_panics() {
        to_bits(f32::NAN);
    }

    #[test]
    #[should_panic(expected = "to_float: argument must be finite")]
    fn test_to_float_infinity_panics() {
        to_float(0x7f80_0000);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn bit_roundtrip_is_exact(raw in any::<u32>()) {
            let x = f32::from_bits(raw);
            prop_assume!(x.is_finite());
            let back = to_float(to_bits(x));
            prop_assert_eq!(back.to_bits(), x.to_bits());
        }
    }
}
