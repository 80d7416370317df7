//! Plain decimal rendering of `f64` values.
//!
//! Chart consumers and arbitrary-precision parsers downstream choke on
//! exponent notation (`1.5e-7`, `2e+21`).  [`to_fixed_decimal_string`]
//! always produces a plain decimal string instead:
//!
//! | Magnitude | Output |
//! |-----------|--------|
//! | `0` | `"0"` |
//! | `< 1e-6` | `"0."` + zeros + the shortest round-trip digits |
//! | `1e-6 ..< 1e21` | the shortest round-trip decimal form |
//! | `≥ 1e21` | the value scaled down to 21 integer digits, then zero padded |
//!
//! Values at or above `1e21` keep only about as many significant digits
//! as fit below the exponent cap; the remaining digits are replaced by
//! zeros, i.e. the magnitude is rounded down to that precision.

use crate::error::DepthError;

/// Largest decimal exponent printed without scaling.
pub const DEFAULT_EXPONENT_CAP: u32 = 20;

/// Smallest decimal exponent printed in plain form by the usual
/// shortest-representation rules; anything below is expanded by hand.
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Largest number of significant digits an `f64` can meaningfully carry.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Renders `x` as a plain decimal string using [`DEFAULT_EXPONENT_CAP`].
///
/// # Examples
///
/// ```
/// use muffin_depth::math::to_fixed_decimal_string;
///
/// assert_eq!(to_fixed_decimal_string(0.0), "0");
/// assert_eq!(to_fixed_decimal_string(1.5e-7), "0.00000015");
/// assert_eq!(to_fixed_decimal_string(-2.5e-8), "-0.000000025");
/// assert_eq!(to_fixed_decimal_string(1234.5), "1234.5");
/// assert_eq!(to_fixed_decimal_string(1e21), "1000000000000000000000");
/// ```
#[must_use]
pub fn to_fixed_decimal_string(x: f64) -> String {
    to_fixed_decimal_string_with_cap(x, DEFAULT_EXPONENT_CAP)
}

/// Renders `x` as a plain decimal string, scaling values whose decimal
/// exponent exceeds `exponent_cap` down by `10^(exponent - cap)` before
/// printing and appending that many zeros afterwards.
///
/// Non-finite values render as `"NaN"`, `"Infinity"` and `"-Infinity"`.
#[must_use]
pub fn to_fixed_decimal_string_with_cap(x: f64, exponent_cap: u32) -> String {
    if x.is_nan() {
        return "NaN".to_owned();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if x == 0.0 {
        return "0".to_owned();
    }

    let sign = if x < 0.0 { "-" } else { "" };
    let magnitude = x.abs();
    let Some((digits, exponent)) = decompose(magnitude) else {
        return format!("{x}");
    };

    let cap = i32::try_from(exponent_cap).unwrap_or(i32::MAX);
    let body = if exponent < MIN_PLAIN_EXPONENT {
        let zeros = usize::try_from(-exponent - 1).unwrap_or(0);
        format!("0.{}{digits}", "0".repeat(zeros))
    } else if exponent > cap {
        let shift = exponent - cap;
        let scaled = magnitude / 10f64.powi(shift);
        let pad = usize::try_from(shift).unwrap_or(0);
        format!("{}{}", scaled.trunc(), "0".repeat(pad))
    } else {
        format!("{magnitude}")
    };

    format!("{sign}{body}")
}

/// Rounds `x` to `digits` significant digits and renders it with
/// [`to_fixed_decimal_string`].
///
/// Trailing zeros after the decimal point are never printed.
///
/// # Errors
///
/// Returns [`DepthError::InvalidPrecision`] if `digits` is zero or
/// exceeds [`MAX_SIGNIFICANT_DIGITS`].
///
/// # Examples
///
/// ```
/// use muffin_depth::math::to_significant;
///
/// assert_eq!(to_significant(1234.5678, 6).expect("valid"), "1234.57");
/// assert_eq!(to_significant(1234.5678, 2).expect("valid"), "1200");
/// assert_eq!(to_significant(0.000_000_123_456, 3).expect("valid"), "0.000000123");
/// ```
pub fn to_significant(x: f64, digits: usize) -> crate::error::Result<String> {
    Ok(to_fixed_decimal_string(round_significant(x, digits)?))
}

/// Rounds `x` to `digits` significant digits.
///
/// # Errors
///
/// Returns [`DepthError::InvalidPrecision`] if `digits` is zero or
/// exceeds [`MAX_SIGNIFICANT_DIGITS`].
pub fn round_significant(x: f64, digits: usize) -> crate::error::Result<f64> {
    if digits == 0 || digits > MAX_SIGNIFICANT_DIGITS {
        return Err(DepthError::InvalidPrecision(
            "significant digits must be 1..=17",
        ));
    }
    if !x.is_finite() || x == 0.0 {
        return Ok(x);
    }
    format!("{:.*e}", digits - 1, x)
        .parse::<f64>()
        .map_err(|_| DepthError::InvalidPrecision("significant digit rounding failed"))
}

/// Splits a positive finite value into its shortest round-trip digit
/// string and decimal exponent, e.g. `1.25e-7` → `("125", -7)`.
fn decompose(magnitude: f64) -> Option<(String, i32)> {
    let sci = format!("{magnitude:e}");
    let (mantissa, exponent) = sci.split_once('e')?;
    let exponent = exponent.parse::<i32>().ok()?;
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    Some((digits, exponent))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Zero & sign --------------------------------------------------------

    #[test]
    fn zero_is_plain_zero() {
        assert_eq!(to_fixed_decimal_string(0.0), "0");
        assert_eq!(to_fixed_decimal_string(-0.0), "0");
    }

    #[test]
    fn sign_survives_small_expansion() {
        assert_eq!(to_fixed_decimal_string(-1.5e-7), "-0.00000015");
    }

    #[test]
    fn sign_survives_large_expansion() {
        assert_eq!(to_fixed_decimal_string(-1e22), "-10000000000000000000000");
    }

    // -- Small magnitudes ---------------------------------------------------

    #[test]
    fn plain_small_values_unchanged() {
        assert_eq!(to_fixed_decimal_string(0.5), "0.5");
        assert_eq!(to_fixed_decimal_string(0.000_001), "0.000001");
    }

    #[test]
    fn expands_negative_exponent() {
        assert_eq!(to_fixed_decimal_string(1e-7), "0.0000001");
        assert_eq!(to_fixed_decimal_string(1.234e-10), "0.0000000001234");
    }

    #[test]
    fn smallest_subnormal() {
        let s = to_fixed_decimal_string(5e-324);
        assert!(s.starts_with("0.000"));
        assert!(s.ends_with('5'));
        assert_eq!(s.len(), 2 + 323 + 1);
    }

    // -- Mid-range ----------------------------------------------------------

    #[test]
    fn mid_range_unchanged() {
        assert_eq!(to_fixed_decimal_string(1.0), "1");
        assert_eq!(to_fixed_decimal_string(-42.125), "-42.125");
        assert_eq!(to_fixed_decimal_string(1e20), "100000000000000000000");
    }

    // -- Large magnitudes ---------------------------------------------------

    #[test]
    fn expands_positive_exponent() {
        assert_eq!(to_fixed_decimal_string(1e21), "1000000000000000000000");
        assert_eq!(to_fixed_decimal_string(2.5e21), "2500000000000000000000");
    }

    #[test]
    fn large_values_keep_leading_digits() {
        let s = to_fixed_decimal_string(1.234_567_890_123_456_7e30);
        assert_eq!(s.len(), 31);
        assert!(s.starts_with("12345678901234"));
    }

    #[test]
    fn custom_cap_scales_earlier() {
        assert_eq!(to_fixed_decimal_string_with_cap(1.5e12, 10), "1500000000000");
        assert_eq!(to_fixed_decimal_string_with_cap(123.0, 1), "120");
    }

    #[test]
    fn max_value_has_no_exponent() {
        let s = to_fixed_decimal_string(f64::MAX);
        assert_eq!(s.len(), 309);
        assert!(!s.contains('e'));
    }

    // -- Non-finite ---------------------------------------------------------

    #[test]
    fn non_finite() {
        assert_eq!(to_fixed_decimal_string(f64::NAN), "NaN");
        assert_eq!(to_fixed_decimal_string(f64::INFINITY), "Infinity");
        assert_eq!(to_fixed_decimal_string(f64::NEG_INFINITY), "-Infinity");
    }

    // -- Significant digits -------------------------------------------------

    #[test]
    fn significant_rounding() {
        let Ok(v) = round_significant(123_456.789, 4) else {
            panic!("expected Ok");
        };
        assert!((v - 123_500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn significant_twelve_digits() {
        let Ok(s) = to_significant(1.000_100_000_000_000_3, 12) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "1.0001");
    }

    #[test]
    fn significant_zero_and_negative() {
        assert_eq!(to_significant(0.0, 5), Ok("0".to_owned()));
        assert_eq!(to_significant(-0.015_56, 3), Ok("-0.0156".to_owned()));
    }

    #[test]
    fn significant_digits_validated() {
        let err = Err(DepthError::InvalidPrecision(
            "significant digits must be 1..=17",
        ));
        assert_eq!(to_significant(1.0, 0), err);
        assert_eq!(to_significant(1.0, 18), err);
    }

    #[test]
    fn decompose_splits_digits() {
        assert_eq!(decompose(1.25e-7), Some(("125".to_owned(), -7)));
        assert_eq!(decompose(3.0), Some(("3".to_owned(), 0)));
    }
}
