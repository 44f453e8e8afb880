use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Significant digits kept when a number is rendered.
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Formats a double like C's `%g`: six significant digits, trailing zeros
/// removed, and exponent notation for very large or very small magnitudes.
///
/// # Example
/// ```
/// use scrypt::util::num::format_number;
///
/// assert_eq!(format_number(3.5), "3.5");
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333");
/// assert_eq!(format_number(1234567.0), "1.23457e+06");
/// assert_eq!(format_number(0.00001), "1e-05");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the kept digits decides the exponent, so 999999.5 is 1e+06.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    #[allow(clippy::cast_possible_wrap)]
    let max_exponent = SIGNIFICANT_DIGITS as i32;
    if exponent < -4 || exponent >= max_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs());
    }

    #[allow(clippy::cast_sign_loss)]
    let decimals = (max_exponent - 1 - exponent) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

/// Formats an array as `[a, b, c]` using [`format_number`] for elements.
///
/// # Example
/// ```
/// use scrypt::util::num::format_array;
///
/// assert_eq!(format_array(&[1.0, 2.5]), "[1, 2.5]");
/// assert_eq!(format_array(&[]), "[]");
/// ```
#[must_use]
pub fn format_array(values: &[f64]) -> String {
    let elements: Vec<String> = values.iter().map(|v| format_number(*v)).collect();
    format!("[{}]", elements.join(", "))
}

/// Converts an index value into a position inside an array of length `len`.
///
/// ## Errors
/// - `RuntimeError::IntegerIndexRequired` if the value has a fractional part
///   or is not finite.
/// - `RuntimeError::OutOfBounds` if the value is negative or not below
///   `len`.
///
/// ## Example
/// ```
/// use scrypt::{error::RuntimeError, util::num::array_index};
///
/// assert_eq!(array_index(2.0, 3).unwrap(), 2);
/// assert!(matches!(array_index(3.0, 3), Err(RuntimeError::OutOfBounds)));
/// assert!(matches!(array_index(1.5, 3), Err(RuntimeError::IntegerIndexRequired)));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn array_index(value: f64, len: usize) -> EvalResult<usize> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(RuntimeError::IntegerIndexRequired);
    }
    if value < 0.0 || value >= len as f64 {
        return Err(RuntimeError::OutOfBounds);
    }
    Ok(value as usize)
}

/// Truncates a double towards zero for the integer-style logical operators.
///
/// Callers have already checked that the value is `0.0` or `1.0`.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn truncate_to_i64(value: f64) -> i64 {
    value as i64
}

/// Converts an integer result of a logical operator back into a double.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an array length into the double the language reports.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_print_without_fraction() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(999_999.0), "999999");
    }

    #[test]
    fn fractions_keep_six_significant_digits() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(2.0 / 3.0), "0.666667");
        assert_eq!(format_number(123.456_789), "123.457");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn extremes_switch_to_exponent_form() {
        assert_eq!(format_number(999_999.5), "1e+06");
        assert_eq!(format_number(-2.5e-7), "-2.5e-07");
        assert_eq!(format_number(1e100), "1e+100");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }

    #[test]
    fn negative_index_is_out_of_bounds() {
        assert!(matches!(array_index(-1.0, 3), Err(RuntimeError::OutOfBounds)));
        assert!(matches!(array_index(0.0, 0), Err(RuntimeError::OutOfBounds)));
        assert!(matches!(array_index(f64::NAN, 3), Err(RuntimeError::IntegerIndexRequired)));
    }
}
