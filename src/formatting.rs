//! Output formatting for decimal values
//!
//! Fixed-decimal rendering works in the integer-scaled domain and builds the
//! digit string directly, so `3.1` at two places is `"3.10"` and never
//! `"3.09"` or `"3.100000..."`. Grouping and trailing-zero trimming operate
//! on that digit string.

use serde::{Deserialize, Serialize};

use crate::precise::Precision;

/// Default number of decimal places for fixed formatting
pub const DEFAULT_DECIMALS: Precision = 2;

/// Format configuration for rendering numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Decimal places to render
    pub decimals: Precision,

    /// Strip trailing fractional zeros (and a bare trailing point)
    pub trim_trailing_zeros: bool,

    /// Group the integer part with thousands separators
    pub thousands_sep: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { decimals: DEFAULT_DECIMALS, trim_trailing_zeros: false, thousands_sep: false }
    }
}

impl FormatOptions {
    /// Create options with the defaults
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the number of decimal places
    pub fn with_decimals(mut self, decimals: Precision) -> Self {
        self.decimals = decimals;
        self
    }

    /// Strip trailing fractional zeros from the output
    pub fn trim_trailing_zeros(mut self) -> Self {
        self.trim_trailing_zeros = true;
        self
    }

    /// Group the integer part with thousands separators
    pub fn with_thousands_sep(mut self, sep: bool) -> Self {
        self.thousands_sep = sep;
        self
    }
}

/// Format `value` as fixed-decimal text according to `options`.
///
/// The value is rounded half away from zero at `options.decimals` places in
/// the integer-scaled domain, then rendered by splitting the digit string at
/// the decimal point. Magnitudes whose scaled form exceeds the `i128` range
/// fall back to the standard library's fixed formatting.
pub fn format_number(value: f64, options: &FormatOptions) -> String {
    let decimals = options.decimals as usize;
    let factor = 10f64.powi(options.decimals as i32);
    let scaled = (value * factor).round();

    if !scaled.is_finite() || scaled.abs() >= i128::MAX as f64 {
        return format!("{value:.decimals$}");
    }

    let scaled = scaled as i128;
    let negative = scaled < 0;
    let mut digits = scaled.unsigned_abs().to_string();
    while digits.len() <= decimals {
        digits.insert(0, '0');
    }

    let (integer_part, fraction_part) = digits.split_at(digits.len() - decimals);
    let integer_part = if options.thousands_sep {
        group_digits(integer_part)
    } else {
        integer_part.to_string()
    };

    let mut result = if decimals > 0 {
        format!("{integer_part}.{fraction_part}")
    } else {
        integer_part
    };

    if options.trim_trailing_zeros && decimals > 0 {
        while result.ends_with('0') {
            result.pop();
        }
        if result.ends_with('.') {
            result.pop();
        }
    }

    if negative {
        result.insert(0, '-');
    }
    result
}

/// Format `value` with exactly `decimals` decimal places.
pub fn format_fixed(value: f64, decimals: Precision) -> String {
    format_number(value, &FormatOptions::new().with_decimals(decimals))
}

/// Format `value` with up to `decimals` decimal places, trailing zeros
/// stripped.
pub fn format_trimmed(value: f64, decimals: Precision) -> String {
    format_number(value, &FormatOptions::new().with_decimals(decimals).trim_trailing_zeros())
}

/// Render `value` in its shortest form with the integer part comma-grouped.
pub fn format_thousands(value: f64) -> String {
    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };

    let (integer_part, fraction_part) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut result = String::from(sign);
    result.push_str(&group_digits(integer_part));
    if let Some(fraction) = fraction_part {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

/// Render `value` in normalized scientific notation with an explicit
/// exponent sign, e.g. `12345.0` becomes `"1.2345e+4"`.
pub fn format_scientific(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Insert a comma every three digits, counted from the right.
fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let chars: Vec<char> = digits.chars().collect();
    let mut result = String::new();
    for (i, &ch) in chars.iter().enumerate() {
        result.push(ch);
        let remaining = chars.len() - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            result.push(',');
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(3.14159, 4), "3.1416");
        assert_eq!(format_fixed(3.1, 2), "3.10");
        assert_eq!(format_fixed(3.0, 2), "3.00");
        assert_eq!(format_fixed(0.0, 2), "0.00");
        assert_eq!(format_fixed(123.0, 0), "123");
        assert_eq!(format_fixed(-12.346, 2), "-12.35");
    }

    #[test]
    fn test_format_trimmed() {
        assert_eq!(format_trimmed(3.1, 2), "3.1");
        assert_eq!(format_trimmed(3.0, 2), "3");
        assert_eq!(format_trimmed(3.10001, 2), "3.1");
        assert_eq!(format_trimmed(30.0, 2), "30");
        assert_eq!(format_trimmed(-3.50, 2), "-3.5");
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(-2.5, 0), "-3");
        assert_eq!(format_fixed(0.125, 2), "0.13");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_fixed(-0.004, 2), "0.00");
        assert_eq!(format_fixed(-0.4, 0), "0");
    }

    #[test]
    fn test_format_number_with_thousands() {
        let options = FormatOptions::new().with_decimals(2).with_thousands_sep(true);
        assert_eq!(format_number(1234567.891, &options), "1,234,567.89");
        assert_eq!(format_number(-1234567.0, &options), "-1,234,567.00");
        assert_eq!(format_number(123.45, &options), "123.45");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(1234567.0), "1,234,567");
        assert_eq!(format_thousands(1234567.891), "1,234,567.891");
        assert_eq!(format_thousands(-9876543.21), "-9,876,543.21");
        assert_eq!(format_thousands(123.0), "123");
        assert_eq!(format_thousands(0.5), "0.5");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(12345.0), "1.2345e+4");
        assert_eq!(format_scientific(0.00123), "1.23e-3");
        assert_eq!(format_scientific(-12345.0), "-1.2345e+4");
        assert_eq!(format_scientific(0.0), "0e+0");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("1234567"), "1,234,567");
    }
}
