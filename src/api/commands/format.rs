//! Display policy for converter values
//!
//! The engine hands back raw `f64`s. This module decides how they look on
//! screen and how raw form text becomes a number in the first place. Output
//! follows what a browser prints for the same number: `toFixed` for results,
//! `Number#toString` for the input echo.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::shared::types::UnitDomain;

pub const LENGTH_DECIMALS: u32 = 6;
pub const FIXED_DECIMALS: u32 = 2;

// Longest numeric prefix, browser parseFloat style: "12px" -> 12, "1e3" -> 1000.
// ASCII digits only.
static RE_NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("Failed to compile numeric prefix regex")
});

static RE_INFINITY_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?)Infinity").expect("Failed to compile infinity regex")
});

static RE_TRAILING_ZEROS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.?0+$").expect("Failed to compile trailing zeros regex")
});

/// Parse the leading number out of raw form input.
///
/// Returns `None` when the text does not start with a number.
pub fn parse_numeric_input(raw: &str) -> Option<f64> {
    if let Some(caps) = RE_NUMERIC_PREFIX.captures(raw) {
        return caps[1].parse::<f64>().ok();
    }

    RE_INFINITY_PREFIX.captures(raw).map(|caps| {
        if &caps[1] == "-" {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    })
}

// -0 prints as "0"
fn without_negative_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn non_finite_label(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
    } else {
        None
    }
}

/// Fixed-point rendering with exact ties rounded away from zero.
fn to_fixed(value: f64, decimals: u32) -> String {
    let value = without_negative_zero(value);
    if let Some(label) = non_finite_label(value) {
        return label;
    }

    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(decimals);
            rounded.to_string()
        }
        // Beyond Decimal range there is no fractional part left to round
        None => format!("{:.*}", decimals as usize, value),
    }
}

/// Format a converted value for display.
///
/// Temperature and currency show exactly two decimals. Length shows up to six
/// decimals with trailing zeros removed.
pub fn format_value(domain: UnitDomain, value: f64) -> String {
    match domain {
        UnitDomain::Length => {
            let fixed = to_fixed(value, LENGTH_DECIMALS);
            if fixed.contains('.') {
                RE_TRAILING_ZEROS.replace(&fixed, "").into_owned()
            } else {
                fixed
            }
        }
        UnitDomain::Temperature | UnitDomain::Currency => to_fixed(value, FIXED_DECIMALS),
    }
}

/// Echo of the parsed input, as shown next to the result.
///
/// Shortest round-trip digits; plain notation for decimal exponents in
/// `-7..21`, scientific (`1e+21`, `1.5e-7`) outside it.
pub fn format_input(value: f64) -> String {
    let value = without_negative_zero(value);
    if let Some(label) = non_finite_label(value) {
        return label;
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // "{:e}" yields the shortest round-trip digits, e.g. "1.2345e-7"
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return format!("{}", value),
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return format!("{}", value),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digit_count = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let point = exponent + 1;

    let body = if digit_count <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - digit_count) as usize))
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, exp_sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, exp_sign, exponent.abs())
        }
    };

    format!("{}{}", sign, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_numeric_input("42"), Some(42.0));
        assert_eq!(parse_numeric_input("  -3.5"), Some(-3.5));
        assert_eq!(parse_numeric_input(".5"), Some(0.5));
        assert_eq!(parse_numeric_input("+7"), Some(7.0));
        assert_eq!(parse_numeric_input("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_numeric_prefix() {
        assert_eq!(parse_numeric_input("12px"), Some(12.0));
        assert_eq!(parse_numeric_input("1.5.3"), Some(1.5));
        assert_eq!(parse_numeric_input("2e"), Some(2.0));
        assert_eq!(parse_numeric_input("7."), Some(7.0));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(parse_numeric_input(""), None);
        assert_eq!(parse_numeric_input("abc"), None);
        assert_eq!(parse_numeric_input("."), None);
        assert_eq!(parse_numeric_input("-"), None);
        assert_eq!(parse_numeric_input("NaN"), None);
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_numeric_input("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_numeric_input(" -Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_length_strips_trailing_zeros() {
        assert_eq!(format_value(UnitDomain::Length, 1.0), "1");
        assert_eq!(format_value(UnitDomain::Length, 10.5), "10.5");
        assert_eq!(format_value(UnitDomain::Length, 1609.34), "1609.34");
        assert_eq!(format_value(UnitDomain::Length, 0.0), "0");
        assert_eq!(format_value(UnitDomain::Length, 100.0), "100");
        assert_eq!(format_value(UnitDomain::Length, 1.0 / 0.0254), "39.370079");
    }

    #[test]
    fn test_fixed_two_decimals() {
        assert_eq!(format_value(UnitDomain::Temperature, 32.0), "32.00");
        assert_eq!(format_value(UnitDomain::Temperature, -17.777777), "-17.78");
        assert_eq!(format_value(UnitDomain::Currency, 92.0), "92.00");
        assert_eq!(format_value(UnitDomain::Currency, 126.58227848), "126.58");
    }

    #[test]
    fn test_parse_ascii_digits_only() {
        assert_eq!(parse_numeric_input("12\u{0663}"), Some(12.0));
        assert_eq!(parse_numeric_input("\u{0663}"), None);
    }

    #[test]
    fn test_exact_ties_round_up() {
        assert_eq!(format_value(UnitDomain::Currency, 0.125), "0.13");
        assert_eq!(format_value(UnitDomain::Temperature, 20.625), "20.63");
        assert_eq!(format_value(UnitDomain::Temperature, -20.625), "-20.63");
    }

    #[test]
    fn test_inexact_halves_follow_binary_value() {
        // 1.005 is stored slightly below the midpoint
        assert_eq!(format_value(UnitDomain::Currency, 1.005), "1.00");
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        assert_eq!(format_value(UnitDomain::Length, -0.0), "0");
        assert_eq!(format_value(UnitDomain::Currency, -0.0), "0.00");
        assert_eq!(format_input(-0.0), "0");
    }

    #[test]
    fn test_non_finite_labels() {
        assert_eq!(format_value(UnitDomain::Length, f64::INFINITY), "Infinity");
        assert_eq!(format_value(UnitDomain::Currency, f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_input(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_format_input() {
        assert_eq!(format_input(5.0), "5");
        assert_eq!(format_input(2.5), "2.5");
        assert_eq!(format_input(-2.5), "-2.5");
        assert_eq!(format_input(123.456), "123.456");
        assert_eq!(format_input(0.000001), "0.000001");
        assert_eq!(format_input(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_input_scientific() {
        assert_eq!(format_input(1e21), "1e+21");
        assert_eq!(format_input(1e-7), "1e-7");
        assert_eq!(format_input(1.5e-7), "1.5e-7");
        assert_eq!(format_input(-2.5e300), "-2.5e+300");
    }
}
