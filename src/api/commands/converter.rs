//! Converter command module
//!
//! The front-end calls into this module on every input or selector change
//! and renders whatever comes back. Nothing here holds state between calls.

use crate::api::commands::format::{format_input, format_value, parse_numeric_input};
use crate::core::features::convert_keys;
use crate::core::features::unit_tables::{Unit, UnitInfo};
use crate::shared::errors::{ConversionError, EngineResult};
use crate::shared::settings::ConverterSettings;
use crate::shared::types::{
    ConversionDisplay, ConvertUnitsRequest, ConvertUnitsResponse, UnitDomain,
};

const FALLBACK_DISPLAY: &str = "0";

/// Convert raw form input, returning the error instead of a fallback display
pub fn convert_units_command(request: &ConvertUnitsRequest) -> EngineResult<ConvertUnitsResponse> {
    let value = parse_numeric_input(&request.input).ok_or_else(|| {
        ConversionError::InvalidInput(format!("Could not parse a number from '{}'", request.input))
    })?;

    let converted = convert_keys(request.domain, value, &request.from_unit, &request.to_unit)?;

    Ok(ConvertUnitsResponse {
        result: converted.value,
        formatted_result: format_value(request.domain, converted.value),
        input_display: format_input(value),
        from_unit_display: converted.display_from_unit,
        to_unit_display: converted.display_to_unit,
    })
}

/// Render one converter section.
///
/// Never fails: on any error both numeric displays read "0" and the error is
/// attached for the front-end to surface if it wants to.
pub fn render_conversion(request: &ConvertUnitsRequest) -> ConversionDisplay {
    match convert_units_command(request) {
        Ok(response) => ConversionDisplay {
            input_display: response.input_display,
            result_display: response.formatted_result,
            from_unit_display: response.from_unit_display,
            to_unit_display: response.to_unit_display,
            result: Some(response.result),
            error: None,
        },
        Err(err) => {
            tracing::warn!(
                domain = %request.domain,
                input = %request.input,
                error = %err,
                "conversion failed, showing fallback"
            );
            ConversionDisplay {
                input_display: FALLBACK_DISPLAY.to_string(),
                result_display: FALLBACK_DISPLAY.to_string(),
                from_unit_display: unit_label_or_key(request.domain, &request.from_unit),
                to_unit_display: unit_label_or_key(request.domain, &request.to_unit),
                result: None,
                error: Some(err),
            }
        }
    }
}

fn unit_label_or_key(domain: UnitDomain, key: &str) -> String {
    Unit::parse_in(domain, key)
        .map(|unit| unit.label().to_string())
        .unwrap_or_else(|_| key.to_string())
}

/// Request for a section's first render, using the configured default units
pub fn default_request(
    settings: &ConverterSettings,
    domain: UnitDomain,
    input: impl Into<String>,
) -> ConvertUnitsRequest {
    let pair = settings.pair_for(domain);
    ConvertUnitsRequest {
        domain,
        input: input.into(),
        from_unit: pair.from.clone(),
        to_unit: pair.to.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(domain: UnitDomain, input: &str, from: &str, to: &str) -> ConvertUnitsRequest {
        ConvertUnitsRequest {
            domain,
            input: input.to_string(),
            from_unit: from.to_string(),
            to_unit: to.to_string(),
        }
    }

    #[test]
    fn test_length_display() {
        let display = render_conversion(&request(UnitDomain::Length, "100", "cm", "m"));
        assert_eq!(display.input_display, "100");
        assert_eq!(display.result_display, "1");
        assert_eq!(display.from_unit_display, "cm");
        assert_eq!(display.to_unit_display, "m");
        assert_eq!(display.result, Some(1.0));
        assert!(display.error.is_none());
    }

    #[test]
    fn test_temperature_display() {
        let display = render_conversion(&request(UnitDomain::Temperature, "0", "c", "f"));
        assert_eq!(display.result_display, "32.00");
        assert_eq!(display.from_unit_display, "°C");
        assert_eq!(display.to_unit_display, "°F");
    }

    #[test]
    fn test_currency_display() {
        let display = render_conversion(&request(UnitDomain::Currency, "100", "usd", "gbp"));
        assert_eq!(display.result_display, "79.00");
        assert_eq!(display.to_unit_display, "GBP");
    }

    #[test]
    fn test_unparseable_input_falls_back_to_zero() {
        let display = render_conversion(&request(UnitDomain::Length, "abc", "m", "inch"));
        assert_eq!(display.input_display, "0");
        assert_eq!(display.result_display, "0");
        assert_eq!(display.from_unit_display, "m");
        assert_eq!(display.result, None);
        assert!(matches!(display.error, Some(ConversionError::InvalidInput(_))));
    }

    #[test]
    fn test_numeric_prefix_input() {
        let display = render_conversion(&request(UnitDomain::Length, "12px", "m", "cm"));
        assert_eq!(display.input_display, "12");
        assert_eq!(display.result_display, "1200");
    }

    #[test]
    fn test_infinite_input_falls_back() {
        let display = render_conversion(&request(UnitDomain::Currency, "Infinity", "usd", "eur"));
        assert_eq!(display.result_display, "0");
        assert!(display.error.is_some());
    }

    #[test]
    fn test_overflowing_result_falls_back() {
        let display = render_conversion(&request(UnitDomain::Length, "1e307", "mile", "cm"));
        assert_eq!(display.result_display, "0");
        assert_eq!(display.result, None);
        assert!(matches!(display.error, Some(ConversionError::InvalidInput(_))));
    }

    #[test]
    fn test_exact_ties_round_up_in_display() {
        let display = render_conversion(&request(UnitDomain::Currency, "0.125", "usd", "usd"));
        assert_eq!(display.result_display, "0.13");

        let display = render_conversion(&request(UnitDomain::Temperature, "20.625", "c", "c"));
        assert_eq!(display.result_display, "20.63");
    }

    #[test]
    fn test_negative_zero_input() {
        let display = render_conversion(&request(UnitDomain::Length, "-0", "m", "cm"));
        assert_eq!(display.input_display, "0");
        assert_eq!(display.result_display, "0");
    }

    #[test]
    fn test_trailing_non_ascii_digit_ignored() {
        let display = render_conversion(&request(UnitDomain::Length, "12\u{0663}", "m", "m"));
        assert_eq!(display.input_display, "12");
        assert_eq!(display.result_display, "12");
    }

    #[test]
    fn test_input_echo_uses_scientific_for_large_values() {
        let display = render_conversion(&request(UnitDomain::Currency, "1e21", "usd", "usd"));
        assert_eq!(display.input_display, "1e+21");
    }

    #[test]
    fn test_mismatched_unit_falls_back_with_raw_key() {
        let display = render_conversion(&request(UnitDomain::Length, "5", "c", "parsec"));
        assert_eq!(display.result_display, "0");
        assert_eq!(display.from_unit_display, "c");
        assert_eq!(display.to_unit_display, "parsec");
        assert!(matches!(display.error, Some(ConversionError::DomainMismatch { .. })));
    }

    #[test]
    fn test_strict_command_returns_error() {
        let err = convert_units_command(&request(UnitDomain::Temperature, "10", "c", "rankine"))
            .unwrap_err();
        assert!(matches!(err, ConversionError::UnknownUnit { .. }));
    }

    #[test]
    fn test_default_request_uses_settings() {
        let settings = ConverterSettings::default();
        let req = default_request(&settings, UnitDomain::Currency, "100");
        assert_eq!(req.from_unit, "usd");
        assert_eq!(req.to_unit, "eur");

        let display = render_conversion(&req);
        assert_eq!(display.result_display, "92.00");
    }
}
