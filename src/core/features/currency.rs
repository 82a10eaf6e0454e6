//! Currency conversion against the static rate snapshot, routed through USD

use super::{ensure_finite, ensure_finite_result};
use super::unit_tables::{currency_rate_of, CurrencyUnit};
use crate::shared::errors::{ConversionError, EngineResult};

pub fn convert_currency(
    value: f64,
    from_unit: CurrencyUnit,
    to_unit: CurrencyUnit,
) -> EngineResult<f64> {
    ensure_finite(value)?;

    if from_unit == to_unit {
        return Ok(value);
    }

    convert_with_rates(value, currency_rate_of(from_unit), currency_rate_of(to_unit))
}

/// `value / from_rate * to_rate`, guarding the division.
fn convert_with_rates(value: f64, from_rate: f64, to_rate: f64) -> EngineResult<f64> {
    if from_rate == 0.0 {
        return Err(ConversionError::InvalidInput(
            "Source currency rate is zero".to_string(),
        ));
    }

    let usd_value = value / from_rate;
    ensure_finite_result(usd_value * to_rate)
}
