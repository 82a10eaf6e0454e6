//! Temperature conversion, routed through Celsius

use super::{ensure_finite, ensure_finite_result};
use super::unit_tables::{temperature_from_base, temperature_to_base, TemperatureUnit};
use crate::shared::errors::EngineResult;

pub fn convert_temperature(
    value: f64,
    from_unit: TemperatureUnit,
    to_unit: TemperatureUnit,
) -> EngineResult<f64> {
    ensure_finite(value)?;

    if from_unit == to_unit {
        return Ok(value);
    }

    let celsius = temperature_to_base(from_unit, value);
    ensure_finite_result(temperature_from_base(to_unit, celsius))
}
