//! Length conversion, routed through meters

use super::{ensure_finite, ensure_finite_result};
use super::unit_tables::{length_factor_of, LengthUnit};
use crate::shared::errors::EngineResult;

/// Convert `value` between length units.
///
/// Negative and zero lengths are converted by the same formula, not rejected.
pub fn convert_length(value: f64, from_unit: LengthUnit, to_unit: LengthUnit) -> EngineResult<f64> {
    ensure_finite(value)?;

    if from_unit == to_unit {
        return Ok(value);
    }

    ensure_finite_result(value * length_factor_of(from_unit) / length_factor_of(to_unit))
}
