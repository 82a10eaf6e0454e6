//! Conversion facade
//!
//! Every domain follows the same two steps: convert the input into the
//! domain's base unit, then from the base unit into the target unit.
//! The facade checks that both units belong to the requested domain and
//! dispatches to the matching engine. Output values are never rounded here;
//! display formatting belongs to the UI adapter.

use serde::Serialize;

use crate::shared::errors::{ConversionError, EngineResult};
use crate::shared::types::UnitDomain;

pub mod currency;
pub mod length;
pub mod temperature;
pub mod unit_tables;

use self::unit_tables::{Unit, UnitInfo};

/// A single conversion call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub domain: UnitDomain,
    pub value: f64,
    pub from_unit: Unit,
    pub to_unit: Unit,
}

/// Raw converted value plus the labels to show next to each side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub value: f64,
    pub display_from_unit: String,
    pub display_to_unit: String,
}

pub(crate) fn ensure_finite(value: f64) -> EngineResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConversionError::InvalidInput(format!("Value must be a finite number, got {}", value)))
    }
}

/// Finite input can still overflow, e.g. 1e307 miles in centimeters
pub(crate) fn ensure_finite_result(result: f64) -> EngineResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(ConversionError::InvalidInput(format!("Result is out of range ({})", result)))
    }
}

fn ensure_domain(domain: UnitDomain, unit: Unit) -> EngineResult<()> {
    if unit.domain() == domain {
        Ok(())
    } else {
        Err(ConversionError::DomainMismatch {
            expected: domain,
            found: unit.domain(),
            unit: unit.key().to_string(),
        })
    }
}

/// Convert `value` from `from_unit` to `to_unit` within `domain`
pub fn convert(
    domain: UnitDomain,
    value: f64,
    from_unit: Unit,
    to_unit: Unit,
) -> EngineResult<ConversionResult> {
    ensure_domain(domain, from_unit)?;
    ensure_domain(domain, to_unit)?;

    let result = match (from_unit, to_unit) {
        (Unit::Length(from), Unit::Length(to)) => length::convert_length(value, from, to)?,
        (Unit::Temperature(from), Unit::Temperature(to)) => {
            temperature::convert_temperature(value, from, to)?
        }
        (Unit::Currency(from), Unit::Currency(to)) => currency::convert_currency(value, from, to)?,
        // Both units were checked against the same domain above
        (from, to) => {
            return Err(ConversionError::DomainMismatch {
                expected: from.domain(),
                found: to.domain(),
                unit: to.key().to_string(),
            })
        }
    };

    tracing::debug!(
        domain = %domain,
        from = from_unit.key(),
        to = to_unit.key(),
        value,
        result,
        "converted"
    );

    Ok(ConversionResult {
        value: result,
        display_from_unit: from_unit.label().to_string(),
        display_to_unit: to_unit.label().to_string(),
    })
}

pub fn convert_request(request: &ConversionRequest) -> EngineResult<ConversionResult> {
    convert(request.domain, request.value, request.from_unit, request.to_unit)
}

/// Same as [`convert`], resolving selector keys first
pub fn convert_keys(
    domain: UnitDomain,
    value: f64,
    from_key: &str,
    to_key: &str,
) -> EngineResult<ConversionResult> {
    let from_unit = Unit::parse_in(domain, from_key)?;
    let to_unit = Unit::parse_in(domain, to_key)?;
    convert(domain, value, from_unit, to_unit)
}
