use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::shared::errors::ConversionError;

/// Conversion domains, each with its own closed set of units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum UnitDomain {
    Length,
    Temperature,
    Currency,
}

impl UnitDomain {
    pub const ALL: [UnitDomain; 3] = [
        UnitDomain::Length,
        UnitDomain::Temperature,
        UnitDomain::Currency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitDomain::Length => "length",
            UnitDomain::Temperature => "temperature",
            UnitDomain::Currency => "currency",
        }
    }
}

impl fmt::Display for UnitDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitDomain {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(UnitDomain::Length),
            "temperature" | "temp" => Ok(UnitDomain::Temperature),
            "currency" => Ok(UnitDomain::Currency),
            other => Err(ConversionError::InvalidInput(format!("Unknown domain: {}", other))),
        }
    }
}

/// Raw form state sent by the front-end on every input or selector change
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertUnitsRequest {
    pub domain: UnitDomain,
    pub input: String,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertUnitsResponse {
    pub result: f64,
    pub formatted_result: String,
    pub input_display: String,
    pub from_unit_display: String,
    pub to_unit_display: String,
}

/// Everything the converter section renders after one input event.
///
/// On failure both numeric displays read "0" and `error` says why.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversionDisplay {
    pub input_display: String,
    pub result_display: String,
    pub from_unit_display: String,
    pub to_unit_display: String,
    pub result: Option<f64>,
    pub error: Option<ConversionError>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GetUnitsResponse {
    pub units: Vec<UnitDTO>,
}

// Unit selector entry for the front-end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitDTO {
    pub id: String,       // Unit key (e.g., "m", "usd")
    pub label: String,    // Display label (e.g., "°C", "EUR")
    pub name: String,     // Human name (e.g., "Celsius")
    pub domain: UnitDomain,
}
