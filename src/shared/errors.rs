//! Strict error handling for the conversion engine
//!
//! All engine errors are serializable so the UI adapter can hand them to the
//! front-end unchanged.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::shared::types::UnitDomain;

/// Conversion errors
///
/// Every engine operation either fully succeeds or returns one of these.
/// None of them are retryable.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "message")]
#[ts(export)]
pub enum ConversionError {
    /// Non-numeric or non-finite value, or a zero source rate
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unit key not recognized (for the given domain, if any)
    #[error("Unknown unit '{unit}'{}", domain_suffix(.domain))]
    UnknownUnit {
        domain: Option<UnitDomain>,
        unit: String,
    },

    /// Unit belongs to a different domain than the one requested
    #[error("Unit '{unit}' is a {found} unit, expected a {expected} unit")]
    DomainMismatch {
        expected: UnitDomain,
        found: UnitDomain,
        unit: String,
    },
}

impl ConversionError {
    pub fn unknown_unit(domain: Option<UnitDomain>, unit: impl Into<String>) -> Self {
        ConversionError::UnknownUnit {
            domain,
            unit: unit.into(),
        }
    }
}

fn domain_suffix(domain: &Option<UnitDomain>) -> String {
    match domain {
        Some(domain) => format!(" for {} conversion", domain),
        None => String::new(),
    }
}

/// Helper type alias for engine results
pub type EngineResult<T> = Result<T, ConversionError>;

/// Settings file errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to determine config directory")]
    ConfigDir,

    #[error("Invalid settings: {0}")]
    Invalid(#[from] ConversionError),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
