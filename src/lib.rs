//! Length, temperature and currency conversion.
//!
//! `core::features` is the pure conversion engine. `api::commands` is the thin
//! adapter a front-end calls on every input event: it parses raw form text,
//! runs the engine and formats the result for display.

pub mod api;
pub mod core;
pub mod shared;

pub use crate::api::commands::converter::{
    convert_units_command, default_request, render_conversion,
};
pub use crate::api::commands::units::{get_all_units_command, get_units_for_domain};
pub use crate::core::features::currency::convert_currency;
pub use crate::core::features::length::convert_length;
pub use crate::core::features::temperature::convert_temperature;
pub use crate::core::features::unit_tables::{
    CurrencyUnit, LengthUnit, TemperatureUnit, Unit, UnitInfo,
};
pub use crate::core::features::{
    convert, convert_keys, convert_request, ConversionRequest, ConversionResult,
};
pub use crate::shared::errors::{ConversionError, EngineResult, SettingsError};
pub use crate::shared::settings::{ConverterSettings, UnitPair};
pub use crate::shared::types::{
    ConversionDisplay, ConvertUnitsRequest, ConvertUnitsResponse, UnitDomain,
};
