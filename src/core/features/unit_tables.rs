//! Static unit tables
//!
//! Every unit the converter knows, its string key, display label and the
//! constant that routes it through the domain's base unit:
//! meters for length, Celsius for temperature, US dollars for currency.

use std::collections::HashMap;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::errors::{ConversionError, EngineResult};
use crate::shared::types::UnitDomain;

// ============================================================================
// Constants
// ============================================================================

/// Meters per unit
pub const METERS_PER_METER: f64 = 1.0;
pub const METERS_PER_CENTIMETER: f64 = 0.01;
pub const METERS_PER_INCH: f64 = 0.0254;
pub const METERS_PER_MILE: f64 = 1609.34;

/// Units per US dollar (static snapshot, never refreshed)
pub const RATE_USD: f64 = 1.0;
pub const RATE_EUR: f64 = 0.92;
pub const RATE_GBP: f64 = 0.79;

pub const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

// ============================================================================
// Unit metadata
// ============================================================================

/// Metadata shared by every unit, dispatched statically over [`Unit`]
#[enum_dispatch]
pub trait UnitInfo {
    /// Selector key used by the front-end (e.g. "cm", "f", "usd")
    fn key(&self) -> &'static str;

    /// Label shown next to a value (e.g. "°F", "EUR")
    fn label(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn domain(&self) -> UnitDomain;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "inch")]
    Inch,
    #[serde(rename = "mile")]
    Mile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "c")]
    Celsius,
    #[serde(rename = "f")]
    Fahrenheit,
    #[serde(rename = "k")]
    Kelvin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyUnit {
    #[serde(rename = "usd")]
    Usd,
    #[serde(rename = "eur")]
    Eur,
    #[serde(rename = "gbp")]
    Gbp,
}

/// Any unit from any domain
#[enum_dispatch(UnitInfo)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Length(LengthUnit),
    Temperature(TemperatureUnit),
    Currency(CurrencyUnit),
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Meter,
        LengthUnit::Centimeter,
        LengthUnit::Inch,
        LengthUnit::Mile,
    ];

    /// Meters per unit
    pub const fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => METERS_PER_METER,
            LengthUnit::Centimeter => METERS_PER_CENTIMETER,
            LengthUnit::Inch => METERS_PER_INCH,
            LengthUnit::Mile => METERS_PER_MILE,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            LengthUnit::Meter => &["meter", "meters", "metre", "metres"],
            LengthUnit::Centimeter => &["centimeter", "centimeters", "centimetre", "centimetres"],
            LengthUnit::Inch => &["in", "inches", "\""],
            LengthUnit::Mile => &["mi", "miles"],
        }
    }
}

impl UnitInfo for LengthUnit {
    fn key(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Inch => "inch",
            LengthUnit::Mile => "mile",
        }
    }

    // Length selectors display the key itself
    fn label(&self) -> &'static str {
        self.key()
    }

    fn name(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "Meters",
            LengthUnit::Centimeter => "Centimeters",
            LengthUnit::Inch => "Inches",
            LengthUnit::Mile => "Miles",
        }
    }

    fn domain(&self) -> UnitDomain {
        UnitDomain::Length
    }
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// Convert a value in this unit to Celsius
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
        }
    }

    /// Convert a Celsius value to this unit
    pub fn from_base(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            // Explicit parentheses: (c * 9/5) + 32
            TemperatureUnit::Fahrenheit => (celsius * 9.0 / 5.0) + FAHRENHEIT_OFFSET,
            TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            TemperatureUnit::Celsius => &["celsius", "°c", "℃"],
            TemperatureUnit::Fahrenheit => &["fahrenheit", "°f", "℉"],
            TemperatureUnit::Kelvin => &["kelvin", "kelvins"],
        }
    }
}

impl UnitInfo for TemperatureUnit {
    fn key(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "c",
            TemperatureUnit::Fahrenheit => "f",
            TemperatureUnit::Kelvin => "k",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    fn domain(&self) -> UnitDomain {
        UnitDomain::Temperature
    }
}

impl CurrencyUnit {
    pub const ALL: [CurrencyUnit; 3] = [CurrencyUnit::Usd, CurrencyUnit::Eur, CurrencyUnit::Gbp];

    /// Units per US dollar
    pub const fn rate(self) -> f64 {
        match self {
            CurrencyUnit::Usd => RATE_USD,
            CurrencyUnit::Eur => RATE_EUR,
            CurrencyUnit::Gbp => RATE_GBP,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            CurrencyUnit::Usd => &["$", "dollar", "dollars", "us dollar"],
            CurrencyUnit::Eur => &["€", "euro", "euros"],
            CurrencyUnit::Gbp => &["£", "pound", "pounds", "british pound"],
        }
    }
}

impl UnitInfo for CurrencyUnit {
    fn key(&self) -> &'static str {
        match self {
            CurrencyUnit::Usd => "usd",
            CurrencyUnit::Eur => "eur",
            CurrencyUnit::Gbp => "gbp",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CurrencyUnit::Usd => "USD",
            CurrencyUnit::Eur => "EUR",
            CurrencyUnit::Gbp => "GBP",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            CurrencyUnit::Usd => "US Dollar",
            CurrencyUnit::Eur => "Euro",
            CurrencyUnit::Gbp => "British Pound",
        }
    }

    fn domain(&self) -> UnitDomain {
        UnitDomain::Currency
    }
}

// ============================================================================
// Key lookup
// ============================================================================

/// Alias registry built once on first lookup. Keys are lowercase.
static UNIT_REGISTRY: Lazy<HashMap<&'static str, Unit>> = Lazy::new(|| {
    let mut registry = HashMap::new();

    for unit in LengthUnit::ALL {
        registry.insert(unit.key(), Unit::Length(unit));
        for alias in unit.aliases() {
            registry.insert(*alias, Unit::Length(unit));
        }
    }
    for unit in TemperatureUnit::ALL {
        registry.insert(unit.key(), Unit::Temperature(unit));
        for alias in unit.aliases() {
            registry.insert(*alias, Unit::Temperature(unit));
        }
    }
    for unit in CurrencyUnit::ALL {
        registry.insert(unit.key(), Unit::Currency(unit));
        for alias in unit.aliases() {
            registry.insert(*alias, Unit::Currency(unit));
        }
    }

    registry
});

fn lookup(key: &str) -> Option<Unit> {
    UNIT_REGISTRY.get(key.trim().to_lowercase().as_str()).copied()
}

impl Unit {
    /// All units in table order, grouped by domain
    pub fn all() -> Vec<Unit> {
        LengthUnit::ALL
            .into_iter()
            .map(Unit::from)
            .chain(TemperatureUnit::ALL.into_iter().map(Unit::from))
            .chain(CurrencyUnit::ALL.into_iter().map(Unit::from))
            .collect()
    }

    /// Resolve a key that must belong to `domain`.
    ///
    /// A key known in another domain is a `DomainMismatch`; a key known
    /// nowhere is an `UnknownUnit`.
    pub fn parse_in(domain: UnitDomain, key: &str) -> EngineResult<Unit> {
        match lookup(key) {
            Some(unit) if unit.domain() == domain => Ok(unit),
            Some(unit) => Err(ConversionError::DomainMismatch {
                expected: domain,
                found: unit.domain(),
                unit: key.to_string(),
            }),
            None => Err(ConversionError::unknown_unit(Some(domain), key)),
        }
    }
}

impl FromStr for Unit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).ok_or_else(|| ConversionError::unknown_unit(None, s))
    }
}

impl FromStr for LengthUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match lookup(s) {
            Some(Unit::Length(unit)) => Ok(unit),
            _ => Err(ConversionError::unknown_unit(Some(UnitDomain::Length), s)),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match lookup(s) {
            Some(Unit::Temperature(unit)) => Ok(unit),
            _ => Err(ConversionError::unknown_unit(Some(UnitDomain::Temperature), s)),
        }
    }
}

impl FromStr for CurrencyUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match lookup(s) {
            Some(Unit::Currency(unit)) => Ok(unit),
            _ => Err(ConversionError::unknown_unit(Some(UnitDomain::Currency), s)),
        }
    }
}

// ============================================================================
// Table accessors
// ============================================================================

pub fn length_factor_of(unit: LengthUnit) -> f64 {
    unit.factor()
}

/// Meters-per-unit factor for a selector key
pub fn length_factor_of_key(key: &str) -> EngineResult<f64> {
    Ok(key.parse::<LengthUnit>()?.factor())
}

pub fn currency_rate_of(unit: CurrencyUnit) -> f64 {
    unit.rate()
}

/// Units-per-USD rate for a selector key
pub fn currency_rate_of_key(key: &str) -> EngineResult<f64> {
    Ok(key.parse::<CurrencyUnit>()?.rate())
}

pub fn temperature_to_base(unit: TemperatureUnit, value: f64) -> f64 {
    unit.to_base(value)
}

pub fn temperature_from_base(unit: TemperatureUnit, celsius: f64) -> f64 {
    unit.from_base(celsius)
}

pub fn temperature_to_base_key(key: &str, value: f64) -> EngineResult<f64> {
    Ok(key.parse::<TemperatureUnit>()?.to_base(value))
}

pub fn temperature_from_base_key(key: &str, celsius: f64) -> EngineResult<f64> {
    Ok(key.parse::<TemperatureUnit>()?.from_base(celsius))
}
