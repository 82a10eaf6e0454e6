use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs;
use ts_rs::TS;

use crate::core::features::unit_tables::Unit;
use crate::shared::errors::{SettingsError, SettingsResult};
use crate::shared::types::UnitDomain;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConverterSettings {
    pub default_domain: UnitDomain,
    pub length: UnitPair,
    pub temperature: UnitPair,
    pub currency: UnitPair,
}

/// Initial from/to selector keys for one converter section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitPair {
    pub from: String,
    pub to: String,
}

impl UnitPair {
    fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            default_domain: UnitDomain::Length,
            length: UnitPair::new("m", "cm"),
            temperature: UnitPair::new("c", "f"),
            currency: UnitPair::new("usd", "eur"),
        }
    }
}

impl ConverterSettings {
    pub fn get_settings_path() -> SettingsResult<PathBuf> {
        ProjectDirs::from("com", "antigravity", "unit-converter")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or(SettingsError::ConfigDir)
    }

    pub fn pair_for(&self, domain: UnitDomain) -> &UnitPair {
        match domain {
            UnitDomain::Length => &self.length,
            UnitDomain::Temperature => &self.temperature,
            UnitDomain::Currency => &self.currency,
        }
    }

    /// Every default key must resolve inside its own section
    pub fn validate(&self) -> SettingsResult<()> {
        for domain in UnitDomain::ALL {
            let pair = self.pair_for(domain);
            Unit::parse_in(domain, &pair.from)?;
            Unit::parse_in(domain, &pair.to)?;
        }
        Ok(())
    }

    pub async fn load() -> SettingsResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path).await
    }

    /// Load settings from `path`, writing defaults there if the file is missing
    pub async fn load_from(path: &Path) -> SettingsResult<Self> {
        if !fs::try_exists(path).await? {
            let settings = Self::default();
            settings.save_to(path).await?;
            tracing::info!(path = %path.display(), "wrote default converter settings");
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub async fn save(&self) -> SettingsResult<()> {
        let path = Self::get_settings_path()?;
        self.save_to(&path).await
    }

    pub async fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}
