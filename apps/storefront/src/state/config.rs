//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Config file (`storefront.toml`)
//! 3. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Demo Store"
//! currency_code = "USD"
//! currency_symbol = "$"
//! catalog_url = "http://localhost:3000/products"
//! log_filter = "info,storefront=debug"
//! ```
//!
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storefront_core::Money;
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store name shown in the page header.
    pub store_name: String,

    /// Currency code (ISO 4217) sent to the payment processor.
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Where the product listing is fetched from.
    pub catalog_url: Option<String>,

    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "Storefront".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            catalog_url: None,
            log_filter: "info,storefront=debug".to_string(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from a file (or the platform default path),
    /// then applies environment overrides.
    ///
    /// A missing file is not an error: defaults are used.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// `load` with an explicit override lookup in place of the process
    /// environment.
    fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading storefront config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML file without applying overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let code = &self.currency_code;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::Invalid(format!(
                "currency_code must be a 3-letter ISO 4217 code, got '{}'",
                code
            )));
        }

        if self.currency_symbol.is_empty() {
            return Err(ConfigError::Invalid(
                "currency_symbol must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Formats an amount with the configured currency symbol.
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Applies `STOREFRONT_*` overrides from a lookup function.
    ///
    /// `load` passes `std::env::var`; tests pass a map.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("STOREFRONT_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(code) = lookup("STOREFRONT_CURRENCY_CODE") {
            debug!(currency = %code, "Overriding currency from environment");
            self.currency_code = code.to_uppercase();
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(url) = lookup("STOREFRONT_CATALOG_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.catalog_url = Some(url);
        }

        if let Some(filter) = lookup("STOREFRONT_LOG") {
            self.log_filter = filter;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}
