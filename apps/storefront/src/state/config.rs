//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`HIVE_*`)
//! 2. Config file (`storefront.toml`)
//! 3. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Пасека"
//! currency_symbol = "₽"
//! storage_key = "cart"
//! data_dir = "/var/lib/storefront"
//! notification_secs = 3
//! ```
//!
//! Configuration is read-only after initialization.

use std::path::{Path, PathBuf};

use hive_core::{Money, DEFAULT_CART_KEY};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Store name (shown in the header and on receipts)
    pub store_name: String,

    /// Currency symbol appended to every price
    pub currency_symbol: String,

    /// Storage key the cart is persisted under
    pub storage_key: String,

    /// Directory for the cart file; platform data dir when unset
    pub data_dir: Option<PathBuf>,

    /// How long a toast stays visible
    pub notification_secs: u64,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Пасека".to_string(),
            currency_symbol: "₽".to_string(),
            storage_key: DEFAULT_CART_KEY.to_string(),
            data_dir: None,
            notification_secs: 3,
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading storefront config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".into()));
        }

        if self.notification_secs == 0 {
            return Err(ConfigError::Invalid(
                "notification_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies `HIVE_*` overrides from a variable lookup.
    ///
    /// ## Variables
    /// - `HIVE_STORE_NAME`
    /// - `HIVE_CART_KEY`
    /// - `HIVE_DATA_DIR`
    /// - `HIVE_NOTIFICATION_SECS`
    pub fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = var("HIVE_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(key) = var("HIVE_CART_KEY") {
            debug!(key = %key, "Overriding storage key from environment");
            self.storage_key = key;
        }

        if let Some(dir) = var("HIVE_DATA_DIR") {
            debug!(dir = %dir, "Overriding data dir from environment");
            self.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(secs) = var("HIVE_NOTIFICATION_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) => self.notification_secs = secs,
                Err(_) => warn!(value = %secs, "Ignoring invalid HIVE_NOTIFICATION_SECS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "hive", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Formats a price for display.
    ///
    /// ## Example
    /// ```rust
    /// use hive_core::Money;
    /// use storefront_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(Money::from_minor(650)), "650 ₽");
    /// ```
    pub fn format_price(&self, amount: Money) -> String {
        format!("{} {}", amount, self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_price() {
        let config = ConfigState::default();
        assert_eq!(config.format_price(Money::from_minor(1300)), "1300 ₽");
        assert_eq!(config.format_price(Money::zero()), "0 ₽");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ConfigState = toml::from_str(r#"store_name = "Медовый двор""#).unwrap();
        assert_eq!(config.store_name, "Медовый двор");
        assert_eq!(config.storage_key, "cart");
        assert_eq!(config.notification_secs, 3);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "storage_key = \"cart-v2\"\nnotification_secs = 5\n").unwrap();

        let config = ConfigState::from_file(&path).unwrap();
        assert_eq!(config.storage_key, "cart-v2");
        assert_eq!(config.notification_secs, 5);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "notification_secs = \"soon\"").unwrap();

        assert!(matches!(
            ConfigState::from_file(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("HIVE_STORE_NAME", "Ulei"),
            ("HIVE_CART_KEY", "basket"),
            ("HIVE_DATA_DIR", "/tmp/hive"),
            ("HIVE_NOTIFICATION_SECS", "oops"),
        ]
        .into_iter()
        .collect();

        let mut config = ConfigState::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.store_name, "Ulei");
        assert_eq!(config.storage_key, "basket");
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/hive")));
        assert_eq!(config.notification_secs, 3);
    }

    #[test]
    fn test_validation() {
        let mut config = ConfigState::default();
        assert!(config.validate().is_ok());

        config.storage_key = " ".to_string();
        assert!(config.validate().is_err());

        config.storage_key = "cart".to_string();
        config.notification_secs = 0;
        assert!(config.validate().is_err());
    }
}
