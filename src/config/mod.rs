#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{InventoryError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_range, validate_url, Validate,
};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_TITLE: &str = "Vehicle Inventory";
pub const DEFAULT_CONFIG_FILE: &str = "inventory.toml";

/// Effective settings after layering defaults, the TOML file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub api_base_url: String,
    pub timeout_seconds: u64,
    pub title: String,
    pub log_level: Option<String>,
    pub log_format: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            title: DEFAULT_TITLE.to_string(),
            log_level: None,
            log_format: "compact".to_string(),
        }
    }
}

impl InventoryConfig {
    /// Layers the file over the defaults. A key that is present but blank
    /// (`base_url = ""`, or a `${VAR}` set to an empty value) is an error
    /// rather than a silent fallback.
    pub fn from_toml(file: TomlConfig) -> Result<Self> {
        let defaults = Self::default();
        let api_base_url = match file.api.base_url {
            Some(url) if url.trim().is_empty() => {
                return Err(InventoryError::MissingConfigError {
                    field: "api.base_url".to_string(),
                })
            }
            Some(url) => url,
            None => defaults.api_base_url,
        };
        Ok(Self {
            api_base_url,
            timeout_seconds: file.api.timeout_seconds.unwrap_or(defaults.timeout_seconds),
            title: file.display.title.unwrap_or(defaults.title),
            log_level: file.logging.level,
            log_format: file.logging.format.unwrap_or(defaults.log_format),
        })
    }

    pub fn with_api_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api_base_url = url;
        }
        self
    }

    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.log_format).unwrap_or_default()
    }
}

impl ConfigProvider for InventoryConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for InventoryConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api_base_url)?;
        validate_range("api.timeout_seconds", self.timeout_seconds, 1, 300)?;
        validate_non_empty_string("display.title", &self.title)?;
        validate_one_of("logging.format", &self.log_format, &["compact", "json"])?;
        Ok(())
    }
}
