//! Configuration management for `WeatherBot`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::WeatherBotError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `WeatherBot` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherBotConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Chat assistant settings
    pub assistant: AssistantConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Chat assistant settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// City named when no records are supplied
    #[serde(default = "default_city")]
    pub default_city: String,
    /// Word limit requested from the generative backend
    #[serde(default = "default_max_response_words")]
    pub max_response_words: u32,
    /// How long a stored weather snapshot counts as fresh
    #[serde(default = "default_snapshot_ttl")]
    pub snapshot_ttl_minutes: u32,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_city() -> String {
    "London".to_string()
}

fn default_max_response_words() -> u32 {
    150
}

fn default_snapshot_ttl() -> u32 {
    60
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            default_city: default_city(),
            max_response_words: default_max_response_words(),
            snapshot_ttl_minutes: default_snapshot_ttl(),
        }
    }
}

impl WeatherBotConfig {
    /// Load configuration from `config_path`, or the default location, plus
    /// environment overrides
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // WEATHERBOT_ASSISTANT__DEFAULT_CITY=Paris
        builder = builder.add_source(
            Environment::with_prefix("WEATHERBOT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: WeatherBotConfig = settings
            .try_deserialize()
            .with_context(|| format!("Failed to deserialize configuration from {}", config_file.display()))?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("weatherbot").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.assistant.default_city.trim().is_empty() {
            self.assistant.default_city = default_city();
        }
        if self.assistant.max_response_words == 0 {
            self.assistant.max_response_words = default_max_response_words();
        }
        if self.assistant.snapshot_ttl_minutes == 0 {
            self.assistant.snapshot_ttl_minutes = default_snapshot_ttl();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.assistant.max_response_words > 1000 {
            return Err(WeatherBotError::config(
                "Assistant response word limit cannot exceed 1000",
            )
            .into());
        }

        if self.assistant.snapshot_ttl_minutes > 1440 {
            return Err(WeatherBotError::config(
                "Snapshot TTL cannot exceed 1440 minutes (1 day)",
            )
            .into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WeatherBotError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WeatherBotError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
