//! Error types and handling for the `WeatherBot` application
//!
//! The answering engine itself never fails; these errors only surface from
//! configuration loading and from reading inputs off disk in the CLI.

use thiserror::Error;

/// Main error type for the `WeatherBot` application
#[derive(Error, Debug)]
pub enum WeatherBotError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Weather record decoding errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl WeatherBotError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherBotError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            WeatherBotError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            WeatherBotError::Io { .. } => {
                "File operation failed. Please check the file path and permissions.".to_string()
            }
            WeatherBotError::Json { .. } => {
                "Weather data could not be read. Please provide current and forecast records in the OpenWeather format."
                    .to_string()
            }
            WeatherBotError::General { message } => message.clone(),
        }
    }
}
