//! `WeatherBot` - natural-language answers to weather questions
//!
//! Two responders live here. [`answer_from_structured_records`] works on
//! provider JSON records with keyword templates. [`answer_from_text_summary`]
//! recovers facts from a free-text summary, classifies the question and
//! composes an answer. [`WeatherAssistant`] ties both to an optional
//! generative backend.

pub mod assistant;
pub mod composer;
pub mod config;
pub mod engine;
pub mod error;
pub mod extraction;
pub mod intent;
pub mod logging;
pub mod models;
pub mod scoring;
pub mod structured;

// Re-export core types for public API
pub use assistant::{ChatReply, ResponseGenerator, WeatherAssistant};
pub use config::WeatherBotConfig;
pub use engine::answer_from_text_summary;
pub use error::WeatherBotError;
pub use extraction::extract;
pub use intent::{Intent, classify};
pub use models::{
    CurrentFacts, CurrentRecord, ExtractedWeather, ForecastDay, ForecastRecord, TempStats,
    WeatherSnapshot,
};
pub use structured::answer_from_structured_records;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherBotError>;
