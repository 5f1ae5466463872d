//! Data models for the WeatherBot application
//!
//! This module contains the core domain models organized by concern:
//! - Facts: structures recovered from a free-text weather summary
//! - Records: provider weather records and the per-city snapshot

pub mod facts;
pub mod records;

// Re-export all public types for convenient access
pub use facts::{CurrentFacts, ExtractedWeather, ForecastDay, TempStats};
pub use records::{Condition, CurrentRecord, ForecastEntry, ForecastRecord, WeatherSnapshot};
