//! Facts recovered from a text weather summary
//!
//! Every field is allowed to be missing. Handlers treat absence as
//! "unknown" and never as an error.

use serde::{Deserialize, Serialize};

/// Description used for a forecast day whose condition could not be read
pub const UNKNOWN_CONDITION: &str = "unknown";

/// Current conditions taken from the header block of a summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentFacts {
    /// Temperature in Celsius
    pub temp: Option<u32>,
    /// Free-text condition, e.g. "light rain"
    pub weather: Option<String>,
    /// Relative humidity in percent
    pub humidity: Option<u32>,
}

impl CurrentFacts {
    /// True when no field could be extracted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temp.is_none() && self.weather.is_none() && self.humidity.is_none()
    }
}

/// One line of the 5-day forecast block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Label as written in the summary, e.g. "Mon (Aug 5)"
    pub day: String,
    /// Temperature in Celsius
    pub temp: u32,
    /// Condition text, [`UNKNOWN_CONDITION`] when missing
    pub weather: String,
    /// Relative humidity in percent, 0 when missing
    pub humidity: u32,
}

impl ForecastDay {
    #[must_use]
    pub fn new(day: impl Into<String>, temp: u32, weather: impl Into<String>, humidity: u32) -> Self {
        Self {
            day: day.into(),
            temp,
            weather: weather.into(),
            humidity,
        }
    }

    /// Case-insensitive check against the condition text
    #[must_use]
    pub fn weather_mentions(&self, needle: &str) -> bool {
        self.weather.to_lowercase().contains(needle)
    }
}

/// Forecast temperature statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempStats {
    pub highest: Option<u32>,
    pub lowest: Option<u32>,
    pub average: Option<u32>,
}

impl TempStats {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.highest.is_none() && self.lowest.is_none() && self.average.is_none()
    }
}

/// Everything one extraction pass recovers from a summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedWeather {
    /// City named in the "Current Weather in" heading
    pub city: Option<String>,
    pub current: CurrentFacts,
    /// Forecast days in summary order
    pub forecast: Vec<ForecastDay>,
    pub stats: TempStats,
}
