//! Provider weather records (OpenWeather current and 5-day forecast schema)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::facts::UNKNOWN_CONDITION;

/// `main` block shared by current and forecast records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    /// Temperature in Celsius (metric units)
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    /// Relative humidity in percent
    pub humidity: u32,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Condition group, e.g. "Rain"
    #[serde(default)]
    pub main: String,
    /// Human-readable description, e.g. "light rain"
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed in m/s
    pub speed: f64,
    #[serde(default)]
    pub deg: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SysInfo {
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
}

/// Current weather record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentRecord {
    /// City name
    pub name: String,
    pub sys: SysInfo,
    pub main: MainReadings,
    pub wind: Wind,
    pub weather: Vec<Condition>,
    /// Visibility in metres
    pub visibility: u32,
}

impl CurrentRecord {
    /// Description of the first reported condition
    #[must_use]
    pub fn description(&self) -> &str {
        self.weather
            .first()
            .map_or(UNKNOWN_CONDITION, |condition| condition.description.as_str())
    }
}

/// One 3-hourly slot of the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp of the slot
    #[serde(default)]
    pub dt: i64,
    #[serde(default)]
    pub dt_txt: Option<String>,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

/// 5-day / 3-hour forecast record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub list: Vec<ForecastEntry>,
}

impl ForecastRecord {
    /// Temperatures of every slot, in order
    #[must_use]
    pub fn temperatures(&self) -> Vec<f64> {
        self.list.iter().map(|entry| entry.main.temp).collect()
    }

    /// Humidity of every slot, in order
    #[must_use]
    pub fn humidities(&self) -> Vec<f64> {
        self.list
            .iter()
            .map(|entry| f64::from(entry.main.humidity))
            .collect()
    }
}

/// Current and forecast records stored together for one city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentRecord,
    pub forecast: ForecastRecord,
    /// When the records were fetched
    pub retrieved_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    #[must_use]
    pub fn new(current: CurrentRecord, forecast: ForecastRecord) -> Self {
        Self {
            current,
            forecast,
            retrieved_at: Utc::now(),
        }
    }

    /// Check if the snapshot is younger than the given TTL
    #[must_use]
    pub fn is_fresh(&self, ttl_minutes: u32) -> bool {
        let age = Utc::now() - self.retrieved_at;
        age.num_minutes() < i64::from(ttl_minutes)
    }
}
