//! Keyword responder over provider weather records
//!
//! Branches are tested in a fixed order against the lower-cased question.
//! Values are rounded half-to-even, matching the dashboard figures users see
//! next to the chat.

use tracing::debug;

use crate::models::{CurrentRecord, ForecastRecord};

const NO_FORECAST: &str =
    "I don't have forecast data for that yet. Please search for a city first.";

const HELP: &str = "I can help you with weather information! Ask me about temperature (current, highest, lowest, average), humidity, wind speed, weather conditions, visibility, rain, or request a weather summary.";

const DEFAULT_REPLY: &str = "I'm here to help with weather information! You can ask me about temperature, humidity, wind, weather conditions, or request a summary. What would you like to know?";

fn mentions_any(message: &str, words: &[&str]) -> bool {
    words.iter().any(|word| message.contains(word))
}

/// Round to the nearest integer, ties to even
fn round(value: f64) -> i64 {
    value.round_ties_even() as i64
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Convert m/s to whole km/h
fn wind_kmh(speed_ms: f64) -> i64 {
    round(speed_ms * 3.6)
}

/// Answer a question from current and forecast records
#[tracing::instrument(level = "debug", skip(current, forecast), fields(city = %current.name, slots = forecast.list.len()))]
pub fn answer_from_structured_records(
    query: &str,
    current: &CurrentRecord,
    forecast: &ForecastRecord,
) -> String {
    let message = query.to_lowercase();
    let message = message.as_str();

    if mentions_any(message, &["temperature", "temp"]) {
        debug!("Temperature question");
        return temperature(message, current, forecast);
    }

    if message.contains("humidity") {
        debug!("Humidity question");
        return humidity(message, current, forecast);
    }

    if message.contains("wind") {
        return format!(
            "The current wind speed is {} km/h.",
            wind_kmh(current.wind.speed)
        );
    }

    if mentions_any(message, &["weather", "condition"]) {
        return format!("The current weather is {}.", current.description());
    }

    if message.contains("visibility") {
        let visibility_km = f64::from(current.visibility) / 1000.0;
        return format!("The current visibility is {visibility_km:.1} km.");
    }

    if mentions_any(message, &["rain", "precipitation"]) {
        let description = current.description();
        return if description.to_lowercase().contains("rain") {
            format!(
                "Yes, there is rain in the forecast. The current conditions show {description}."
            )
        } else {
            format!("No rain is currently forecasted. The weather is {description}.")
        };
    }

    if mentions_any(message, &["summary", "overview"]) {
        return format!(
            "Here's a weather summary for {}, {}: Current temperature is {}°C with {}. Humidity is {}% and wind speed is {} km/h.",
            current.name,
            current.sys.country,
            round(current.main.temp),
            current.description(),
            current.main.humidity,
            wind_kmh(current.wind.speed)
        );
    }

    if mentions_any(message, &["help", "what can you do"]) {
        return HELP.to_string();
    }

    DEFAULT_REPLY.to_string()
}

fn temperature(message: &str, current: &CurrentRecord, forecast: &ForecastRecord) -> String {
    let temps = forecast.temperatures();
    let current_temp = round(current.main.temp);

    if mentions_any(message, &["current", "now"]) {
        return format!("The current temperature is {current_temp}°C.");
    }

    if mentions_any(message, &["highest", "max"]) {
        return max(&temps).map_or_else(
            || NO_FORECAST.to_string(),
            |t| format!("The highest temperature in the forecast is {}°C.", round(t)),
        );
    }

    if mentions_any(message, &["lowest", "min"]) {
        return min(&temps).map_or_else(
            || NO_FORECAST.to_string(),
            |t| format!("The lowest temperature in the forecast is {}°C.", round(t)),
        );
    }

    if mentions_any(message, &["average", "avg"]) {
        return mean(&temps).map_or_else(
            || NO_FORECAST.to_string(),
            |t| format!("The average temperature is {}°C.", round(t)),
        );
    }

    match (min(&temps), max(&temps)) {
        (Some(low), Some(high)) => format!(
            "The current temperature is {current_temp}°C. The forecast shows temperatures ranging from {}°C to {}°C.",
            round(low),
            round(high)
        ),
        _ => format!("The current temperature is {current_temp}°C."),
    }
}

fn humidity(message: &str, current: &CurrentRecord, forecast: &ForecastRecord) -> String {
    let current_humidity = current.main.humidity;
    let average = mean(&forecast.humidities()).map(round);

    if mentions_any(message, &["current", "now"]) {
        return format!("The current humidity is {current_humidity}%.");
    }

    if mentions_any(message, &["average", "avg"]) {
        return average.map_or_else(
            || NO_FORECAST.to_string(),
            |avg| format!("The average humidity is {avg}%."),
        );
    }

    match average {
        Some(avg) => format!(
            "The current humidity is {current_humidity}% and the average humidity is {avg}%."
        ),
        None => format!("The current humidity is {current_humidity}%."),
    }
}
