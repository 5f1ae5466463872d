//! Derived metrics over extracted forecast facts

use crate::models::{CurrentFacts, ForecastDay, TempStats};

/// Condition words that count a day as rainy
pub const RAIN_WORDS: [&str; 3] = ["rain", "drizzle", "shower"];

/// Comfortable temperature band for outdoor plans, in Celsius
const COMFORT_RANGE: std::ops::RangeInclusive<u32> = 15..=25;

/// Days whose condition mentions rain, drizzle or showers, in forecast order
#[must_use]
pub fn rainy_days(forecast: &[ForecastDay]) -> Vec<&ForecastDay> {
    forecast
        .iter()
        .filter(|day| RAIN_WORDS.iter().any(|word| day.weather_mentions(word)))
        .collect()
}

/// Outdoor-friendliness of a day: clear or sunny +3, comfortable
/// temperature +2, humidity below 70% +1.
#[must_use]
pub fn outdoor_score(day: &ForecastDay) -> u32 {
    let mut score = 0;
    if day.weather_mentions("clear") || day.weather_mentions("sunny") {
        score += 3;
    }
    if COMFORT_RANGE.contains(&day.temp) {
        score += 2;
    }
    if day.humidity < 70 {
        score += 1;
    }
    score
}

/// Highest scoring day; the earliest wins a tie.
#[must_use]
pub fn best_outdoor_day(forecast: &[ForecastDay]) -> Option<&ForecastDay> {
    let mut best: Option<(&ForecastDay, u32)> = None;
    for day in forecast {
        let score = outdoor_score(day);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((day, score));
        }
    }
    best.map(|(day, _)| day)
}

/// Clothing suggestions for the forecast.
///
/// Missing statistics and humidity compare as 0.
#[must_use]
pub fn packing_suggestions(
    current: &CurrentFacts,
    stats: &TempStats,
    forecast: &[ForecastDay],
) -> Vec<&'static str> {
    let mut suggestions = Vec::new();
    if stats.highest.unwrap_or(0) > 25 {
        suggestions.push("light clothing");
    }
    if stats.lowest.unwrap_or(0) < 15 {
        suggestions.push("a jacket or sweater");
    }
    if forecast.iter().any(|day| day.weather_mentions("rain")) {
        suggestions.push("an umbrella or raincoat");
    }
    if current.humidity.unwrap_or(0) > 70 {
        suggestions.push("moisture-wicking clothes");
    }
    suggestions
}
