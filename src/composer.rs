//! Answer composition for each intent category
//!
//! Handlers read the lower-cased question and the extracted facts and always
//! return a sentence. Missing facts turn into an apology, never an error.

use crate::extraction::patterns;
use crate::intent::{self, Intent};
use crate::models::ExtractedWeather;
use crate::scoring;

/// Signature shared by every intent handler
pub type Handler = fn(&str, &ExtractedWeather) -> String;

/// Answer for a summary that is empty or missing
pub const NO_WEATHER_DATA: &str =
    "I don't have weather data available. Please search for a city first.";

/// Compose the answer for `intent`
#[must_use]
pub fn compose(intent: Intent, query: &str, facts: &ExtractedWeather) -> String {
    respond(intent, &query.to_lowercase(), facts)
}

/// Run the handler registered for `intent` on an already lower-cased query
pub(crate) fn respond(intent: Intent, query_lower: &str, facts: &ExtractedWeather) -> String {
    match intent::rule_for(intent) {
        Some(rule) => (rule.respond)(query_lower, facts),
        None => fallback(query_lower, facts),
    }
}

pub fn rain_need(_query: &str, facts: &ExtractedWeather) -> String {
    let rainy = scoring::rainy_days(&facts.forecast);
    if rainy.is_empty() {
        return "No, you probably don't need an umbrella this week. The forecast shows clear or partly cloudy conditions with no significant rain expected.".to_string();
    }

    let days = rainy
        .iter()
        .map(|day| day.day.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Yes, you might need an umbrella! I see rain in the forecast for: {days}. The weather shows {} rainy days this week.",
        rainy.len()
    )
}

pub fn summary(_query: &str, facts: &ExtractedWeather) -> String {
    if facts.forecast.is_empty() {
        return "I can't provide a detailed summary without forecast data. Please search for a city first.".to_string();
    }

    let mut summary = "Here's a 5-day weather summary: ".to_string();
    for day in &facts.forecast {
        summary.push_str(&format!("{}: {}°C, {}. ", day.day, day.temp, day.weather));
    }
    summary
}

pub fn best_outdoor_day(_query: &str, facts: &ExtractedWeather) -> String {
    match scoring::best_outdoor_day(&facts.forecast) {
        Some(day) => format!(
            "The best day for outdoor activities looks like {} with {}°C and {}. It has comfortable conditions for outdoor activities.",
            day.day, day.temp, day.weather
        ),
        None => "I can't determine the best day without detailed forecast data. Please search for a city first.".to_string(),
    }
}

pub fn temperature_stats(_query: &str, facts: &ExtractedWeather) -> String {
    let stats = &facts.stats;
    if stats.is_empty() {
        return "I can't provide temperature statistics without forecast data. Please search for a city first.".to_string();
    }

    let mut response = "Temperature statistics: ".to_string();
    let ordered = [
        ("Highest", stats.highest),
        ("Average", stats.average),
        ("Lowest", stats.lowest),
    ];
    for (label, value) in ordered {
        if let Some(value) = value {
            response.push_str(&format!("{label}: {value}°C. "));
        }
    }
    response
}

pub fn packing(_query: &str, facts: &ExtractedWeather) -> String {
    if facts.stats.is_empty() || facts.current.is_empty() {
        return "I can't provide packing suggestions without detailed weather data. Please search for a city first.".to_string();
    }

    let suggestions =
        scoring::packing_suggestions(&facts.current, &facts.stats, &facts.forecast);
    if suggestions.is_empty() {
        return "The weather looks mild and comfortable. Pack regular clothing suitable for the current season.".to_string();
    }

    format!(
        "Based on the weather forecast, you should pack: {}. The temperature will range from {}°C to {}°C.",
        suggestions.join(", "),
        or_unknown(facts.stats.lowest),
        or_unknown(facts.stats.highest)
    )
}

pub fn rain_frequency(query: &str, facts: &ExtractedWeather) -> String {
    let rainy_count = scoring::rainy_days(&facts.forecast).len();

    match patterns::more_than_threshold(query) {
        Some(threshold) if rainy_count as u64 > threshold => format!(
            "Yes, it will rain more than {threshold} times this week. I count {rainy_count} rainy days in the forecast."
        ),
        Some(threshold) => format!(
            "No, it won't rain more than {threshold} times this week. I count {rainy_count} rainy days in the forecast."
        ),
        None => format!("There are {rainy_count} rainy days in the forecast this week."),
    }
}

pub fn historical_comparison(_query: &str, _facts: &ExtractedWeather) -> String {
    "I can't compare to last week's weather as I only have current forecast data. This feature would require historical weather data integration.".to_string()
}

pub fn fallback(_query: &str, facts: &ExtractedWeather) -> String {
    let current = &facts.current;
    if current.is_empty() {
        return "I can help with weather information! Try asking about temperature, rain, outdoor activities, or packing suggestions.".to_string();
    }

    format!(
        "Current weather: {}°C, {}. Humidity: {}%.",
        or_unknown(current.temp),
        current.weather.as_deref().unwrap_or("unknown conditions"),
        or_unknown(current.humidity)
    )
}

fn or_unknown(value: Option<u32>) -> String {
    value.map_or_else(|| "unknown".to_string(), |v| v.to_string())
}
