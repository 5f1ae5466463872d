//! Line-oriented extraction of weather facts from a text summary
//!
//! The summary format looks like:
//!
//! ```text
//! Current Weather in London, GB:
//! - Temperature: 18°C (feels like 17°C)
//! - Weather: light rain
//! - Humidity: 80%
//!
//! 5-Day Forecast:
//! Mon (Aug 5): 20°C, light rain, 75% humidity
//! Tue (Aug 6): 24°C, clear sky, 55% humidity
//!
//! Temperature Statistics:
//! - Highest: 24°C
//! - Lowest: 12°C
//! - Average: 18°C
//! ```
//!
//! Extraction is a single forward pass and never fails. Lines or fields that
//! do not match are skipped.

pub mod patterns;
pub mod state;

use tracing::{debug, trace};

use crate::models::facts::UNKNOWN_CONDITION;
use crate::models::{ExtractedWeather, ForecastDay};
pub use state::{LineAction, Marker, ParserState};

/// Recover current facts, forecast days and temperature statistics
#[tracing::instrument(level = "debug", skip_all)]
pub fn extract(summary: &str) -> ExtractedWeather {
    let mut extracted = ExtractedWeather::default();
    let mut state = ParserState::default();

    for raw in summary.lines() {
        let line = raw.trim();
        let (next, action) = state::transition(state, Marker::detect(line));
        state = next;
        apply(&mut extracted, action, line);
    }

    debug!(
        city = extracted.city.as_deref().unwrap_or("-"),
        forecast_days = extracted.forecast.len(),
        has_current = !extracted.current.is_empty(),
        has_stats = !extracted.stats.is_empty(),
        "Extracted weather facts"
    );

    extracted
}

fn apply(extracted: &mut ExtractedWeather, action: LineAction, line: &str) {
    let current = &mut extracted.current;
    let stats = &mut extracted.stats;

    let hit = match action {
        LineAction::City => set(&mut extracted.city, city_name(line)),
        LineAction::CurrentTemp => set(&mut current.temp, patterns::celsius(line)),
        LineAction::CurrentWeather => set(
            &mut current.weather,
            patterns::weather_field(line).map(str::to_string),
        ),
        LineAction::CurrentHumidity => set(&mut current.humidity, patterns::percent(line)),
        LineAction::Highest => set(&mut stats.highest, patterns::celsius(line)),
        LineAction::Lowest => set(&mut stats.lowest, patterns::celsius(line)),
        LineAction::Average => set(&mut stats.average, patterns::celsius(line)),
        LineAction::ForecastDay => match parse_forecast_line(line) {
            Some(day) => {
                extracted.forecast.push(day);
                true
            }
            None => false,
        },
        LineAction::Discard => return,
    };

    if !hit {
        trace!(?action, line, "Line did not yield a value");
    }
}

/// Overwrite `slot` when a value was found
fn set<T>(slot: &mut Option<T>, value: Option<T>) -> bool {
    match value {
        Some(value) => {
            *slot = Some(value);
            true
        }
        None => false,
    }
}

fn city_name(line: &str) -> Option<String> {
    let (_, rest) = line.split_once(Marker::CurrentHeading.needle())?;
    let name = rest.split(':').next().unwrap_or_default().trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Parse `<label>: <n>°C, <description>, <n>% humidity`
///
/// A day is produced only when its temperature is readable. Description and
/// humidity fall back to "unknown" and 0.
pub fn parse_forecast_line(line: &str) -> Option<ForecastDay> {
    if line.is_empty() || !line.contains(':') || !line.contains("°C") {
        return None;
    }

    let mut parts = line.split(": ");
    let (label, detail) = match (parts.next(), parts.next(), parts.next()) {
        (Some(label), Some(detail), None) => (label, detail),
        _ => return None,
    };

    let temp = patterns::celsius(detail)?;
    let weather = patterns::forecast_condition(detail).unwrap_or(UNKNOWN_CONDITION);
    let humidity = patterns::humidity_percent(detail).unwrap_or(0);

    Some(ForecastDay::new(label.trim(), temp, weather, humidity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrentFacts, TempStats};

    const LONDON: &str = "Current Weather in London, GB:\n\
        - Temperature: 18°C (feels like 17°C)\n\
        - Weather: light rain\n\
        - Humidity: 80%\n\
        - Wind Speed: 13 km/h\n\
        - Visibility: 10 km\n\
        - Pressure: 1012 hPa\n\
        \n\
        5-Day Forecast:\n\
        Mon (Aug 5): 20°C, light rain, 75% humidity\n\
        Tue (Aug 6): 24°C, clear sky, 55% humidity\n\
        \n\
        Temperature Statistics:\n\
        - Highest: 24°C\n\
        - Lowest: 12°C\n\
        - Average: 18°C\n";

    #[test]
    fn test_extracts_full_summary() {
        let extracted = extract(LONDON);

        assert_eq!(extracted.city.as_deref(), Some("London, GB"));
        assert_eq!(
            extracted.current,
            CurrentFacts {
                temp: Some(18),
                weather: Some("light rain".to_string()),
                humidity: Some(80),
            }
        );
        assert_eq!(
            extracted.forecast,
            vec![
                ForecastDay::new("Mon (Aug 5)", 20, "light rain", 75),
                ForecastDay::new("Tue (Aug 6)", 24, "clear sky", 55),
            ]
        );
        assert_eq!(
            extracted.stats,
            TempStats {
                highest: Some(24),
                lowest: Some(12),
                average: Some(18),
            }
        );
    }

    #[test]
    fn test_statistics_lines_in_forecast_section_are_not_days() {
        let extracted = extract(LONDON);
        assert!(extracted.forecast.iter().all(|day| !day.day.contains("Highest")));
        assert_eq!(extracted.forecast.len(), 2);
    }

    #[test]
    fn test_temperature_line_alone() {
        let extracted = extract("Temperature: 22°C");
        assert_eq!(extracted.current.temp, Some(22));
        assert!(extracted.forecast.is_empty());
        assert!(extracted.stats.is_empty());
    }

    #[test]
    fn test_forecast_lines_before_heading_are_ignored() {
        let extracted = extract("Mon (Aug 5): 20°C, light rain, 75% humidity");
        assert!(extracted.forecast.is_empty());
    }

    #[test]
    fn test_forecast_line_defaults() {
        let summary = "5-Day Forecast:\nWed (Aug 7): 17°C\nThu (Aug 8): 15°C, fog, humid\n";
        let extracted = extract(summary);

        assert_eq!(
            extracted.forecast,
            vec![
                ForecastDay::new("Wed (Aug 7)", 17, "unknown", 0),
                ForecastDay::new("Thu (Aug 8)", 15, "fog", 0),
            ]
        );
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let summary = "5-Day Forecast:\n\
            garbage without markers\n\
            Fri (Aug 9): warm, sunny, 40% humidity\n\
            Sat: 10°C: extra: colons\n\
            Sun (Aug 11): 18.5°C, drizzle, 70% humidity\n\
            Mon (Aug 12): 21°C, sunny, 40% humidity\n";
        let extracted = extract(summary);

        assert_eq!(
            extracted.forecast,
            vec![ForecastDay::new("Mon (Aug 12)", 21, "sunny", 40)]
        );
    }

    #[test]
    fn test_unparseable_current_fields_stay_absent() {
        let extracted = extract("- Temperature: 18.5°C\n- Humidity: high\n- Weather:");
        assert!(extracted.current.is_empty());
    }

    #[test]
    fn test_fractional_reading_does_not_fall_through_to_later_number() {
        let extracted =
            extract("- Temperature: 18.5°C (feels like 17°C)\n- Humidity: 80.5% (dew point 60%)");
        assert_eq!(extracted.current.temp, None);
        assert_eq!(extracted.current.humidity, None);
    }

    #[test]
    fn test_statistics_without_forecast_heading() {
        let extracted = extract("- Highest: 31°C\n- Average: 26°C");
        assert_eq!(extracted.stats.highest, Some(31));
        assert_eq!(extracted.stats.average, Some(26));
        assert_eq!(extracted.stats.lowest, None);
    }

    #[test]
    fn test_windows_line_endings() {
        let extracted = extract("- Humidity: 64%\r\n5-Day Forecast:\r\nMon (Aug 5): 20°C, clear sky, 60% humidity\r\n");
        assert_eq!(extracted.current.humidity, Some(64));
        assert_eq!(extracted.forecast[0].humidity, 60);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract(""), ExtractedWeather::default());
    }
}
