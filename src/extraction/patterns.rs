//! Field patterns used by the extractor and the composer
//!
//! Only the first number carrying a unit is read. Fractional values
//! ("18.5°C") are captured whole and rejected, so the field is omitted
//! rather than taken from a later number on the same line.

use std::sync::LazyLock;

use regex::Regex;

static CELSIUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:[.,]\d+)?)°C").expect("valid celsius pattern"));

static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:[.,]\d+)?)%").expect("valid percent pattern"));

static HUMIDITY_PERCENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:[.,]\d+)?)% humidity").expect("valid humidity pattern")
});

static WEATHER_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Weather: (.+)").expect("valid weather pattern"));

static FORECAST_CONDITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r", (.+?),").expect("valid condition pattern"));

static MORE_THAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"more than (\d+)").expect("valid threshold pattern"));

/// Whole-number value of the first match; a fractional first match yields `None`
fn first_number(pattern: &Regex, text: &str) -> Option<u32> {
    let digits = pattern.captures(text)?.get(1)?.as_str();
    if digits.contains(['.', ',']) {
        return None;
    }
    digits.parse().ok()
}

fn first_text<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

/// First `<n>°C` value
pub fn celsius(text: &str) -> Option<u32> {
    first_number(&CELSIUS, text)
}

/// First `<n>%` value
pub fn percent(text: &str) -> Option<u32> {
    first_number(&PERCENT, text)
}

/// First `<n>% humidity` value
pub fn humidity_percent(text: &str) -> Option<u32> {
    first_number(&HUMIDITY_PERCENT, text)
}

/// Text after `Weather: ` up to the end of the line
pub fn weather_field(line: &str) -> Option<&str> {
    first_text(&WEATHER_FIELD, line)
}

/// Text between the first two commas of a forecast detail
pub fn forecast_condition(detail: &str) -> Option<&str> {
    first_text(&FORECAST_CONDITION, detail)
}

/// Threshold in phrases like "rain more than 3 times"
///
/// Values beyond `u64` saturate.
pub fn more_than_threshold(query: &str) -> Option<u64> {
    let digits = MORE_THAN.captures(query)?.get(1)?.as_str();
    Some(digits.parse().unwrap_or(u64::MAX))
}
