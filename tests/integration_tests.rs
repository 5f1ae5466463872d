//! Integration tests for WeatherBot

use std::io::Write;
use std::process::Command;

use rstest::rstest;
use serde_json::json;
use weatherbot::{
    ForecastDay, Intent, answer_from_structured_records, answer_from_text_summary, classify,
    composer, extract,
};

const LONDON: &str = "Current Weather in London, GB:
- Temperature: 18°C (feels like 17°C)
- Weather: light rain
- Humidity: 80%
- Wind Speed: 13 km/h
- Visibility: 10 km
- Pressure: 1012 hPa

5-Day Forecast:
Mon (Aug 5): 20°C, light rain, 75% humidity
Tue (Aug 6): 24°C, clear sky, 55% humidity
Wed (Aug 7): 16°C, light intensity drizzle, 82% humidity
Thu (Aug 8): 22°C, broken clouds, 64% humidity
Fri (Aug 9): 27°C, sunny, 45% humidity

Temperature Statistics:
- Highest: 27°C
- Lowest: 12°C
- Average: 20°C
";

fn weatherbot() -> Command {
    Command::new(env!("CARGO_BIN_EXE_weatherbot"))
}

fn temp_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_extraction_of_full_summary() {
    let extracted = extract(LONDON);

    assert_eq!(extracted.current.temp, Some(18));
    assert_eq!(extracted.current.weather.as_deref(), Some("light rain"));
    assert_eq!(extracted.forecast.len(), 5);
    assert_eq!(
        extracted.forecast[4],
        ForecastDay::new("Fri (Aug 9)", 27, "sunny", 45)
    );
    assert_eq!(extracted.stats.highest, Some(27));
    assert_eq!(extracted.stats.lowest, Some(12));
    assert_eq!(extracted.stats.average, Some(20));
}

#[rstest]
#[case(
    "Do I need an umbrella this week?",
    "Yes, you might need an umbrella! I see rain in the forecast for: Mon (Aug 5), Wed (Aug 7). The weather shows 2 rainy days this week."
)]
#[case(
    "Can you summarize the forecast?",
    "Here's a 5-day weather summary: Mon (Aug 5): 20°C, light rain. Tue (Aug 6): 24°C, clear sky. Wed (Aug 7): 16°C, light intensity drizzle. Thu (Aug 8): 22°C, broken clouds. Fri (Aug 9): 27°C, sunny. "
)]
#[case(
    "Which is the best day for a hike?",
    "The best day for outdoor activities looks like Tue (Aug 6) with 24°C and clear sky. It has comfortable conditions for outdoor activities."
)]
#[case(
    "What is the highest it will get?",
    "Temperature statistics: Highest: 27°C. Average: 20°C. Lowest: 12°C. "
)]
#[case(
    "What should I pack?",
    "Based on the weather forecast, you should pack: light clothing, a jacket or sweater, an umbrella or raincoat, moisture-wicking clothes. The temperature will range from 12°C to 27°C."
)]
#[case(
    "How does this compare to last week?",
    "I can't compare to last week's weather as I only have current forecast data. This feature would require historical weather data integration."
)]
#[case("Hi!", "Current weather: 18°C, light rain. Humidity: 80%.")]
fn test_text_summary_answers(#[case] query: &str, #[case] expected: &str) {
    assert_eq!(answer_from_text_summary(query, LONDON), expected);
}

#[test]
fn test_summary_intent_without_forecast_is_never_empty() {
    let answer = answer_from_text_summary("summary please", "- Temperature: 18°C\n- Humidity: 80%");
    assert!(!answer.is_empty());
    assert!(answer.contains("can't provide a detailed summary"));
}

#[test]
fn test_rain_frequency_composition() {
    let extracted = extract(LONDON);

    let yes = composer::compose(Intent::RainFrequency, "rain more than 1 times", &extracted);
    assert!(yes.starts_with("Yes"));
    assert!(yes.contains('2'));

    let no = composer::compose(Intent::RainFrequency, "rain more than 3 times", &extracted);
    assert!(no.starts_with("No"));
}

#[test]
fn test_priority_order() {
    assert_eq!(classify("average rain chance"), Intent::RainNeed);
    assert_eq!(classify("average temperature"), Intent::TemperatureStats);
}

#[test]
fn test_repeated_calls_are_identical() {
    for query in ["umbrella", "best day", "pack", "hello"] {
        assert_eq!(
            answer_from_text_summary(query, LONDON),
            answer_from_text_summary(query, LONDON)
        );
    }
}

#[test]
fn test_structured_records_from_provider_json() {
    let current = serde_json::from_value(json!({
        "coord": {"lon": -0.13, "lat": 51.51},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {"temp": 17.6, "feels_like": 17.1, "pressure": 1012, "humidity": 80},
        "visibility": 9000,
        "wind": {"speed": 4.1, "deg": 250},
        "sys": {"country": "GB"},
        "name": "London"
    }))
    .unwrap();
    let forecast = serde_json::from_value(json!({
        "cnt": 2,
        "list": [
            {"dt": 1722848400, "main": {"temp": 19.4, "humidity": 75}, "weather": [{"description": "light rain"}]},
            {"dt": 1722859200, "main": {"temp": 23.8, "humidity": 55}, "weather": [{"description": "clear sky"}]}
        ]
    }))
    .unwrap();

    assert_eq!(
        answer_from_structured_records("Is there any rain?", &current, &forecast),
        "Yes, there is rain in the forecast. The current conditions show light rain."
    );
    assert_eq!(
        answer_from_structured_records("max temperature", &current, &forecast),
        "The highest temperature in the forecast is 24°C."
    );
    assert_eq!(
        answer_from_structured_records("visibility", &current, &forecast),
        "The current visibility is 9.0 km."
    );
}

#[test]
fn test_cli_ask_from_summary_file() {
    let summary = temp_file(LONDON);
    let output = weatherbot()
        .args(["ask", "--summary"])
        .arg(summary.path())
        .arg("do I need an umbrella")
        .output()
        .expect("Failed to execute weatherbot");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mon (Aug 5), Wed (Aug 7)"));
}

#[test]
fn test_cli_records() {
    let current = temp_file(
        &json!({
            "weather": [{"description": "clear sky"}],
            "main": {"temp": 22.5, "humidity": 65},
            "visibility": 10000,
            "wind": {"speed": 3.6},
            "sys": {"country": "GB"},
            "name": "London"
        })
        .to_string(),
    );
    let forecast = temp_file(
        &json!({"list": [{"main": {"temp": 15.0, "humidity": 60}, "weather": []}]}).to_string(),
    );

    let output = weatherbot()
        .arg("records")
        .arg("--current")
        .arg(current.path())
        .arg("--forecast")
        .arg(forecast.path())
        .arg("wind")
        .output()
        .expect("Failed to execute weatherbot");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "The current wind speed is 13 km/h.");
}

#[test]
fn test_cli_records_without_files_names_configured_city() {
    let mut config = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
    config
        .write_all(b"[assistant]\ndefault_city = \"Berlin\"\n")
        .unwrap();

    let output = weatherbot()
        .arg("--config")
        .arg(config.path())
        .args(["records", "temperature"])
        .output()
        .expect("Failed to execute weatherbot");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("I don't have weather data for Berlin"));
}

#[test]
fn test_cli_records_city_flag_overrides_config() {
    let output = weatherbot()
        .args(["records", "--city", "Paris", "humidity"])
        .output()
        .expect("Failed to execute weatherbot");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("for Paris"));
}

#[test]
fn test_cli_intent() {
    let output = weatherbot()
        .args(["intent", "what should I pack for my trip"])
        .output()
        .expect("Failed to execute weatherbot");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "packing");
}

#[test]
fn test_cli_ask_with_fractional_reading() {
    let summary = temp_file("- Temperature: 18.5°C (feels like 17°C)\n- Weather: clear sky\n");
    let output = weatherbot()
        .args(["ask", "--summary"])
        .arg(summary.path())
        .arg("hello")
        .output()
        .expect("Failed to execute weatherbot");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "Current weather: unknown°C, clear sky. Humidity: unknown%.");
}

#[test]
fn test_cli_missing_summary_file() {
    let output = weatherbot()
        .args(["ask", "--summary", "/definitely/not/here.txt", "umbrella?"])
        .output()
        .expect("Failed to execute weatherbot");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File operation failed"));
}

#[test]
fn test_cli_rejects_bad_record_json() {
    let current = temp_file("{\"name\": \"London\"}");
    let forecast = temp_file("{\"list\": []}");

    let output = weatherbot()
        .arg("records")
        .arg("--current")
        .arg(current.path())
        .arg("--forecast")
        .arg(forecast.path())
        .arg("temperature")
        .output()
        .expect("Failed to execute weatherbot");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("OpenWeather"));
}
