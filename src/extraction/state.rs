//! Line classification state machine
//!
//! The extractor is in [`ParserState::Header`] until it meets the forecast
//! heading and in [`ParserState::InForecast`] for the rest of the summary.
//! Each line is mapped to at most one [`LineAction`].

/// Where in the summary the extractor currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    #[default]
    Header,
    InForecast,
}

/// Fixed substrings that identify what a line contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    CurrentHeading,
    Temperature,
    Weather,
    Humidity,
    ForecastHeading,
    Highest,
    Lowest,
    Average,
}

/// What to do with a line once its marker and state are known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    City,
    CurrentTemp,
    CurrentWeather,
    CurrentHumidity,
    Highest,
    Lowest,
    Average,
    ForecastDay,
    Discard,
}

/// Markers in match priority; the first one found in a line wins.
const MARKERS: [(&str, Marker); 8] = [
    ("Current Weather in", Marker::CurrentHeading),
    ("Temperature:", Marker::Temperature),
    ("Weather:", Marker::Weather),
    ("Humidity:", Marker::Humidity),
    ("5-Day Forecast:", Marker::ForecastHeading),
    ("Highest:", Marker::Highest),
    ("Lowest:", Marker::Lowest),
    ("Average:", Marker::Average),
];

impl Marker {
    /// Find the highest-priority marker contained in `line`
    #[must_use]
    pub fn detect(line: &str) -> Option<Self> {
        MARKERS
            .iter()
            .find(|(needle, _)| line.contains(needle))
            .map(|(_, marker)| *marker)
    }

    /// Text the marker is recognised by
    #[must_use]
    pub fn needle(self) -> &'static str {
        MARKERS
            .iter()
            .find(|(_, marker)| *marker == self)
            .map_or("", |(needle, _)| *needle)
    }
}

/// Transition table
///
/// Statistics markers win in every state, so `- Highest: 27°C` after the
/// forecast heading only fills the statistics and never becomes a day.
#[must_use]
pub fn transition(state: ParserState, marker: Option<Marker>) -> (ParserState, LineAction) {
    use LineAction as A;
    use ParserState as S;

    match (state, marker) {
        (_, Some(Marker::ForecastHeading)) => (S::InForecast, A::Discard),
        (s, Some(Marker::CurrentHeading)) => (s, A::City),
        (s, Some(Marker::Temperature)) => (s, A::CurrentTemp),
        (s, Some(Marker::Weather)) => (s, A::CurrentWeather),
        (s, Some(Marker::Humidity)) => (s, A::CurrentHumidity),
        (s, Some(Marker::Highest)) => (s, A::Highest),
        (s, Some(Marker::Lowest)) => (s, A::Lowest),
        (s, Some(Marker::Average)) => (s, A::Average),
        (S::InForecast, None) => (S::InForecast, A::ForecastDay),
        (S::Header, None) => (S::Header, A::Discard),
    }
}
