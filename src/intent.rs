//! Keyword intent classification
//!
//! Categories are held in [`RULES`], an ordered table of trigger/handler
//! pairs. The first rule whose trigger matches the lower-cased query wins,
//! so overlapping keywords resolve to the earlier entry. A new category is
//! added by inserting a rule at the rank it should take.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::composer::{self, Handler};
use crate::error::WeatherBotError;

/// Answer category selected for a question
///
/// Serialized as its [`Intent::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Intent {
    RainNeed,
    Summary,
    BestOutdoorDay,
    TemperatureStats,
    Packing,
    RainFrequency,
    HistoricalComparison,
    Fallback,
}

impl Intent {
    /// Every category, [`Intent::Fallback`] last
    pub const ALL: [Intent; 8] = [
        Intent::RainNeed,
        Intent::Summary,
        Intent::BestOutdoorDay,
        Intent::TemperatureStats,
        Intent::Packing,
        Intent::RainFrequency,
        Intent::HistoricalComparison,
        Intent::Fallback,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Intent::RainNeed => "rain-need",
            Intent::Summary => "summary",
            Intent::BestOutdoorDay => "best-outdoor-day",
            Intent::TemperatureStats => "temperature-stats",
            Intent::Packing => "packing",
            Intent::RainFrequency => "rain-frequency",
            Intent::HistoricalComparison => "historical-comparison",
            Intent::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Intent> for &'static str {
    fn from(intent: Intent) -> Self {
        intent.name()
    }
}

impl FromStr for Intent {
    type Err = WeatherBotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.name() == s)
            .ok_or_else(|| WeatherBotError::validation(format!("Unknown intent: {s}")))
    }
}

impl TryFrom<String> for Intent {
    type Error = WeatherBotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Keyword condition over a lower-cased query
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// At least one phrase occurs
    Any(&'static [&'static str]),
    /// Every phrase occurs
    All(&'static [&'static str]),
}

impl Trigger {
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        match self {
            Trigger::Any(phrases) => phrases.iter().any(|p| query.contains(p)),
            Trigger::All(phrases) => phrases.iter().all(|p| query.contains(p)),
        }
    }
}

/// One ranked entry of the classification table
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub trigger: Trigger,
    pub respond: Handler,
}

/// Classification table in priority order. [`Intent::Fallback`] has no
/// entry; it is what remains when nothing here matches.
pub static RULES: [IntentRule; 7] = [
    IntentRule {
        intent: Intent::RainNeed,
        trigger: Trigger::Any(&["umbrella", "rain", "precipitation"]),
        respond: composer::rain_need,
    },
    IntentRule {
        intent: Intent::Summary,
        trigger: Trigger::Any(&["summarize", "summary"]),
        respond: composer::summary,
    },
    IntentRule {
        intent: Intent::BestOutdoorDay,
        trigger: Trigger::Any(&["outdoor", "activities", "best day"]),
        respond: composer::best_outdoor_day,
    },
    IntentRule {
        intent: Intent::TemperatureStats,
        trigger: Trigger::Any(&["average", "highest", "temperature"]),
        respond: composer::temperature_stats,
    },
    IntentRule {
        intent: Intent::Packing,
        trigger: Trigger::Any(&["pack", "trip"]),
        respond: composer::packing,
    },
    IntentRule {
        intent: Intent::RainFrequency,
        trigger: Trigger::Any(&["rain more than", "rainy days"]),
        respond: composer::rain_frequency,
    },
    IntentRule {
        intent: Intent::HistoricalComparison,
        trigger: Trigger::All(&["compare", "last week"]),
        respond: composer::historical_comparison,
    },
];

/// First rule matching an already lower-cased query
#[must_use]
pub fn matching_rule(query_lower: &str) -> Option<&'static IntentRule> {
    RULES.iter().find(|rule| rule.trigger.matches(query_lower))
}

/// Table entry for an intent, `None` for [`Intent::Fallback`]
#[must_use]
pub fn rule_for(intent: Intent) -> Option<&'static IntentRule> {
    RULES.iter().find(|rule| rule.intent == intent)
}

/// Classify a raw question
#[must_use]
pub fn classify(query: &str) -> Intent {
    classify_lowercase(&query.to_lowercase())
}

/// Classify a query that is already lower-cased
#[must_use]
pub fn classify_lowercase(query_lower: &str) -> Intent {
    matching_rule(query_lower).map_or(Intent::Fallback, |rule| rule.intent)
}
