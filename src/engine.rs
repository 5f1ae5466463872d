//! Text-summary question answering: extract, classify, compose

use tracing::debug;

use crate::composer::{self, NO_WEATHER_DATA};
use crate::extraction;
use crate::intent;

/// Answer a question from a free-text weather summary.
///
/// Always returns a sentence. An empty summary short-circuits before
/// extraction and classification.
#[tracing::instrument(level = "debug", skip(summary), fields(summary_len = summary.len()))]
pub fn answer_from_text_summary(query: &str, summary: &str) -> String {
    if summary.trim().is_empty() {
        debug!("No summary supplied");
        return NO_WEATHER_DATA.to_string();
    }

    let facts = extraction::extract(summary);
    let query_lower = query.to_lowercase();
    let intent = intent::classify_lowercase(&query_lower);
    debug!(%intent, "Classified question");

    composer::respond(intent, &query_lower, &facts)
}
