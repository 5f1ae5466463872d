//! Chat assistant wrapping the two responders
//!
//! Free-text questions go to an optional generative backend first. When the
//! backend errors, the text engine answers instead and the reply is marked
//! unsuccessful so the caller can tell a fallback answer from a model answer.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AssistantConfig;
use crate::engine::answer_from_text_summary;
use crate::models::WeatherSnapshot;
use crate::structured::answer_from_structured_records;

/// Answer plus whether it came from the primary path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub success: bool,
    pub response: String,
}

impl ChatReply {
    pub fn ok(response: impl Into<String>) -> Self {
        Self {
            success: true,
            response: response.into(),
        }
    }

    pub fn failed(response: impl Into<String>) -> Self {
        Self {
            success: false,
            response: response.into(),
        }
    }
}

/// External text generator, e.g. a hosted language model
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Routes chat questions to the generator or the rule-based responders
pub struct WeatherAssistant {
    generator: Option<Arc<dyn ResponseGenerator>>,
    max_response_words: u32,
    snapshot_ttl_minutes: u32,
}

impl WeatherAssistant {
    /// Assistant without a generator
    #[must_use]
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            generator: None,
            max_response_words: config.max_response_words,
            snapshot_ttl_minutes: config.snapshot_ttl_minutes,
        }
    }

    #[must_use]
    pub fn with_generator(mut self, generator: Arc<dyn ResponseGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Prompt sent to the generator
    #[must_use]
    pub fn build_prompt(&self, query: &str, summary: &str) -> String {
        format!(
            "You are a helpful weather assistant. A user is asking about weather information.\n\n\
             Weather Data Summary:\n{summary}\n\n\
             User Question: {query}\n\n\
             Please provide a helpful, friendly, and concise response based on the weather data provided. \
             Focus on being practical and actionable. If the weather data doesn't contain enough information \
             to answer the question, politely say so.\n\n\
             Keep your response conversational and under {} words.",
            self.max_response_words
        )
    }

    /// Answer a question about a text summary
    #[tracing::instrument(level = "debug", skip(self, summary))]
    pub async fn chat(&self, query: &str, summary: &str) -> ChatReply {
        if query.trim().is_empty() {
            return ChatReply::failed("Please provide a query.");
        }

        let Some(generator) = &self.generator else {
            warn!("No response generator configured");
            return ChatReply::failed(
                "The language model is not configured. Please check your API key.",
            );
        };

        match generator.generate(&self.build_prompt(query, summary)).await {
            Ok(text) => ChatReply::ok(text),
            Err(err) => {
                warn!(error = %err, "Response generator failed, using rule-based answer");
                ChatReply::failed(answer_from_text_summary(query, summary))
            }
        }
    }

    /// Answer a question about a city's stored records
    #[tracing::instrument(level = "debug", skip(self, snapshot))]
    pub fn ask_city(&self, city: &str, snapshot: Option<&WeatherSnapshot>, message: &str) -> ChatReply {
        let Some(snapshot) = snapshot else {
            info!("No weather data stored for city");
            return ChatReply::failed(format!(
                "I don't have weather data for {city}. Please search for a city first."
            ));
        };

        if !snapshot.is_fresh(self.snapshot_ttl_minutes) {
            warn!(
                retrieved_at = %snapshot.retrieved_at,
                "Answering from stale weather data"
            );
        }

        ChatReply::ok(answer_from_structured_records(
            message,
            &snapshot.current,
            &snapshot.forecast,
        ))
    }
}
