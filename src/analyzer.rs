//! Summary and sentiment analysis pipeline.
//!
//! Takes a normalized transcript, renders the two prompt templates, makes one
//! chat completion per prompt, and cleans the sentiment label. The two calls
//! are independent but issued sequentially, matching the single blocking
//! round-trip-per-prompt contract.

use crate::config::{InferenceSettings, Prompts, Settings};
use crate::error::{Result, SamtaleError};
use crate::groq;
use crate::normalize::normalize_sentiment;
use async_openai::types::{
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_openai::{config::OpenAIConfig, Client};
use tracing::{debug, info, instrument};

/// One completed analysis: the transcript with its summary and sentiment.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub transcript: String,
    pub summary: String,
    pub sentiment: String,
}

/// Transcript analyzer backed by an OpenAI-compatible chat API.
pub struct Analyzer {
    client: Option<Client<OpenAIConfig>>,
    settings: InferenceSettings,
    prompts: Prompts,
}

impl Analyzer {
    /// Create an analyzer from settings.
    ///
    /// A missing credential is not an error here: the analyzer is built
    /// without a client and every `analyze` call fails with a `Config` error
    /// until one is configured.
    pub fn new(settings: &Settings) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        Ok(Self {
            client: groq::create_client(&settings.inference),
            settings: settings.inference.clone(),
            prompts,
        })
    }

    /// Whether an inference credential is configured.
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Analyze a transcript: summarize it and classify the customer sentiment.
    #[instrument(skip(self, transcript))]
    pub async fn analyze(&self, transcript: &str) -> Result<AnalysisResult> {
        let client = self.client.as_ref().ok_or_else(|| {
            SamtaleError::Config(format!(
                "inference client not initialized ({} not set)",
                self.settings.api_key_env
            ))
        })?;

        info!("Starting transcript analysis");

        let summary_prompt = self.prompts.summary_prompt(transcript);
        let summary = self
            .complete(client, &summary_prompt, self.settings.summary_temperature)
            .await?;
        debug!("Summary generated ({} chars)", summary.len());

        let sentiment_prompt = self.prompts.sentiment_prompt(transcript);
        let raw_sentiment = self
            .complete(client, &sentiment_prompt, self.settings.sentiment_temperature)
            .await?;
        let sentiment = normalize_sentiment(&raw_sentiment);
        debug!("Sentiment '{}' cleaned to '{}'", raw_sentiment, sentiment);

        Ok(AnalysisResult {
            transcript: transcript.to_string(),
            summary: summary.trim().to_string(),
            sentiment,
        })
    }

    /// Make a single chat completion with one user message.
    async fn complete(
        &self,
        client: &Client<OpenAIConfig>,
        prompt: &str,
        temperature: f32,
    ) -> Result<String> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| SamtaleError::Inference(e.to_string()))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.settings.model)
            .messages(vec![message.into()])
            .temperature(temperature)
            .build()
            .map_err(|e| SamtaleError::Inference(e.to_string()))?;

        let response = client
            .chat()
            .create(request)
            .await
            .map_err(|e| SamtaleError::Inference(format!("chat completion failed: {}", e)))?;

        response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .map(|content| content.trim().to_string())
            .ok_or_else(|| SamtaleError::Inference("empty response from model".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer_without_client() -> Analyzer {
        Analyzer {
            client: None,
            settings: InferenceSettings::default(),
            prompts: Prompts::default(),
        }
    }

    #[tokio::test]
    async fn test_analyze_without_client_fails_with_config_error() {
        let analyzer = analyzer_without_client();
        let result = analyzer.analyze("Customer: hello").await;
        assert!(matches!(result, Err(SamtaleError::Config(_))));
    }

    #[test]
    fn test_is_configured_reflects_client_presence() {
        assert!(!analyzer_without_client().is_configured());
    }
}
