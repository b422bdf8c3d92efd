//! Prompt templates for Samtale.
//!
//! Prompts can be customized by placing TOML files in the custom prompts
//! directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub analysis: AnalysisPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: std::collections::HashMap<String, String>,
}

/// Prompts for transcript summarization and sentiment classification.
///
/// Both templates interpolate the transcript verbatim via `{{transcript}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisPrompts {
    pub summary: String,
    pub sentiment: String,
}

impl Default for AnalysisPrompts {
    fn default() -> Self {
        Self {
            summary: r#"You are an expert customer service analyst. Summarize the following customer service conversation in exactly 2-3 sentences. Focus on the main issue, actions taken, and outcome.

Customer Service Conversation:
{{transcript}}

Summary (2-3 sentences only):"#
                .to_string(),

            sentiment: r#"You are an expert sentiment analyst. Analyze the CUSTOMER's overall sentiment throughout this conversation and provide a descriptive sentiment label.

Customer Service Conversation:
{{transcript}}

Instructions:
- Focus ONLY on the customer's sentiment, not the agent's
- Consider the entire conversation, not just the beginning
- Provide a descriptive sentiment that captures the customer's emotional state

Choose from these specific sentiment categories:
- "Satisfied and Positive" - Issue resolved, customer happy/grateful
- "Frustrated and Negative" - Customer angry, unresolved issues
- "Confused and Negative" - Customer lost, getting poor help
- "Disappointed and Negative" - Customer let down by service
- "Impatient and Negative" - Customer annoyed by delays/process
- "Relieved and Positive" - Problem solved after difficulty
- "Grateful and Positive" - Customer appreciative of help
- "Neutral and Cautious" - Customer uncertain about outcome
- "Mixed and Neutral" - Customer has both positive and negative feelings

Customer Sentiment (respond with exactly one phrase from above):"#
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory
    /// and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&std::collections::HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let analysis_path = custom_path.join("analysis.toml");
            if analysis_path.exists() {
                let content = std::fs::read_to_string(&analysis_path)?;
                prompts.analysis = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &std::collections::HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Render a prompt template with both provided variables and custom config
    /// variables. Provided variables take precedence.
    pub fn render_with_custom(
        &self,
        template: &str,
        vars: &std::collections::HashMap<String, String>,
    ) -> String {
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }

    /// Render the summary prompt for a transcript.
    pub fn summary_prompt(&self, transcript: &str) -> String {
        let mut vars = std::collections::HashMap::new();
        vars.insert("transcript".to_string(), transcript.to_string());
        self.render_with_custom(&self.analysis.summary, &vars)
    }

    /// Render the sentiment prompt for a transcript.
    pub fn sentiment_prompt(&self, transcript: &str) -> String {
        let mut vars = std::collections::HashMap::new();
        vars.insert("transcript".to_string(), transcript.to_string());
        self.render_with_custom(&self.analysis.sentiment, &vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts() {
        let prompts = Prompts::default();
        assert!(!prompts.analysis.summary.is_empty());
        assert!(!prompts.analysis.sentiment.is_empty());
        assert!(prompts.analysis.summary.contains("{{transcript}}"));
        assert!(prompts.analysis.sentiment.contains("{{transcript}}"));
    }

    #[test]
    fn test_render_template() {
        let template = "Hello {{name}}, you have {{count}} messages.";
        let mut vars = std::collections::HashMap::new();
        vars.insert("name".to_string(), "Alice".to_string());
        vars.insert("count".to_string(), "5".to_string());

        let result = Prompts::render(template, &vars);
        assert_eq!(result, "Hello Alice, you have 5 messages.");
    }

    #[test]
    fn test_transcript_interpolated_verbatim() {
        let prompts = Prompts::default();
        let transcript = "Customer: my parcel is lost\nAgent: let me check";

        let summary = prompts.summary_prompt(transcript);
        assert!(summary.contains(transcript));
        assert!(!summary.contains("{{transcript}}"));

        let sentiment = prompts.sentiment_prompt(transcript);
        assert!(sentiment.contains(transcript));
        assert!(sentiment.contains("Frustrated and Negative"));
    }
}
