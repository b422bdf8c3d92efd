//! Sentiment label cleanup.
//!
//! Chat models rarely answer with just the label: they quote it, prefix it
//! with "Sentiment:", or append an explanation. This module coerces the raw
//! completion into a short canonical phrase.

/// Normalize a raw sentiment completion into a short label.
///
/// Applies, in order:
/// 1. Remove quote and apostrophe characters and trim whitespace.
/// 2. Keep only the first line of a multi-line response.
/// 3. Keep only the text after the last colon.
/// 4. Split on periods and keep the first segment.
/// 5. Trim whitespace.
///
/// This is best-effort coercion with no validation against the canonical
/// sentiment categories; any short phrase survives. The heuristic is
/// deliberately kept as-is even though it would mangle labels containing
/// legitimate punctuation.
pub fn normalize_sentiment(raw: &str) -> String {
    let mut label = raw.replace(['"', '\''], "").trim().to_string();

    if let Some(first_line) = label.lines().next() {
        label = first_line.trim().to_string();
    }

    if let Some(after_colon) = label.rsplit(':').next() {
        label = after_colon.trim().to_string();
    }

    let parts: Vec<&str> = label.split('.').collect();
    if parts.len() > 1 {
        label = parts[0].trim().to_string();
    }

    label.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_label_passes_through() {
        assert_eq!(
            normalize_sentiment("Frustrated and Negative"),
            "Frustrated and Negative"
        );
    }

    #[test]
    fn test_quotes_are_stripped() {
        assert_eq!(
            normalize_sentiment("\"Satisfied and Positive\""),
            "Satisfied and Positive"
        );
        assert_eq!(
            normalize_sentiment("'Relieved and Positive'"),
            "Relieved and Positive"
        );
    }

    #[test]
    fn test_only_first_line_kept() {
        assert_eq!(
            normalize_sentiment("Grateful and Positive\nThe customer thanked the agent twice."),
            "Grateful and Positive"
        );
    }

    #[test]
    fn test_text_after_last_colon_kept() {
        assert_eq!(
            normalize_sentiment("Customer Sentiment: Mixed and Neutral"),
            "Mixed and Neutral"
        );
    }

    #[test]
    fn test_trailing_explanation_dropped() {
        assert_eq!(
            normalize_sentiment("Sentiment: Frustrated and Negative. The customer was upset."),
            "Frustrated and Negative"
        );
    }

    #[test]
    fn test_idempotent_on_normalized_labels() {
        let labels = [
            "Satisfied and Positive",
            "Frustrated and Negative",
            "Confused and Negative",
            "Disappointed and Negative",
            "Impatient and Negative",
            "Relieved and Positive",
            "Grateful and Positive",
            "Neutral and Cautious",
            "Mixed and Neutral",
        ];
        for label in labels {
            let once = normalize_sentiment(label);
            assert_eq!(normalize_sentiment(&once), once);
        }
    }

    #[test]
    fn test_idempotent_on_messy_input() {
        let messy = "  \"Sentiment: Impatient and Negative. Long hold times.\"\nMore text.";
        let once = normalize_sentiment(messy);
        assert_eq!(normalize_sentiment(&once), once);
        assert_eq!(once, "Impatient and Negative");
    }

    #[test]
    fn test_whitespace_only_yields_empty() {
        assert_eq!(normalize_sentiment("   \n  "), "");
    }
}
