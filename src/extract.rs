//! Transcript extraction from raw text and uploaded JSON documents.
//!
//! Uploaded files are arbitrary JSON: a mapping with a recognizable transcript
//! key, a sequence of utterances, or a bare scalar. All of them are flattened
//! into a single text blob before analysis.

use crate::error::{Result, SamtaleError};
use serde_json::Value;

/// Mapping keys that may hold the transcript, checked in priority order.
const TRANSCRIPT_KEYS: [&str; 4] = ["transcript", "conversation", "dialogue", "text"];

/// Extract a transcript from plain text input.
///
/// Trims surrounding whitespace; an empty result is `EmptyInput`.
pub fn from_text(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SamtaleError::EmptyInput);
    }
    Ok(trimmed.to_string())
}

/// Extract a transcript from the contents of an uploaded JSON document.
///
/// - Mappings are searched for `transcript`, `conversation`, `dialogue`, and
///   `text` keys in that order; the first match wins. A mapping with none of
///   these keys is stringified whole.
/// - Sequences are joined element-by-element with single spaces.
/// - Anything else is stringified directly.
///
/// A document that parses but yields only whitespace is `MalformedInput`,
/// not `EmptyInput`: the file itself is unusable, not the text field.
pub fn from_json(content: &str) -> Result<String> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| SamtaleError::MalformedInput(format!("invalid JSON: {}", e)))?;

    let text = match &value {
        Value::Object(map) => {
            match TRANSCRIPT_KEYS.iter().find_map(|key| map.get(*key)) {
                Some(found) => stringify(found),
                None => value.to_string(),
            }
        }
        Value::Array(items) => items
            .iter()
            .map(stringify)
            .collect::<Vec<_>>()
            .join(" "),
        other => stringify(other),
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SamtaleError::MalformedInput(
            "document contains no usable transcript text".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Coerce a JSON value to text. Strings yield their contents; everything else
/// yields its compact JSON serialization.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_trimmed() {
        let result = from_text("  hello there  \n").unwrap();
        assert_eq!(result, "hello there");
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(matches!(from_text("   \n\t "), Err(SamtaleError::EmptyInput)));
        assert!(matches!(from_text(""), Err(SamtaleError::EmptyInput)));
    }

    #[test]
    fn test_transcript_key_extraction() {
        let result = from_json(r#"{"transcript": "Agent: hello"}"#).unwrap();
        assert_eq!(result, "Agent: hello");
    }

    #[test]
    fn test_key_priority_order() {
        // `transcript` wins over every other key.
        let result = from_json(
            r#"{"text": "last", "dialogue": "third", "conversation": "second", "transcript": "first"}"#,
        )
        .unwrap();
        assert_eq!(result, "first");

        // Without `transcript`, `conversation` comes next.
        let result = from_json(r#"{"text": "last", "conversation": "second"}"#).unwrap();
        assert_eq!(result, "second");

        let result = from_json(r#"{"text": "last", "dialogue": "third"}"#).unwrap();
        assert_eq!(result, "third");

        let result = from_json(r#"{"text": "last"}"#).unwrap();
        assert_eq!(result, "last");
    }

    #[test]
    fn test_mapping_without_known_keys_is_stringified() {
        let result = from_json(r#"{"call_id": 7}"#).unwrap();
        assert_eq!(result, r#"{"call_id":7}"#);
    }

    #[test]
    fn test_sequence_is_joined_with_spaces() {
        let result = from_json(r#"["a", "b", "c"]"#).unwrap();
        assert_eq!(result, "a b c");
    }

    #[test]
    fn test_sequence_with_non_string_elements() {
        let result = from_json(r#"["line one", 2, true]"#).unwrap();
        assert_eq!(result, "line one 2 true");
    }

    #[test]
    fn test_scalar_is_stringified() {
        assert_eq!(from_json(r#""just text""#).unwrap(), "just text");
        assert_eq!(from_json("42").unwrap(), "42");
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            from_json("{not json"),
            Err(SamtaleError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_json_without_usable_text_is_malformed() {
        // Parses fine, but the extracted text is all whitespace; that is a
        // bad document, not an empty text field.
        assert!(matches!(
            from_json(r#"{"transcript": "   "}"#),
            Err(SamtaleError::MalformedInput(_))
        ));
        assert!(matches!(
            from_json(r#"["  ", " "]"#),
            Err(SamtaleError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_non_string_transcript_value_is_coerced() {
        let result = from_json(r#"{"transcript": ["a", "b"]}"#).unwrap();
        assert_eq!(result, r#"["a","b"]"#);
    }
}
