//! Single-slot CSV result store.
//!
//! The store holds at most one record: the latest successful analysis. Every
//! save overwrites the whole file with a header row plus one data row. The
//! file doubles as the download artifact, so the format stays plain CSV with
//! minimal quoting.

use crate::analyzer::AnalysisResult;
use crate::error::{Result, SamtaleError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// CSV column headers, in file order.
const HEADERS: [&str; 3] = ["Transcript", "Summary", "Sentiment"];

/// One stored analysis record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    #[serde(rename = "Transcript")]
    pub transcript: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: String,
}

/// Single-slot store backed by a CSV file.
///
/// Not a log: each save replaces the previous record entirely. There is no
/// locking discipline; concurrent writers race on the file.
pub struct CsvResultStore {
    path: PathBuf,
}

impl CsvResultStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the store with a single record.
    ///
    /// Fields are sanitized first: embedded newlines and carriage returns
    /// collapse to spaces and quote characters are stripped, so one record is
    /// always one physical line.
    pub fn save(&self, result: &AnalysisResult) -> Result<()> {
        let record = StoredRecord {
            transcript: sanitize_field(&result.transcript),
            summary: sanitize_field(&result.summary),
            sentiment: sanitize_field(&result.sentiment),
        };

        let mut writer = csv::Writer::from_path(&self.path)
            .map_err(|e| SamtaleError::Persistence(format!("cannot open {:?}: {}", self.path, e)))?;
        writer.serialize(&record)?;
        writer
            .flush()
            .map_err(|e| SamtaleError::Persistence(format!("cannot write {:?}: {}", self.path, e)))?;

        info!("Stored analysis result ({} chars transcript)", record.transcript.len());
        Ok(())
    }

    /// Read all records currently in the file (in practice 0 or 1).
    ///
    /// A missing file is an empty store, not an error.
    pub fn load_all(&self) -> Result<Vec<StoredRecord>> {
        if !self.path.is_file() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| SamtaleError::Persistence(format!("cannot read {:?}: {}", self.path, e)))?;
        let mut records = Vec::new();
        for record in reader.deserialize() {
            records.push(record?);
        }

        debug!("Loaded {} stored record(s)", records.len());
        Ok(records)
    }

    /// Raw file bytes for download.
    ///
    /// When the file is absent, creates a header-only file as a side effect
    /// and returns `None` so the caller can surface a "no data" notice.
    pub fn export(&self) -> Result<Option<Vec<u8>>> {
        if !self.path.is_file() {
            self.write_header_only()?;
            return Ok(None);
        }

        let bytes = std::fs::read(&self.path)
            .map_err(|e| SamtaleError::Persistence(format!("cannot read {:?}: {}", self.path, e)))?;
        Ok(Some(bytes))
    }

    fn write_header_only(&self) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)
            .map_err(|e| SamtaleError::Persistence(format!("cannot open {:?}: {}", self.path, e)))?;
        writer.write_record(HEADERS)?;
        writer
            .flush()
            .map_err(|e| SamtaleError::Persistence(format!("cannot write {:?}: {}", self.path, e)))?;
        Ok(())
    }
}

/// Collapse embedded newlines/carriage returns to spaces, strip quote
/// characters, and trim.
fn sanitize_field(value: &str) -> String {
    value
        .replace(['\n', '\r'], " ")
        .replace('"', "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn result(transcript: &str, summary: &str, sentiment: &str) -> AnalysisResult {
        AnalysisResult {
            transcript: transcript.to_string(),
            summary: summary.to_string(),
            sentiment: sentiment.to_string(),
        }
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = CsvResultStore::new(dir.path().join("call_analysis.csv"));

        store
            .save(&result("Customer: hi", "Short call.", "Neutral and Cautious"))
            .unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].transcript, "Customer: hi");
        assert_eq!(records[0].summary, "Short call.");
        assert_eq!(records[0].sentiment, "Neutral and Cautious");
    }

    #[test]
    fn test_second_save_replaces_first() {
        let dir = TempDir::new().unwrap();
        let store = CsvResultStore::new(dir.path().join("call_analysis.csv"));

        store.save(&result("first", "s1", "Mixed and Neutral")).unwrap();
        store.save(&result("second", "s2", "Satisfied and Positive")).unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].transcript, "second");
        assert_eq!(records[0].sentiment, "Satisfied and Positive");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = CsvResultStore::new(dir.path().join("does_not_exist.csv"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_fields_are_sanitized() {
        let dir = TempDir::new().unwrap();
        let store = CsvResultStore::new(dir.path().join("call_analysis.csv"));

        store
            .save(&result(
                "line one\nline two\r\nline three",
                "He said \"sorry\".",
                " Relieved and Positive ",
            ))
            .unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records[0].transcript, "line one line two  line three");
        assert_eq!(records[0].summary, "He said sorry.");
        assert_eq!(records[0].sentiment, "Relieved and Positive");

        // Sanitized fields keep the file at exactly two physical lines.
        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.starts_with("Transcript,Summary,Sentiment"));
    }

    #[test]
    fn test_export_missing_file_creates_header_only() {
        let dir = TempDir::new().unwrap();
        let store = CsvResultStore::new(dir.path().join("call_analysis.csv"));

        assert!(store.export().unwrap().is_none());

        // Side effect: a header-only file now exists, and the store is still
        // logically empty.
        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.trim(), "Transcript,Summary,Sentiment");
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_export_returns_file_bytes() {
        let dir = TempDir::new().unwrap();
        let store = CsvResultStore::new(dir.path().join("call_analysis.csv"));

        store.save(&result("t", "s", "Grateful and Positive")).unwrap();

        let bytes = store.export().unwrap().expect("data present");
        let contents = String::from_utf8(bytes).unwrap();
        assert!(contents.contains("Grateful and Positive"));
    }
}
