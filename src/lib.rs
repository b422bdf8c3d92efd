//! Samtale - Call Transcript Analysis
//!
//! A small web service that analyzes customer service call transcripts with an
//! LLM: it produces a short summary and a customer sentiment label, shows the
//! result, and keeps the latest analysis in a downloadable CSV file.
//!
//! The name "Samtale" comes from the Norwegian/Scandinavian word for
//! "conversation."
//!
//! # Overview
//!
//! Samtale allows you to:
//! - Paste a transcript or upload a JSON document containing one
//! - Get a 2-3 sentence summary and a descriptive customer sentiment label
//! - Browse the latest stored analysis and download it as CSV
//! - Drive the same pipeline from the command line
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration and prompt templates
//! - `extract` - Transcript extraction from text and JSON input
//! - `groq` - Inference API client construction
//! - `analyzer` - Summary and sentiment analysis pipeline
//! - `normalize` - Sentiment label cleanup
//! - `store` - Single-slot CSV result store
//! - `web` - HTTP server and page rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use samtale::analyzer::Analyzer;
//! use samtale::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let analyzer = Analyzer::new(&settings)?;
//!
//!     let result = analyzer.analyze("Customer: my order never arrived...").await?;
//!     println!("{} | {}", result.summary, result.sentiment);
//!
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod groq;
pub mod normalize;
pub mod store;
pub mod web;

pub use error::{Result, SamtaleError};
