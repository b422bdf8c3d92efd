//! CLI module for Samtale.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Samtale - Call Transcript Analysis
///
/// A small web service that summarizes customer service call transcripts and
/// classifies customer sentiment with an LLM. The name "Samtale" comes from
/// the Norwegian/Scandinavian word for "conversation."
#[derive(Parser, Debug)]
#[command(name = "samtale")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the analysis web server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Analyze a transcript once from the command line
    Analyze {
        /// Transcript text (omit when using --file)
        transcript: Option<String>,

        /// Read the transcript from a file; `.json` files go through the
        /// JSON extractor
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Show the stored analysis, if any
    History,

    /// Export the analysis CSV
    Export {
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
