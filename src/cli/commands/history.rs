//! History command.

use crate::cli::Output;
use crate::config::Settings;
use crate::store::CsvResultStore;

/// Print the stored analysis, if any.
pub fn run_history(settings: Settings) -> anyhow::Result<()> {
    let store = CsvResultStore::new(settings.csv_path());
    let records = store.load_all()?;

    if records.is_empty() {
        Output::info("No analysis stored yet.");
        return Ok(());
    }

    Output::header("Stored Analysis");
    for record in &records {
        Output::block("Transcript", &record.transcript);
        Output::block("Summary", &record.summary);
        Output::block("Customer Sentiment", &record.sentiment);
    }

    Ok(())
}
