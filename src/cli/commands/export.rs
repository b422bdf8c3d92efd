//! CSV export command.

use crate::cli::Output;
use crate::config::Settings;
use crate::store::CsvResultStore;
use std::io::Write;

/// Write the analysis CSV to a file or stdout.
pub fn run_export(output: Option<String>, settings: Settings) -> anyhow::Result<()> {
    let store = CsvResultStore::new(settings.csv_path());

    let Some(bytes) = store.export()? else {
        Output::warning("No analysis data found. Please analyze a transcript first.");
        return Ok(());
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &bytes)?;
            Output::success(&format!("Exported CSV to {}", path));
        }
        None => {
            std::io::stdout().write_all(&bytes)?;
        }
    }

    Ok(())
}
