//! One-shot analysis command.

use crate::analyzer::Analyzer;
use crate::cli::Output;
use crate::config::Settings;
use crate::extract;
use crate::store::CsvResultStore;

/// Analyze a transcript from the command line and persist the result.
pub async fn run_analyze(
    transcript: Option<String>,
    file: Option<String>,
    settings: Settings,
) -> anyhow::Result<()> {
    let transcript = match (transcript, file) {
        (_, Some(path)) => {
            let content = std::fs::read_to_string(&path)?;
            if path.ends_with(".json") {
                extract::from_json(&content)?
            } else {
                extract::from_text(&content)?
            }
        }
        (Some(text), None) => extract::from_text(&text)?,
        (None, None) => {
            anyhow::bail!("provide a transcript argument or --file <path>");
        }
    };

    let analyzer = Analyzer::new(&settings)?;
    let result = analyzer.analyze(&transcript).await?;

    let store = CsvResultStore::new(settings.csv_path());
    store.save(&result)?;

    Output::header("Analysis Result");
    Output::block("Summary", &result.summary);
    Output::block("Customer Sentiment", &result.sentiment);
    println!();
    Output::success(&format!("Saved to {}", store.path().display()));

    Ok(())
}
