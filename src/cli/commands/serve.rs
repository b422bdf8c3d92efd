//! Web server command.

use crate::cli::Output;
use crate::config::Settings;
use crate::web::{self, AppState};
use std::sync::Arc;

/// Run the HTTP server.
pub async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    settings: Settings,
) -> anyhow::Result<()> {
    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);
    let max_body_bytes = settings.server.max_body_bytes;

    let state = Arc::new(AppState::from_settings(&settings)?);

    if !state.analyzer.is_configured() {
        Output::warning(&format!(
            "{} is not set; analysis requests will fail until it is configured.",
            settings.inference.api_key_env
        ));
    }

    let app = web::router(state, max_body_bytes);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Samtale Web Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Input form", "GET  /");
    Output::kv("Analyze (form)", "POST /analyze");
    Output::kv("Analyze (JSON)", "POST /api/analyze");
    Output::kv("History", "GET  /history");
    Output::kv("Download CSV", "GET  /download-csv");
    Output::kv("Health", "GET  /health");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}
