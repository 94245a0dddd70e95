//! Telecalc API server
//!
//! Serves the link budget, cellular, wireless coding and OFDM calculators,
//! each answering with its numbers and a plain-language explanation.

use std::sync::Arc;

use axum::http::HeaderValue;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use telecalc_api::config::Config;
use telecalc_api::explain::openai::OpenAiGenerator;
use telecalc_api::explain::ExplanationRequestor;
use telecalc_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Logging ─────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // ── Configuration ───────────────────────────────────────────
    let config = Config::parse();
    let allowed_origin = HeaderValue::from_str(&config.allowed_origin)
        .map_err(|e| anyhow::anyhow!("invalid ALLOWED_ORIGIN {:?}: {e}", config.allowed_origin))?;

    // ── Text generation ─────────────────────────────────────────
    let generator = OpenAiGenerator::new(config.openai())?;
    tracing::info!(
        model = generator.model(),
        base_url = %config.openai_base_url,
        timeout_secs = config.request_timeout_secs,
        "text generation client ready"
    );
    let state = AppState::new(ExplanationRequestor::new(Arc::new(generator)));

    // ── Router ──────────────────────────────────────────────────
    let app = telecalc_api::app(state, allowed_origin);

    // ── Listen ──────────────────────────────────────────────────
    tracing::info!(
        allowed_origin = %config.allowed_origin,
        "telecalc-api listening on {}",
        config.listen_addr
    );
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
