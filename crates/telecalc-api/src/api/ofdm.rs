//! OFDM endpoint.
//!
//! POST /api/ofdm — resource-grid throughput and spectral efficiency

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use telecalc_common::ofdm::{self, OfdmInput};

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::Explained;
use crate::explain::Scenario;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/ofdm", post(calculate))
}

async fn calculate(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<OfdmInput>,
) -> Result<Json<Explained>, ApiError> {
    let throughput = ofdm::compute(&body)?;
    tracing::debug!(
        bits_per_re = throughput.bits_per_re,
        throughput_bps = throughput.throughput_bps,
        "ofdm throughput computed"
    );

    let numbers = throughput.results();
    let explanation = state
        .explainer()
        .explain(&Scenario::label("OFDM"), &body, &numbers)
        .await?;

    tracing::info!(m_order = body.m_order, "ofdm explained");

    Ok(Json(Explained {
        numbers,
        explanation,
    }))
}
