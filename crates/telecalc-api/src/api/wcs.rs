//! Wireless communication system endpoint.
//!
//! POST /api/wcs — bit rate at each stage of the coding chain

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use telecalc_common::wcs::{self, WcsInput};

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::Explained;
use crate::explain::Scenario;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/wcs", post(calculate))
}

async fn calculate(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<WcsInput>,
) -> Result<Json<Explained>, ApiError> {
    let chain = wcs::compute(&body)?;
    tracing::debug!(
        fs_hz = chain.sampling_rate_hz,
        burst_rate_bps = chain.burst_rate_bps,
        "coding chain computed"
    );

    let numbers = chain.results();
    let explanation = state
        .explainer()
        .explain(&Scenario::label("Wireless Communication"), &body, &numbers)
        .await?;

    tracing::info!(bandwidth_hz = body.bandwidth, "wcs explained");

    Ok(Json(Explained {
        numbers,
        explanation,
    }))
}
