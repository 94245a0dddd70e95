//! Cellular system endpoint.
//!
//! POST /api/cellular — cell count, channel plan, reuse geometry, capacity

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use telecalc_common::cellular::{self, CellularInput};
use telecalc_common::{MetricValue, ResultSet};

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::Explained;
use crate::explain::Scenario;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/cellular", post(calculate))
}

/// Formula-per-line instruction with the computed values filled in.
fn instruction(numbers: &ResultSet) -> String {
    let v = |label: &str| {
        numbers
            .get(label)
            .map_or_else(|| MetricValue::Absent.to_string(), ToString::to_string)
    };
    format!(
        "Write each output on its own line with the formula and numbers, plain text only:\n\
         Cell area = 2.6 * R^2 = {} km²\n\
         Total cells = ceil(Area / CellArea) = {}\n\
         Channels/cell = S / N = {}\n\
         Clusters = ceil(Cells / N) = {}\n\
         Reuse distance = R*sqrt(3N) = {} km\n\
         Freq-reuse factor = 1/N = {}\n\
         Co-channel ratio Q = sqrt(3N) = {}\n\
         Channels/cluster = k*N = {}\n\
         System capacity = clusters*S = {}\n\
         Include one short comment (<15 words) about feasibility at the end.",
        v("Cell Area (km²)"),
        v("Total Cells"),
        v("Channels per Cell"),
        v("Total Clusters"),
        v("Reuse Distance (km)"),
        v("Frequency Reuse Factor"),
        v("Co-channel Reuse Ratio Q"),
        v("Channels per Cluster"),
        v("System Capacity (channels)"),
    )
}

async fn calculate(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CellularInput>,
) -> Result<Json<Explained>, ApiError> {
    let plan = cellular::compute(&body)?;
    tracing::debug!(
        total_cells = plan.total_cells,
        channels_per_cell = plan.channels_per_cell,
        total_clusters = plan.total_clusters,
        "cellular plan computed"
    );

    let numbers = plan.results();
    let explanation = state
        .explainer()
        .explain(&Scenario::instruction(instruction(&numbers)), &body, &numbers)
        .await?;

    tracing::info!(cluster_size = body.cluster_size, "cellular plan explained");

    Ok(Json(Explained {
        numbers,
        explanation,
    }))
}
