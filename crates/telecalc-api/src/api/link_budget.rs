//! Link budget endpoint.
//!
//! POST /api/link-budget — EIRP and received power

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use telecalc_common::link_budget::{self, LinkBudgetInput};

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::Explained;
use crate::explain::Scenario;
use crate::state::AppState;

const INSTRUCTION: &str = "Explain step-by-step how each input was used to compute the link budget.\n\
• Show the formula in simple form (not LaTeX) for EIRP and substitute the user's numbers.\n\
• Combine gains and losses to get Received Power and show that substitution as well.\n\
Keep it concise (≤ 140 words) but include the numeric substitutions and final answers.";

pub fn router() -> Router<AppState> {
    Router::new().route("/link-budget", post(calculate))
}

async fn calculate(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LinkBudgetInput>,
) -> Result<Json<Explained>, ApiError> {
    let budget = link_budget::compute(&body)?;
    tracing::debug!(
        eirp_dbm = budget.eirp_dbm,
        fspl_db = budget.fspl_db,
        received_power_dbm = budget.received_power_dbm,
        "link budget computed"
    );

    let numbers = budget.results();
    let explanation = state
        .explainer()
        .explain(&Scenario::instruction(INSTRUCTION), &body, &numbers)
        .await?;

    tracing::info!(
        distance_km = body.distance_km,
        frequency_mhz = body.frequency_mhz,
        "link budget explained"
    );

    Ok(Json(Explained {
        numbers,
        explanation,
    }))
}
