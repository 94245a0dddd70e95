//! REST API route tree.

pub mod cellular;
pub mod error;
pub mod extract;
pub mod health;
pub mod link_budget;
pub mod ofdm;
pub mod wcs;

use axum::Router;
use serde::Serialize;

use telecalc_common::ResultSet;

use crate::state::AppState;

/// Build the `/api` router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(link_budget::router())
        .merge(cellular::router())
        .merge(wcs::router())
        .merge(ofdm::router())
}

/// Body returned by every calculator endpoint.
#[derive(Debug, Serialize)]
pub struct Explained {
    pub numbers: ResultSet,
    pub explanation: String,
}
