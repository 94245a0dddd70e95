//! Liveness check.
//!
//! GET / — static status message

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Status {
    pub message: &'static str,
}

pub async fn root() -> Json<Status> {
    Json(Status {
        message: "Backend is up and running!",
    })
}
