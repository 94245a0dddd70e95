//! Telecalc API library.
//!
//! Re-exports the router, shared state, configuration, and the explanation
//! requestor so they can be used by integration tests.

pub mod api;
pub mod config;
pub mod explain;
pub mod state;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application: liveness route, `/api` tree, tracing and CORS.
///
/// CORS admits exactly `allowed_origin`, with credentials.
pub fn app(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(api::health::root))
        .nest("/api", api::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
