//! HTTP API route definitions.

use axum::{routing::get, Router};

use super::handlers::{health, root, version, AppState};

/// Create the API router.
///
/// Exactly three GET routes; anything else falls through to axum's
/// default 404 handling.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/version", get(version))
        .with_state(state)
}
