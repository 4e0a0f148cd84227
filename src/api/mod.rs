mod handlers;
mod models;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use handlers::{enhance, health, not_found};
pub use models::{EnhanceRequest, EnhanceResponse, ErrorResponse};

/// Upper bound on an enhance request body. Larger bodies get the generic
/// JSON failure instead of axum's plain-text 413.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/enhance",
            post(enhance).layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}
