use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{info, instrument};

use crate::{error::EnhanceError, prompt::compose, AppState};

use super::models::{EnhanceRequest, EnhanceResponse, ErrorResponse};

/// `POST /api/enhance`. Validation and the key check happen before anything
/// is sent upstream.
#[instrument(skip_all)]
pub async fn enhance(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<EnhanceResponse>, EnhanceError> {
    let request = EnhanceRequest::from_body(&body?)?;

    let api_key = state
        .config
        .api_key()
        .ok_or(EnhanceError::ConfigurationMissing)?;

    let payload = compose(&state.config.system_prompt, &request.user_prompt);
    info!(prompt_chars = request.user_prompt.chars().count(), "enhancing prompt");

    let reply = state.upstream.enhance(api_key, &payload).await?;

    Ok(Json(EnhanceResponse {
        result: reply.into_text(),
    }))
}

#[instrument(skip_all)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
