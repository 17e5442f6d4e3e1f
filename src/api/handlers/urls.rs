//! Handlers for short URL management (update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::record::UrlRecordResponse;
use crate::api::dto::update_url::UpdateUrlRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Points an existing short code at a new URL.
///
/// # Endpoint
///
/// `PUT /shorten/{short_code}`
///
/// # Request Body
///
/// ```json
/// { "newUrl": "https://new-destination.com" }
/// ```
///
/// The access counter is preserved across the update.
///
/// # Errors
///
/// Returns 400 Bad Request with `duplicate_url` if the new URL is already
/// shortened, or `not_found` if the short code is unknown.
pub async fn update_url_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUrlRequest>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    payload.validate()?;

    let record = state
        .url_service
        .update_short_url(&short_code, payload.new_url)
        .await?;

    Ok(Json(record.into()))
}

/// Permanently deletes a short URL.
///
/// # Endpoint
///
/// `DELETE /shorten/{short_code}`
///
/// Responds with `204 No Content` and an empty body. The delete is hard;
/// there is no restore.
///
/// # Errors
///
/// Returns 400 Bad Request with `not_found` if the short code is unknown.
pub async fn delete_url_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete_short_url(&short_code).await?;

    Ok(StatusCode::NO_CONTENT)
}
