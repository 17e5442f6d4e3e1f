//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::record::UrlRecordResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `200 OK` with the created record:
///
/// ```json
/// {
///   "id": 1,
///   "originalUrl": "https://example.com",
///   "shortCode": "aB3xY9",
///   "accessCount": 0,
///   "createdAt": "2026-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `invalid_format`, `duplicate_url`, or
/// `invalid_hostname` error codes; 500 on store failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    payload.validate()?;

    let record = state.url_service.create_short_url(payload.url).await?;

    Ok(Json(record.into()))
}
