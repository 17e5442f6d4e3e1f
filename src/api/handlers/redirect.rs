//! Handler for short URL resolution.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /shorten/{short_code}`
///
/// Each successful resolution increments the record's access counter.
/// Responds with `302 Found` and a `Location` header, matching the
/// service's public contract.
///
/// # Errors
///
/// Returns 400 Bad Request with `not_found` if the short code is unknown.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.url_service.retrieve_original_url(&short_code).await?;

    debug!(%short_code, %original_url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
