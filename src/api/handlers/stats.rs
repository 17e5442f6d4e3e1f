//! Handler for short URL statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::record::UrlRecordResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full record for a short code, including its access count.
///
/// # Endpoint
///
/// `GET /shorten/{short_code}/stats`
///
/// # Errors
///
/// Returns 400 Bad Request with `not_found` if the short code is unknown.
pub async fn stats_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    let record = state.url_service.get_statistics(&short_code).await?;

    Ok(Json(record.into()))
}
