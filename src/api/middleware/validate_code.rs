//! Path-parameter validation middleware for short code routes.

use axum::{
    extract::{Path, Request},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::error::AppError;

/// Rejects requests whose `short_code` path segment is blank.
///
/// On failure the middleware returns 400 and the handler is never invoked.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::validate_code;
///
/// let routes = Router::new()
///     .route("/shorten/{short_code}", get(redirect_handler))
///     .route_layer(middleware::from_fn(validate_code::layer));
/// ```
pub async fn layer(
    Path(short_code): Path<String>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if short_code.trim().is_empty() {
        return Err(AppError::invalid_format(
            "Short code is required",
            json!({ "param": "short_code" }),
        ));
    }

    Ok(next.run(request).await)
}
