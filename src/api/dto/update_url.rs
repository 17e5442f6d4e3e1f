//! DTO for the URL update endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to point an existing short code at a new URL.
///
/// The service checks the new URL for duplication only; format and DNS are
/// not re-validated on update.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUrlRequest {
    #[validate(length(min = 1, message = "newUrl must not be empty"))]
    pub new_url: String,
}
