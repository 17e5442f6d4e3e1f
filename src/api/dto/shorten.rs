//! DTO for the URL shortening endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to shorten a URL.
///
/// Full URL validation (parseability, DNS) happens in the service; the DTO
/// only rejects an empty body field up front.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}
