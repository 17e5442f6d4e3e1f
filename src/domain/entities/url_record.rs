//! URL record entity, the sole persisted entity of the service.

use chrono::{DateTime, Utc};

/// A stored mapping between a short code and an original URL.
///
/// `access_count` starts at 0 and is incremented on each successful
/// resolution of the short code.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub access_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new URL record.
///
/// `access_count` and `created_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_code: String,
}
