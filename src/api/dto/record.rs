//! JSON representation of a URL record.

use crate::domain::entities::UrlRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Wire shape of a URL record.
///
/// Field names are camelCase to match the service's public contract,
/// e.g. `{"id": 1, "originalUrl": "...", "shortCode": "aB3xY9",
/// "accessCount": 0, "createdAt": "..."}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecordResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub access_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<UrlRecord> for UrlRecordResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            original_url: record.original_url,
            short_code: record.short_code,
            access_count: record.access_count,
            created_at: record.created_at,
        }
    }
}
