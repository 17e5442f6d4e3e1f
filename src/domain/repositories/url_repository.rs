//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for persisted URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new URL record with `access_count = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateUrl`] if the original URL or short code
    /// already exists (store-level UNIQUE constraint).
    /// Returns [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its original URL.
    ///
    /// Used to check whether a URL has already been shortened.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlRecord>, AppError>;

    /// Increments the access counter of a record by 1.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_access_count(&self, id: i64) -> Result<(), AppError>;

    /// Replaces the original URL of a record, leaving the counter untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateUrl`] if the new URL is already stored
    /// for another record.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn update_original_url(&self, id: i64, new_url: &str) -> Result<UrlRecord, AppError>;

    /// Permanently deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
