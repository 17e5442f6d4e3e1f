//! URL shortening service: the five core operations.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::domain::resolver::HostResolver;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use serde_json::json;
use url::Url;

/// Service implementing create, retrieve, update, delete, and statistics
/// for short URLs.
///
/// Generic over the repository and resolver so unit tests can substitute
/// mocks for the database and DNS.
pub struct UrlService<R: UrlRepository, H: HostResolver> {
    repository: Arc<R>,
    resolver: Arc<H>,
}

impl<R: UrlRepository, H: HostResolver> UrlService<R, H> {
    /// Creates a new URL service.
    pub fn new(repository: Arc<R>, resolver: Arc<H>) -> Self {
        Self {
            repository,
            resolver,
        }
    }

    /// Shortens a URL.
    ///
    /// # Flow
    ///
    /// 1. Parse the input as an absolute URL
    /// 2. Reject URLs that are already shortened
    /// 3. Resolve the hostname via DNS
    /// 4. Generate a short code, regenerating once on collision
    /// 5. Insert the record with `access_count = 0`
    ///
    /// The duplicate and collision checks are check-then-insert without a
    /// transaction; the store's UNIQUE constraints backstop the race.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidFormat`] if the input does not parse
    /// - [`AppError::DuplicateUrl`] if the URL is already stored
    /// - [`AppError::InvalidHostname`] if the host yields no address
    pub async fn create_short_url(&self, url: String) -> Result<UrlRecord, AppError> {
        let parsed = Url::parse(&url).map_err(|e| {
            AppError::invalid_format("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if self
            .repository
            .find_by_original_url(&url)
            .await?
            .is_some()
        {
            return Err(AppError::duplicate_url(
                "URL already exists",
                json!({ "url": url }),
            ));
        }

        let host = parsed
            .host_str()
            .ok_or_else(|| AppError::invalid_hostname("Invalid hostname", json!({ "url": url })))?;

        match self.resolver.resolve(host).await {
            Ok(addrs) if !addrs.is_empty() => {}
            _ => {
                return Err(AppError::invalid_hostname(
                    "Invalid hostname",
                    json!({ "host": host }),
                ));
            }
        }

        let mut short_code = generate_code();
        if self
            .repository
            .find_by_short_code(&short_code)
            .await?
            .is_some()
        {
            // Single regeneration only. A second collision is left to the
            // store's UNIQUE constraint.
            short_code = generate_code();
        }

        self.repository
            .insert(NewUrlRecord {
                original_url: url,
                short_code,
            })
            .await
    }

    /// Resolves a short code, incrementing its access counter.
    ///
    /// Returns the original URL for redirection. The returned URL is the
    /// one read before the increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    pub async fn retrieve_original_url(&self, short_code: &str) -> Result<String, AppError> {
        let record = self.find_record(short_code).await?;
        self.repository.increment_access_count(record.id).await?;

        Ok(record.original_url)
    }

    /// Points an existing short code at a new URL.
    ///
    /// The access counter is preserved. The new URL is checked for
    /// duplication against all records, but its format and hostname are
    /// not re-validated.
    ///
    /// # Errors
    ///
    /// - [`AppError::DuplicateUrl`] if any record already stores `new_url`
    /// - [`AppError::NotFound`] if no record matches the code
    pub async fn update_short_url(
        &self,
        short_code: &str,
        new_url: String,
    ) -> Result<UrlRecord, AppError> {
        if self
            .repository
            .find_by_original_url(&new_url)
            .await?
            .is_some()
        {
            return Err(AppError::duplicate_url(
                "URL already exists",
                json!({ "url": new_url }),
            ));
        }

        let record = self.find_record(short_code).await?;

        self.repository
            .update_original_url(record.id, &new_url)
            .await
    }

    /// Permanently deletes a short URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    pub async fn delete_short_url(&self, short_code: &str) -> Result<(), AppError> {
        let record = self.find_record(short_code).await?;
        self.repository.delete(record.id).await
    }

    /// Returns the full record for a short code, including its access count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    pub async fn get_statistics(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        self.find_record(short_code).await
    }

    async fn find_record(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_code": short_code }))
            })
    }
}
