//! Shared application state injected into HTTP handlers.
//!
//! The full service graph is constructed once in [`crate::server::run`] and
//! handed to the router; nothing is process-global.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::UrlService;
use crate::infrastructure::dns::TokioHostResolver;
use crate::infrastructure::persistence::PgUrlRepository;

/// The concrete service type wired at startup.
pub type SharedUrlService = Arc<UrlService<PgUrlRepository, TokioHostResolver>>;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub url_service: SharedUrlService,
}

impl AppState {
    pub fn new(db: PgPool, url_service: SharedUrlService) -> Self {
        Self { db, url_service }
    }
}
