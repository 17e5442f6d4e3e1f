//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - URL record storage and retrieval

pub mod pg_url_repository;

pub use pg_url_repository::PgUrlRepository;
