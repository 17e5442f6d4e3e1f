//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and DNS lookups.
//!
//! # Modules
//!
//! - [`dns`] - System resolver implementation of [`crate::domain::resolver::HostResolver`]
//! - [`persistence`] - PostgreSQL repository implementations

pub mod dns;
pub mod persistence;
