//! HTTP middleware for request processing.
//!
//! Provides path-parameter validation and observability middleware.

pub mod tracing;
pub mod validate_code;
