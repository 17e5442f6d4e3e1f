//! Hostname resolution seam.
//!
//! Create validates that a URL's hostname actually resolves before storing
//! it. The lookup goes through this trait so the service can be unit-tested
//! without touching the network.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;

/// DNS lookup interface.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::TokioHostResolver`] - system resolver via tokio
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves a hostname to its addresses.
    ///
    /// An `Err` or an empty list both mean the host does not resolve; the
    /// caller decides how to surface that.
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}
