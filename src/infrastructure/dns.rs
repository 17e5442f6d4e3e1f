//! System DNS resolution via the tokio resolver.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;
use tokio::net::lookup_host;

use crate::domain::resolver::HostResolver;

/// Resolves hostnames through the operating system resolver.
///
/// Uses `tokio::net::lookup_host`, which runs `getaddrinfo` on the blocking
/// pool; no extra resolver state is held.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioHostResolver;

impl TokioHostResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for TokioHostResolver {
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        // Port 0 satisfies the ToSocketAddrs contract; only addresses are kept.
        let addrs = lookup_host((host, 0)).await?;

        Ok(addrs.map(|addr| addr.ip()).collect())
    }
}
