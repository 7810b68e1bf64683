//! HTTP client construction
//!
//! A single `reqwest::Client` keeps its connection pool for its whole lifetime,
//! so callers build one per configured server and hand it to whatever needs to
//! talk to that server. Nothing here is stored in process-wide state.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gristctl_scim::utils::net::http::create_client;
//!
//! let client = create_client(Duration::from_secs(30))?;
//! let response = client.get("https://grist.example.com/api/orgs").send().await?;
//! ```

use crate::utils::error::{GristError, Result};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP client pool
#[derive(Debug, Clone)]
pub struct HttpClientPoolConfig {
    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,
    /// Idle connection timeout
    pub pool_idle_timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// TCP keepalive interval
    pub tcp_keepalive: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientPoolConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: 8,
            pool_idle_timeout: Duration::from_secs(90),
            connect_timeout: Duration::from_secs(10),
            tcp_keepalive: Duration::from_secs(60),
            user_agent: format!("gristctl-scim/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Create an HTTP client with the given overall request timeout
pub fn create_client(timeout: Duration) -> Result<Client> {
    create_client_with_config(timeout, &HttpClientPoolConfig::default())
}

/// Create an HTTP client with explicit pool settings
pub fn create_client_with_config(timeout: Duration, config: &HttpClientPoolConfig) -> Result<Client> {
    debug!(timeout_secs = timeout.as_secs(), "Creating HTTP client");

    ClientBuilder::new()
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .pool_idle_timeout(config.pool_idle_timeout)
        .timeout(timeout)
        .connect_timeout(config.connect_timeout)
        .tcp_keepalive(config.tcp_keepalive)
        .tcp_nodelay(true)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| GristError::config(format!("Failed to build HTTP client: {}", e)))
}
