//! # gristctl-scim
//!
//! SCIM 2.0 bulk provisioning client for Grist.
//!
//! A bulk request bundles an ordered list of create, replace, update and delete
//! operations against the user directory. This crate validates the envelope,
//! dispatches each operation to the Grist SCIM API one at a time in request
//! order, and assembles the bulk response, stopping early once the request's
//! `failOnErrors` budget is exhausted.
//!
//! ## Features
//!
//! - **Two entrypoints**: pre-parsed [`BulkRequest`] or raw request text
//! - **Per-operation outcomes**: an invalid verb, a missing path or a backend
//!   error is reported on that operation only; the call itself still succeeds
//! - **Injected transport**: the HTTP client is a constructor argument
//!   ([`ScimTransport`]), never global state
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gristctl_scim::{BulkOperation, BulkProcessor, BulkRequest, Config};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load()?;
//!     let processor = BulkProcessor::from_config(&config)?;
//!
//!     let request = BulkRequest::new(vec![
//!         BulkOperation::new("POST", "/Users")
//!             .with_bulk_id("alice")
//!             .with_data(json!({"userName": "alice@example.com"})),
//!     ])
//!     .with_fail_on_errors(1);
//!
//!     let outcome = processor.process(request).await;
//!     println!("{}", serde_json::to_string_pretty(&outcome.response)?);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GristError, Result};

// Export bulk processing
pub use crate::core::scim::{
    BulkMethod, BulkOperation, BulkOperationResult, BulkOutcome, BulkProcessor, BulkRequest,
    BulkResponse, HttpTransport, OperationStatus, ScimTransport, TransportRequest,
    TransportResponse,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (git {}, built {}, {})",
            self.version, self.git_hash, self.build_time, self.rust_version
        )
    }
}

/// Build information of this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
