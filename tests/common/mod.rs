//! Common test utilities for gristctl-scim
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{BulkRequestFactory, ScimTestServer};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let server = ScimTestServer::start().await;
//!     let processor = server.processor();
//!     // ...
//! }
//! ```

pub mod fixtures;
pub mod server;

// Re-export commonly used items
pub use fixtures::BulkRequestFactory;
pub use server::{SCIM_PATH, ScimTestServer, TEST_TOKEN};
