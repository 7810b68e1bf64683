//! Local SCIM backend for integration tests

use gristctl_scim::{BulkProcessor, HttpTransport};
use std::sync::Arc;
use wiremock::MockServer;

/// SCIM path mounted on the mock server
pub const SCIM_PATH: &str = "/api/scim/v2";
/// Bearer token the processor sends
pub const TEST_TOKEN: &str = "test-token";

/// A wiremock server standing in for a Grist SCIM endpoint
pub struct ScimTestServer {
    pub server: MockServer,
}

impl ScimTestServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// SCIM base URL on the mock server
    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.uri(), SCIM_PATH)
    }

    /// Processor using the real HTTP transport against this server
    pub fn processor(&self) -> BulkProcessor {
        let transport = HttpTransport::new(reqwest::Client::new(), TEST_TOKEN);
        BulkProcessor::new(Arc::new(transport), self.base_url())
    }

    /// Number of requests the server has seen
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}
