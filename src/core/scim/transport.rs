//! Backend transport for dispatched bulk operations
//!
//! The bulk processor never talks to the network itself. It hands each
//! dispatched operation to a [`ScimTransport`], which performs exactly one
//! HTTP call and reports the status and raw body. [`HttpTransport`] is the
//! reqwest-backed implementation used against a real Grist server.

use super::types::BulkMethod;
use crate::config::Config;
use crate::utils::error::{GristError, Result};
use crate::utils::net::create_client;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, warn};

/// Media type of SCIM request and response bodies
pub const SCIM_CONTENT_TYPE: &str = "application/scim+json";

/// One backend call
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: BulkMethod,
    /// Absolute URL of the target resource
    pub url: String,
    /// JSON body, sent only when present
    pub body: Option<Value>,
}

/// What came back from the backend, whatever the status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Performs the network call for a dispatched operation.
///
/// Implementations return `Ok` for every HTTP response, including 4xx and
/// 5xx; `Err` is reserved for calls that produced no response at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScimTransport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

impl From<BulkMethod> for Method {
    fn from(method: BulkMethod) -> Self {
        match method {
            BulkMethod::Post => Method::POST,
            BulkMethod::Put => Method::PUT,
            BulkMethod::Patch => Method::PATCH,
            BulkMethod::Delete => Method::DELETE,
        }
    }
}

/// reqwest-backed transport authenticating with a bearer token
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    token: String,
}

impl HttpTransport {
    /// Wrap an existing client. The client is reused for every call.
    pub fn new(client: Client, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
        }
    }

    /// Build a client from the configured timeout
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = create_client(config.timeout())?;
        Ok(Self::new(client, config.token.clone()))
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ScimTransport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method.into(), &request.url)
            .bearer_auth(&self.token)
            .header(ACCEPT, SCIM_CONTENT_TYPE);

        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, SCIM_CONTENT_TYPE)
                .body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await.map_err(|e| {
            GristError::network(format!("Error sending request {}: {}", request.url, e))
        })?;

        // The status line already arrived, so a body read failure keeps it.
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(status, "Error reading response body {}: {}", request.url, e);
                String::new()
            }
        };

        Ok(TransportResponse { status, body })
    }
}
