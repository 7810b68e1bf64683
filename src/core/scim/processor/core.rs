//! Core BulkProcessor struct and public entrypoints

use super::super::errors::EnvelopeError;
use super::super::transport::{HttpTransport, ScimTransport};
use super::super::types::*;
use super::utils::{parse_failure_result, rejected_result};
use crate::config::Config;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Processor for SCIM bulk requests.
///
/// Holds no per-call state; one instance can serve any number of calls.
#[derive(Clone)]
pub struct BulkProcessor {
    /// Backend used for every dispatched operation
    pub(super) transport: Arc<dyn ScimTransport>,
    /// SCIM base URL that operation paths are joined onto
    pub(super) base_url: String,
}

impl BulkProcessor {
    /// Create a processor over an injected transport
    pub fn new(transport: Arc<dyn ScimTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Create a processor talking HTTP to the configured Grist server
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::new(Arc::new(transport), config.scim_base_url()))
    }

    /// SCIM base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Process raw request text.
    ///
    /// Text that does not parse into a bulk request is rejected with status 400
    /// and a single synthesized result describing the parse failure.
    pub async fn process_text(&self, text: &str) -> BulkOutcome {
        match serde_json::from_str::<BulkRequest>(text) {
            Ok(request) => self.process(request).await,
            Err(e) => {
                let error = EnvelopeError::Parse(e.to_string());
                warn!("Rejecting bulk request: {}", error);
                BulkOutcome::rejected(BulkResponse::new(vec![parse_failure_result(&error)]))
            }
        }
    }

    /// Process a parsed bulk request.
    ///
    /// Operations run one at a time in request order. Each one is validated,
    /// then dispatched if valid. Once the number of failed operations reaches
    /// `failOnErrors`, the remaining operations are left out of the response.
    pub async fn process(&self, request: BulkRequest) -> BulkOutcome {
        if let Err(e) = self.validate_envelope(&request) {
            warn!("Rejecting bulk request: {}", e);
            return BulkOutcome::rejected(BulkResponse::default());
        }

        let total = request.operations.len();
        let limit = request.failure_limit();
        info!(
            operations = total,
            fail_on_errors = ?limit,
            "Processing bulk request"
        );

        let mut results = Vec::with_capacity(total);
        let mut failure_count: u64 = 0;

        for (index, operation) in request.operations.into_iter().enumerate() {
            let result = match self.validate_operation(&operation) {
                Ok(method) => self.dispatch_operation(method, operation).await,
                Err(e) => {
                    warn!(index, bulk_id = ?operation.bulk_id, "Invalid bulk operation: {}", e);
                    rejected_result(&operation, &e)
                }
            };

            if result.status.is_failure() {
                failure_count += 1;
            }
            results.push(result);

            if limit.is_some_and(|limit| failure_count >= limit) {
                warn!(
                    "Stopping bulk request after {} failed operations, {} not processed",
                    failure_count,
                    total - index - 1
                );
                break;
            }
        }

        info!(
            "Bulk request completed: {} processed, {} failed",
            results.len(),
            failure_count
        );

        BulkOutcome::accepted(BulkResponse::new(results))
    }
}
