//! Dispatch of validated bulk operations

use super::super::transport::TransportRequest;
use super::super::types::*;
use super::core::BulkProcessor;
use super::utils::{extract_location, response_payload, transport_failure_result};
use crate::utils::truncate_string;
use tracing::{debug, warn};

impl BulkProcessor {
    /// Send one validated operation to the backend and record what came back.
    ///
    /// Transport failures become a failed result; they never abort the bulk call.
    pub(super) async fn dispatch_operation(
        &self,
        method: BulkMethod,
        operation: BulkOperation,
    ) -> BulkOperationResult {
        let BulkOperation {
            method: raw_method,
            path,
            bulk_id,
            data,
        } = operation;

        let url = self.operation_url(&path);
        debug!(bulk_id = ?bulk_id, "Dispatching bulk operation: {} {}", method, url);

        let request = TransportRequest {
            method,
            url,
            body: data,
        };

        match self.transport.send(request).await {
            Ok(response) => {
                let status = OperationStatus::new(response.status);
                if status.is_failure() {
                    debug!(
                        bulk_id = ?bulk_id,
                        "Backend returned {} for {} {}: {}",
                        status,
                        method,
                        path,
                        truncate_string(&response.body, 200)
                    );
                }
                let payload = response_payload(&response.body);
                BulkOperationResult {
                    method: raw_method,
                    bulk_id,
                    location: extract_location(payload.as_ref()),
                    status,
                    response: payload,
                }
            }
            Err(e) => {
                warn!(
                    bulk_id = ?bulk_id,
                    transport = e.is_transport(),
                    "Bulk operation {} {} failed: {}",
                    method,
                    path,
                    e
                );
                transport_failure_result(raw_method, bulk_id, &e)
            }
        }
    }

    /// Join the SCIM base URL and an operation path with exactly one `/`
    pub(super) fn operation_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim().trim_start_matches('/')
        )
    }
}
