//! Utility functions for building bulk operation results

use super::super::errors::{EnvelopeError, OperationError};
use super::super::types::*;
use crate::utils::error::GristError;
use serde_json::Value;

/// Result for an operation rejected before dispatch
pub(super) fn rejected_result(
    operation: &BulkOperation,
    error: &OperationError,
) -> BulkOperationResult {
    BulkOperationResult {
        method: operation.method.clone(),
        bulk_id: operation.bulk_id.clone(),
        location: None,
        status: OperationStatus::BAD_REQUEST,
        response: Some(error.to_error_body().to_value()),
    }
}

/// The single result returned when request text cannot be parsed
pub(super) fn parse_failure_result(error: &EnvelopeError) -> BulkOperationResult {
    BulkOperationResult {
        method: String::new(),
        bulk_id: None,
        location: None,
        status: OperationStatus::BAD_REQUEST,
        response: Some(error.to_error_body().to_value()),
    }
}

/// Result for an operation whose backend call produced no response
pub(super) fn transport_failure_result(
    method: String,
    bulk_id: Option<String>,
    error: &GristError,
) -> BulkOperationResult {
    let status = OperationStatus::new(error.status_code());
    BulkOperationResult {
        method,
        bulk_id,
        location: None,
        status,
        response: Some(ScimErrorBody::new(status, None, error.to_string()).to_value()),
    }
}

/// Map a raw backend body to a result payload.
///
/// Empty bodies are omitted, JSON is kept as parsed, anything else is kept as a
/// JSON string.
pub(super) fn response_payload(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }

    Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())))
}

/// `meta.location` of a returned SCIM resource
pub(super) fn extract_location(payload: Option<&Value>) -> Option<String> {
    payload?
        .pointer("/meta/location")
        .and_then(Value::as_str)
        .map(str::to_string)
}
