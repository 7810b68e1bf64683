//! Bulk request validation logic

use super::super::errors::{EnvelopeError, OperationError};
use super::super::types::{BulkMethod, BulkOperation, BulkRequest};
use super::core::BulkProcessor;

impl BulkProcessor {
    /// Validate the envelope before any operation is looked at
    pub(super) fn validate_envelope(&self, request: &BulkRequest) -> Result<(), EnvelopeError> {
        if !request.has_bulk_schema() {
            return Err(EnvelopeError::MissingSchema(request.schemas.clone()));
        }

        Ok(())
    }

    /// Validate one operation from its shape alone and resolve its verb
    pub(super) fn validate_operation(
        &self,
        operation: &BulkOperation,
    ) -> Result<BulkMethod, OperationError> {
        let method = BulkMethod::parse(&operation.method)
            .ok_or_else(|| OperationError::UnsupportedMethod(operation.method.clone()))?;

        if operation.path.trim().is_empty() {
            return Err(OperationError::MissingPath);
        }

        Ok(method)
    }
}
