//! Bulk-level and operation-level rejection reasons

use super::types::{OperationStatus, ScimErrorBody, ScimType};
use thiserror::Error;

/// The envelope cannot be processed at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Input text is not a valid bulk request document
    #[error("Malformed bulk request: {0}")]
    Parse(String),

    /// `schemas` lacks the bulk-request URN
    #[error("Bulk request schemas {0:?} do not include the bulk request schema")]
    MissingSchema(Vec<String>),
}

impl EnvelopeError {
    pub fn to_error_body(&self) -> ScimErrorBody {
        ScimErrorBody::new(
            OperationStatus::BAD_REQUEST,
            Some(ScimType::InvalidSyntax),
            self.to_string(),
        )
    }
}

/// A single operation is not eligible for dispatch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("Method '{0}' is not allowed in a bulk request")]
    UnsupportedMethod(String),

    #[error("Bulk operation is missing a path")]
    MissingPath,
}

impl OperationError {
    pub fn scim_type(&self) -> ScimType {
        match self {
            OperationError::UnsupportedMethod(_) => ScimType::InvalidValue,
            OperationError::MissingPath => ScimType::InvalidPath,
        }
    }

    pub fn to_error_body(&self) -> ScimErrorBody {
        ScimErrorBody::new(
            OperationStatus::BAD_REQUEST,
            Some(self.scim_type()),
            self.to_string(),
        )
    }
}
