//! SCIM bulk provisioning
//!
//! Processes SCIM 2.0 bulk requests against a Grist server: the envelope is
//! checked, every operation is validated and dispatched in order, and the
//! per-operation outcomes are collected into a bulk response. Processing stops
//! early once the request's `failOnErrors` budget is used up.

mod errors;
mod processor;
mod transport;
mod types;


// Re-export all public types
pub use errors::{EnvelopeError, OperationError};
pub use processor::core::BulkProcessor;
pub use transport::{
    HttpTransport, SCIM_CONTENT_TYPE, ScimTransport, TransportRequest, TransportResponse,
};
pub use types::{
    BULK_REQUEST_SCHEMA, BULK_RESPONSE_SCHEMA, BulkMethod, BulkOperation, BulkOperationResult,
    BulkOutcome, BulkRequest, BulkResponse, ERROR_SCHEMA, OperationStatus, ScimErrorBody,
    ScimType,
};
