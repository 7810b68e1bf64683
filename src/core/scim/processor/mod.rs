//! Bulk processor module
//!
//! This module provides the bulk processing functionality split into logical components:
//! - `core`: `BulkProcessor` struct, entrypoints and the ordered result aggregation loop
//! - `validation`: Envelope and per-operation validation
//! - `execution`: Dispatch of a validated operation to the transport
//! - `utils`: Construction of synthesized results and backend body mapping

pub mod core;
mod execution;
mod utils;
mod validation;
