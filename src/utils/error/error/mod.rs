//! Error handling for gristctl
//!
//! This module defines the error types used for configuration and transport
//! failures. Bulk envelope and per-operation failures are reported as data in
//! the bulk response, not through this type.

mod helpers;
mod types;

pub use types::{GristError, Result};
