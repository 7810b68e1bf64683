//! Network utilities
//!
//! This module provides HTTP client construction for talking to a Grist server.

pub mod http;

// Re-export commonly used types and functions
pub use http::*;
