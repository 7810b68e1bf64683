//! Error types for gristctl

use thiserror::Error;

/// Result type alias for gristctl
pub type Result<T> = std::result::Result<T, GristError>;

/// Main error type for gristctl
#[derive(Error, Debug)]
pub enum GristError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network errors
    #[error("Network error: {0}")]
    Network(String),
}
