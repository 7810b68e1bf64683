//! Helper functions for creating and classifying errors

use super::types::GristError;

impl GristError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network(message.into())
    }

    /// HTTP status used when this error has to be reported inside a bulk
    /// response entry instead of being propagated.
    pub fn status_code(&self) -> u16 {
        match self {
            GristError::Serialization(_) => 400,
            GristError::Network(_) => 503,
            GristError::Config(_) => 500,
        }
    }

    /// Whether the error came from the network layer rather than from the
    /// request itself.
    pub fn is_transport(&self) -> bool {
        matches!(self, GristError::Network(_))
    }
}
