//! Utility modules for gristctl
//!
//! ## Module Organization
//!
//! - **error**: Error type and result alias
//! - **logging**: `tracing` subscriber setup for the binary
//! - **net**: HTTP client construction

pub mod error; // Error handling
pub mod logging; // Logging
pub mod net; // Network & client utilities

/// Truncate string to specified length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Mask a secret for display, keeping only its last four characters
pub fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }
    let tail: String = secret.chars().skip(len - 4).collect();
    format!("{}{}", "*".repeat(len - 4), tail)
}
