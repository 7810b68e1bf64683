//! Configuration validation

use super::Config;
use url::Url;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err(format!(
                "Grist URL is not set (use --url, {} or ~/.gristctl)",
                super::ENV_URL
            ));
        }

        let url = Url::parse(&self.url)
            .map_err(|e| format!("Grist URL '{}' is invalid: {}", self.url, e))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "Grist URL must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }

        if url.host_str().is_none() {
            return Err("Grist URL must have a valid host".to_string());
        }

        if self.token.trim().is_empty() {
            return Err(format!(
                "Grist API token is not set (use --token, {} or ~/.gristctl)",
                super::ENV_TOKEN
            ));
        }

        if self.timeout_secs == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
