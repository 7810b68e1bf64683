//! Configuration management for gristctl
//!
//! Connection settings come from, in order of precedence: command-line flags,
//! environment variables, then the dotenv-format file `~/.gristctl`. The file is
//! only read when the environment lacks the server URL or the API token.

pub mod loader;
pub mod validation;

pub use loader::{
    DEFAULT_SCIM_PATH, DEFAULT_TIMEOUT_SECS, ENV_SCIM_PATH, ENV_TIMEOUT, ENV_TOKEN, ENV_URL,
};
pub use validation::Validate;

use crate::utils::error::{GristError, Result};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for a Grist server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server root, e.g. `https://grist.example.com`
    pub url: String,
    /// API key sent as a bearer token
    pub token: String,
    /// SCIM API path relative to `url`
    pub scim_path: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            scim_path: DEFAULT_SCIM_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Build a configuration from a key lookup function.
    ///
    /// Missing keys keep their defaults; nothing is validated here.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_URL) {
            config.url = url;
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            config.token = token;
        }
        if let Some(scim_path) = lookup(ENV_SCIM_PATH) {
            config.scim_path = scim_path;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            config.timeout_secs = timeout.trim().parse().map_err(|e| {
                GristError::config(format!("Invalid {} '{}': {}", ENV_TIMEOUT, timeout, e))
            })?;
        }

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(loader::env_lookup)
    }

    /// Load configuration from the environment, falling back to `~/.gristctl`,
    /// and validate it.
    pub fn load() -> Result<Self> {
        Self::load_with_overrides(None, None, None)
    }

    /// Same as [`Config::load`], with explicit values taking precedence over
    /// both the environment and the file.
    pub fn load_with_overrides(
        url: Option<String>,
        token: Option<String>,
        scim_path: Option<String>,
    ) -> Result<Self> {
        let path = loader::default_config_path();
        let config = Self::resolve(loader::env_lookup, path.as_deref())?
            .with_overrides(url, token, scim_path);
        config.validate()?;
        Ok(config)
    }

    /// Merge the environment (through `env`) with the config file at `path`.
    ///
    /// The file is read only when `GRIST_URL` or `GRIST_TOKEN` is missing from
    /// `env`, and environment values always win over file values.
    pub fn resolve<F>(env: F, path: Option<&Path>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let needs_file = env(ENV_URL).is_none() || env(ENV_TOKEN).is_none();

        let file_values = match path {
            Some(path) if needs_file => {
                info!("Reading configuration file: {}", path.display());
                loader::read_config_file(path)?
            }
            _ => HashMap::new(),
        };

        Self::from_lookup(|key| env(key).or_else(|| file_values.get(key).cloned()))
    }

    /// Apply explicit overrides, typically from command-line flags
    pub fn with_overrides(
        mut self,
        url: Option<String>,
        token: Option<String>,
        scim_path: Option<String>,
    ) -> Self {
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(token) = token {
            self.token = token;
        }
        if let Some(scim_path) = scim_path {
            self.scim_path = scim_path;
        }
        self
    }

    /// Base URL of the SCIM API, joined with exactly one `/`
    pub fn scim_base_url(&self) -> String {
        let root = self.url.trim_end_matches('/');
        let path = self.scim_path.trim_matches('/');
        if path.is_empty() {
            root.to_string()
        } else {
            format!("{}/{}", root, path)
        }
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        Validate::validate(self).map_err(GristError::Config)
    }
}
