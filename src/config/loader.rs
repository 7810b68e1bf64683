//! Configuration loading utilities
//!
//! This module reads configuration values from the environment and from the
//! dotenv-format `~/.gristctl` file.

use crate::utils::error::{GristError, Result};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Grist server root URL
pub const ENV_URL: &str = "GRIST_URL";
/// Grist API key
pub const ENV_TOKEN: &str = "GRIST_TOKEN";
/// SCIM API path relative to the server root
pub const ENV_SCIM_PATH: &str = "GRIST_SCIM_PATH";
/// Request timeout in seconds
pub const ENV_TIMEOUT: &str = "GRIST_TIMEOUT";

pub const DEFAULT_SCIM_PATH: &str = "api/scim/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONFIG_FILE_NAME: &str = ".gristctl";

/// Look up a non-empty environment variable
pub fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// `$HOME/.gristctl`, or `None` when `HOME` is unset
pub fn default_config_path() -> Option<PathBuf> {
    env_lookup("HOME").map(|home| Path::new(&home).join(CONFIG_FILE_NAME))
}

/// Read `KEY=value` pairs from a dotenv-format file without touching the
/// process environment. A missing file yields an empty map.
pub fn read_config_file(path: &Path) -> Result<HashMap<String, String>> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            warn!("Configuration file not found: {}", path.display());
            return Ok(HashMap::new());
        }
        Err(e) => {
            return Err(GristError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            )));
        }
    };

    let mut values = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| {
            GristError::config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        if !value.is_empty() {
            values.insert(key, value);
        }
    }

    debug!("Loaded {} values from {}", values.len(), path.display());
    Ok(values)
}
