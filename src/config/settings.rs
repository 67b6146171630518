//! Runtime settings
//!
//! Knobs read from `BIFROST_*` environment variables. Everything has a
//! default, so a bare environment installs straight from GitHub.

use crate::error::{BifrostError, Result};
use crate::project_identity::{self, DEFAULT_BRANCH, DEFAULT_RAW_BASE_URL};
use std::time::Duration;

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Raw-content host serving `<owner>/<repo>/<branch>/...`
    pub raw_base_url: String,
    /// Branch plugin manifests and files are read from
    pub branch: String,
    /// Per-request timeout for every remote fetch
    pub http_timeout: Duration,
    /// Permit `http://` base URLs
    pub allow_insecure_http: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            raw_base_url: DEFAULT_RAW_BASE_URL.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            allow_insecure_http: false,
        }
    }
}

impl Settings {
    /// Load settings from the environment, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(project_identity::env_get)
    }

    /// Build settings from an arbitrary `SUFFIX -> value` lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(url) = lookup("RAW_BASE_URL") {
            settings.raw_base_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(branch) = lookup("BRANCH") {
            settings.branch = branch.trim().to_string();
        }

        if let Some(raw) = lookup("HTTP_TIMEOUT") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                BifrostError::Other(format!(
                    "Invalid value for {}: '{}'. Expected whole seconds",
                    project_identity::env_key("HTTP_TIMEOUT"),
                    raw
                ))
            })?;
            if secs == 0 {
                return Err(BifrostError::Other(format!(
                    "{} must be greater than zero",
                    project_identity::env_key("HTTP_TIMEOUT")
                )));
            }
            settings.http_timeout = Duration::from_secs(secs);
        }

        if let Some(flag) = lookup("ALLOW_INSECURE_HTTP") {
            settings.allow_insecure_http = matches!(flag.trim(), "1" | "true" | "yes");
        }

        Ok(settings)
    }
}
