//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values.

pub const BINARY_NAME: &str = "bifrost-plugin";
pub const STABLE_PROJECT_ID: &str = "bifrost";
pub const ENV_PREFIX: &str = "BIFROST";
pub const PROJECT_CONFIG_FILE: &str = "config.bifrost";
pub const REGISTRY_FILE: &str = "registry.bifrost";
pub const MANIFEST_FILE: &str = "plugin.bifrost";
pub const PLUGIN_FILES_DIR: &str = "files";
pub const DEFAULT_RAW_BASE_URL: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_BRANCH: &str = "main";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

pub fn env_get(suffix: &str) -> Option<String> {
    std::env::var(env_key(suffix))
        .ok()
        .filter(|v| !v.trim().is_empty())
}
