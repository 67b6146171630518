//! Core traits for dependency injection and testability
//!
//! The installer talks to the network, the package manager and the user
//! only through these seams, so the whole install can run in tests against
//! in-memory fakes.

use crate::core::types::{ConfigAction, ConfigEntry, PluginFile, PluginManifest};
use crate::error::Result;

/// Where a plugin's manifest and files come from
pub trait PluginSource {
    /// Fetch and parse `plugin.bifrost`
    fn manifest(&self) -> Result<PluginManifest>;

    /// Fetch `files/<name>` as text
    fn file(&self, name: &str) -> Result<String>;

    /// Human-readable origin, used in messages
    fn describe(&self) -> String;
}

/// Adds and removes project dependencies
pub trait DependencyInstaller {
    /// Add `packages` in one invocation; `dev` selects dev dependencies
    fn add(&self, packages: &[String], dev: bool) -> Result<()>;

    /// Remove `packages` in one invocation
    fn remove(&self, packages: &[String]) -> Result<()>;

    /// Name shown to the user (`npm`, `pnpm`, ...)
    fn name(&self) -> &str;
}

/// Per-file and per-config decisions taken during an install
pub trait InstallPrompter {
    /// Project-relative destination for a plugin file. Returning
    /// `file.location` accepts the manifest default.
    fn file_destination(&mut self, file: &PluginFile) -> Result<String>;

    /// What to do with a fragment that is not yet present in its target
    fn config_action(&mut self, entry: &ConfigEntry, fragment: &str) -> Result<ConfigAction>;
}
