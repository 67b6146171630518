//! Plugin registry (`registry.bifrost`)
//!
//! The registry ships with the tool, not with the project. It maps plugin
//! names to the GitHub repository holding their manifest.

use crate::error::{BifrostError, Result};
use crate::project_identity::{self, REGISTRY_FILE, STABLE_PROJECT_ID};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryPlugin {
    pub name: String,
    pub platform: String,
    pub github: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    plugins: Vec<RegistryPlugin>,
}

impl Registry {
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let plugins: Vec<RegistryPlugin> =
            serde_json::from_str(content).map_err(|e| BifrostError::ParseError {
                file: origin.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { plugins })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| BifrostError::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Load the first registry found in [`candidate_paths`]
    pub fn load() -> Result<Self> {
        let candidates = candidate_paths();
        match candidates.iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from(path),
            None => Err(BifrostError::RegistryNotFound {
                searched: candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    pub fn plugins(&self) -> &[RegistryPlugin] {
        &self.plugins
    }

    pub fn find(&self, name: &str) -> Option<&RegistryPlugin> {
        self.plugins.iter().find(|p| p.name == name)
    }

    /// Plugins whose platform matches the project's, in registry order
    pub fn compatible(&self, platform: &str) -> Vec<&RegistryPlugin> {
        self.plugins
            .iter()
            .filter(|p| super::is_platform_compatible(platform, &p.platform))
            .collect()
    }
}

/// Registry locations in lookup order: `BIFROST_REGISTRY`, next to the
/// executable, one level above it, then the per-user data directory.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(explicit) = project_identity::env_get("REGISTRY") {
        paths.push(PathBuf::from(explicit));
    }

    if let Ok(exe) = std::env::current_exe() {
        let exe = fs::canonicalize(&exe).unwrap_or(exe);
        if let Some(dir) = exe.parent() {
            paths.push(dir.join(REGISTRY_FILE));
            if let Some(parent) = dir.parent() {
                paths.push(parent.join(REGISTRY_FILE));
            }
        }
    }

    if let Some(proj) = ProjectDirs::from("dev", STABLE_PROJECT_ID, STABLE_PROJECT_ID) {
        paths.push(proj.data_dir().join(REGISTRY_FILE));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"[
        { "name": "auth", "platform": "next", "github": "bifrost-dev/auth", "description": "Auth" },
        { "name": "seo", "platform": "astro", "github": "bifrost-dev/seo", "description": "SEO" },
        { "name": "db", "platform": "next", "github": "bifrost-dev/db" }
    ]"#;

    #[test]
    fn find_resolves_name_to_github() {
        let registry = Registry::parse(SAMPLE, Path::new("registry.bifrost")).expect("parse");
        assert_eq!(registry.find("seo").map(|p| p.github.as_str()), Some("bifrost-dev/seo"));
        assert!(registry.find("missing").is_none());
    }

    #[test]
    fn compatible_filters_by_platform_in_order() {
        let registry = Registry::parse(SAMPLE, Path::new("registry.bifrost")).expect("parse");
        let names: Vec<&str> = registry
            .compatible("next")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["auth", "db"]);
        assert!(registry.compatible("remix").is_empty());
    }

    #[test]
    fn load_from_reports_malformed_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(REGISTRY_FILE);
        fs::write(&path, "{}").expect("write");
        let err = Registry::load_from(&path).expect_err("not an array");
        assert!(matches!(err, BifrostError::ParseError { .. }));
    }

    #[test]
    fn candidates_include_executable_directory() {
        let paths = candidate_paths();
        assert!(paths.iter().any(|p| p.ends_with(REGISTRY_FILE)));
    }
}
