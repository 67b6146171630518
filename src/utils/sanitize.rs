//! Input sanitization utilities for security
//!
//! Plugin manifests are remote input: dependency names reach a package
//! manager's argv, file locations reach the filesystem, and source names
//! reach a URL. Everything is checked here before it is used.

use crate::error::{BifrostError, Result};
use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

/// Safe characters for npm-style dependency specs
/// Allows: alphanumeric, `@scope/name`, version ranges (`^~=<>*`), tags and git refs (`:#`)
static SAFE_PACKAGE_SPEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9@._+/^~=<>*:#-]+$").expect("Invalid regex pattern"));

/// Characters that could be dangerous in shell contexts
static SHELL_DANGEROUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[;`$(){}|&\\'"\s]"#).expect("Invalid regex pattern"));

/// Validate a dependency spec before it is handed to a package manager
///
/// # Security
/// Package managers are spawned with an argv, never through a shell, but a
/// spec like `--registry=evil` would still be read as a flag. Leading dashes,
/// shell metacharacters and whitespace are rejected.
///
/// Specs are single tokens: multi-part npm ranges such as `react@^17 || ^18`
/// are refused because of the space and `|`. Use one range (`react@>=17`).
pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(BifrostError::UnsafeInput(
            "Dependency name cannot be empty".to_string(),
        ));
    }

    if name.len() > 256 {
        return Err(BifrostError::UnsafeInput(format!(
            "Dependency name too long (max 256 chars): {}...",
            name.chars().take(50).collect::<String>()
        )));
    }

    if name.starts_with('-') {
        return Err(BifrostError::UnsafeInput(format!(
            "Dependency name cannot start with '-': {}",
            name
        )));
    }

    if SHELL_DANGEROUS.is_match(name) {
        return Err(BifrostError::UnsafeInput(format!(
            "Dependency name contains unsafe characters: {}",
            name
        )));
    }

    if !SAFE_PACKAGE_SPEC.is_match(name) {
        return Err(BifrostError::UnsafeInput(format!(
            "Dependency name contains invalid characters: {}",
            name
        )));
    }

    if name.contains("..") {
        return Err(BifrostError::UnsafeInput(format!(
            "Dependency name cannot contain path traversal: {}",
            name
        )));
    }

    Ok(())
}

/// Validate a list of dependency names
pub fn validate_package_names(names: &[String]) -> Result<()> {
    for name in names {
        validate_package_name(name)?;
    }
    Ok(())
}

/// Validate a project-relative destination and return it as a normalized path.
///
/// Absolute paths, drive prefixes and `..` components are rejected so a
/// manifest can never write outside the project directory.
pub fn validate_relative_path(raw: &str) -> Result<PathBuf> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BifrostError::UnsafeInput("Path cannot be empty".to_string()));
    }

    let mut normalized = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(BifrostError::UnsafeInput(format!(
                    "Path cannot contain '..': {}",
                    raw
                )));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(BifrostError::UnsafeInput(format!(
                    "Path must be relative to the project: {}",
                    raw
                )));
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        return Err(BifrostError::UnsafeInput(format!(
            "Path does not name a file: {}",
            raw
        )));
    }

    Ok(normalized)
}

/// Validate a file name inside the plugin repository's `files/` directory
pub fn validate_source_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(BifrostError::UnsafeInput(
            "Plugin source name cannot be empty".to_string(),
        ));
    }

    if name.starts_with('/')
        || name.contains('\\')
        || name.contains('?')
        || name.contains('#')
        || name.split('/').any(|segment| segment == "..")
    {
        return Err(BifrostError::UnsafeInput(format!(
            "Plugin source name is not a plain relative path: {}",
            name
        )));
    }

    Ok(())
}

/// Validate a GitHub `owner/repo` identifier
pub fn validate_github_slug(slug: &str) -> Result<()> {
    static SLUG: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]*/[A-Za-z0-9._-]+$").expect("Invalid regex pattern")
    });

    if !SLUG.is_match(slug) || slug.ends_with("/..") || slug.ends_with("/.") {
        return Err(BifrostError::UnsafeInput(format!(
            "Expected a GitHub 'owner/repo' identifier, got '{}'",
            slug
        )));
    }

    Ok(())
}
