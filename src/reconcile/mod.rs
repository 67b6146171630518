//! Config reconciliation
//!
//! Decides whether a plugin's config fragment is already present in a local
//! file and, if not, computes the merged content. Pure: callers do the I/O.

pub mod env_file;
pub mod json;
pub mod text;

#[cfg(test)]
mod tests;

use crate::core::types::InsertType;
use crate::error::Result;
use std::fmt;
use std::path::Path;

/// Format handler selected from the target file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.json` / `.jsonc`
    Structured,
    /// `.env`, `*.env`
    Env,
    /// Anything else
    Text,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default();

        if file_name == ".env" {
            return FileFormat::Env;
        }

        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") || ext.eq_ignore_ascii_case("jsonc") => {
                FileFormat::Structured
            }
            Some(ext) if ext.eq_ignore_ascii_case("env") => FileFormat::Env,
            _ => FileFormat::Text,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured => write!(f, "json"),
            Self::Env => write!(f, "env"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Existence test: is `fragment` already present in `existing`?
///
/// Never fails. Unparseable structured content counts as "not applied" so the
/// caller still gets the chance to apply the fragment.
pub fn already_applied(existing: &str, fragment: &str, target: &Path) -> bool {
    match FileFormat::from_path(target) {
        FileFormat::Structured => json::already_applied(existing, fragment),
        FileFormat::Env => env_file::already_applied(existing, fragment),
        FileFormat::Text => text::already_applied(existing, fragment),
    }
}

/// Compute the new content of `target` after applying `fragment`.
///
/// `insert_type` only affects free-text targets.
pub fn apply(target: &Path, existing: &str, fragment: &str, insert_type: InsertType) -> Result<String> {
    match FileFormat::from_path(target) {
        FileFormat::Structured => json::apply(target, existing, fragment),
        FileFormat::Env => Ok(env_file::apply(existing, fragment)),
        FileFormat::Text => Ok(text::apply(existing, fragment, insert_type)),
    }
}
