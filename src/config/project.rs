//! Project config (`config.bifrost`) in the working directory

use crate::error::{BifrostError, Result};
use crate::project_identity::PROJECT_CONFIG_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub platform: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_install: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,
}

pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_CONFIG_FILE)
}

impl ProjectConfig {
    /// Load `config.bifrost` from `project_root`. A missing file is a
    /// precondition failure, not an empty config.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = config_path(project_root);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(BifrostError::ProjectConfigNotFound {
                    path: project_root.to_path_buf(),
                });
            }
            Err(e) => return Err(BifrostError::io(&path, e)),
        };

        serde_json::from_str(&content).map_err(|e| BifrostError::ParseError {
            file: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
