use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Remote descriptor of one installable plugin (plugin.bifrost).
// Fetched once per install and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub platform: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub files: Vec<PluginFile>,
    #[serde(default)]
    pub configs: Vec<ConfigEntry>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub dev_dependencies: Vec<String>,
}

// A file shipped by the plugin: fetched from files/<name>, written to <location>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginFile {
    pub name: String,
    pub location: String,
}

// One config fragment to reconcile into one pre-existing local file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntry {
    pub target_file: String,
    pub config_source: String,
    #[serde(default)]
    pub insert_type: InsertType,
}

// Insertion policy. Only free-text targets honour it; structured and env
// targets always merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertType {
    #[default]
    Append,
    Replace,
    Merge,
}

impl fmt::Display for InsertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Append => write!(f, "append"),
            Self::Replace => write!(f, "replace"),
            Self::Merge => write!(f, "merge"),
        }
    }
}

impl FromStr for InsertType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "append" => Ok(Self::Append),
            "replace" => Ok(Self::Replace),
            "merge" => Ok(Self::Merge),
            other => Err(format!(
                "Unknown insert type '{}'. Valid: append, replace, merge",
                other
            )),
        }
    }
}

// What the caller decided to do with a fragment that is not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    AutoApply,
    Manual,
    Skip,
}

impl fmt::Display for ConfigAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AutoApply => write!(f, "Auto-apply changes"),
            Self::Manual => write!(f, "Copy manually"),
            Self::Skip => write!(f, "Skip this configuration"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses_camel_case_fields() {
        let raw = r#"{
            "name": "auth",
            "platform": "next",
            "files": [{ "name": "auth.ts", "location": "src/lib/auth.ts" }],
            "configs": [
                { "targetFile": ".env", "configSource": "env.txt", "insertType": "append" }
            ],
            "dependencies": ["better-auth"],
            "devDependencies": ["@types/node"]
        }"#;

        let manifest: PluginManifest = serde_json::from_str(raw).expect("parse manifest");
        assert_eq!(manifest.platform, "next");
        assert_eq!(manifest.files[0].location, "src/lib/auth.ts");
        assert_eq!(manifest.configs[0].target_file, ".env");
        assert_eq!(manifest.configs[0].insert_type, InsertType::Append);
        assert_eq!(manifest.dev_dependencies, vec!["@types/node".to_string()]);
    }

    #[test]
    fn manifest_lists_default_to_empty() {
        let manifest: PluginManifest =
            serde_json::from_str(r#"{ "platform": "astro" }"#).expect("parse manifest");
        assert!(manifest.files.is_empty());
        assert!(manifest.configs.is_empty());
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn insert_type_rejects_unknown_policy() {
        let raw = r#"{ "targetFile": "a.txt", "configSource": "a", "insertType": "prepend" }"#;
        assert!(serde_json::from_str::<ConfigEntry>(raw).is_err());
        assert_eq!("Replace".parse::<InsertType>(), Ok(InsertType::Replace));
    }
}
