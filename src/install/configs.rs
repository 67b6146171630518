use super::transaction::{Transaction, UndoAction};
use crate::core::types::{ConfigAction, ConfigEntry};
use crate::error::{BifrostError, Result};
use crate::reconcile;
use crate::traits::{InstallPrompter, PluginSource};
use crate::ui as output;
use crate::utils::sanitize;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOutcome {
    /// Fragment merged into the target
    Applied,
    /// Target already contained the fragment
    AlreadyPresent,
    /// Target file does not exist locally; configs never create files
    TargetMissing,
    /// Shown to the user for manual editing
    Manual,
    /// Declined by the user
    Skipped,
}

impl fmt::Display for ConfigOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => write!(f, "applied"),
            Self::AlreadyPresent => write!(f, "already present"),
            Self::TargetMissing => write!(f, "target missing"),
            Self::Manual => write!(f, "manual"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigReport {
    pub target_file: String,
    pub outcome: ConfigOutcome,
}

/// Reconcile every config entry, one at a time, in manifest order.
pub(super) fn process_configs(
    project_root: &Path,
    configs: &[ConfigEntry],
    source: &dyn PluginSource,
    prompter: &mut dyn InstallPrompter,
    tx: &mut Transaction,
) -> Result<Vec<ConfigReport>> {
    let mut reports = Vec::with_capacity(configs.len());

    for entry in configs {
        super::check_interrupted()?;

        let outcome = process_entry(project_root, entry, source, prompter, tx)?;
        reports.push(ConfigReport {
            target_file: entry.target_file.clone(),
            outcome,
        });
    }

    Ok(reports)
}

fn process_entry(
    project_root: &Path,
    entry: &ConfigEntry,
    source: &dyn PluginSource,
    prompter: &mut dyn InstallPrompter,
    tx: &mut Transaction,
) -> Result<ConfigOutcome> {
    let target = project_root.join(sanitize::validate_relative_path(&entry.target_file)?);
    let fragment = source.file(&entry.config_source)?;

    if !target.is_file() {
        output::warning(&format!(
            "Target file {} does not exist. Skipping...",
            entry.target_file
        ));
        return Ok(ConfigOutcome::TargetMissing);
    }

    let existing = fs::read_to_string(&target).map_err(|e| BifrostError::io(&target, e))?;

    if reconcile::already_applied(&existing, &fragment, &target) {
        output::success(&format!(
            "Configuration already exists in {}. Skipping...",
            entry.target_file
        ));
        return Ok(ConfigOutcome::AlreadyPresent);
    }

    match prompter.config_action(entry, &fragment)? {
        ConfigAction::Skip => {
            output::info(&format!("Skipped {}", entry.target_file));
            Ok(ConfigOutcome::Skipped)
        }
        ConfigAction::Manual => {
            output::info(&format!(
                "Please manually add the configuration above to {}",
                entry.target_file
            ));
            Ok(ConfigOutcome::Manual)
        }
        ConfigAction::AutoApply => {
            let updated = reconcile::apply(&target, &existing, &fragment, entry.insert_type)?;

            if updated != existing {
                tx.record(UndoAction::RestoreFile {
                    path: target.clone(),
                    contents: existing.into_bytes(),
                });
                fs::write(&target, updated).map_err(|e| BifrostError::io(&target, e))?;
            }

            output::success(&format!("Applied configuration to {}", entry.target_file));
            Ok(ConfigOutcome::Applied)
        }
    }
}
