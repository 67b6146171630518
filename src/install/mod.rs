//! Plugin installation
//!
//! Runs one install attempt as a linear sequence of stages:
//!
//! ```text
//! FetchingManifest → ValidatingPlatform → InstallingFiles → ProcessingConfigs
//!     → InstallingDependencies → InstallingDevDependencies → Succeeded
//! ```
//!
//! Any error moves the attempt to `RollingBack`, every recorded change is
//! undone, and the error that stopped the install is returned (`Failed`).

mod configs;
mod files;
pub mod transaction;


pub use configs::{ConfigOutcome, ConfigReport};
pub use transaction::{RollbackFailure, Transaction, UndoAction};

use crate::core::types::PluginManifest;
use crate::error::{BifrostError, Result};
use crate::traits::{DependencyInstaller, InstallPrompter, PluginSource};
use crate::ui::{self as output, progress::Spinner};
use crate::utils::sanitize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStage {
    FetchingManifest,
    ValidatingPlatform,
    InstallingFiles,
    ProcessingConfigs,
    InstallingDependencies,
    InstallingDevDependencies,
    Succeeded,
    RollingBack,
    Failed,
}

impl InstallStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, InstallStage::Succeeded | InstallStage::Failed)
    }
}

impl fmt::Display for InstallStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FetchingManifest => "fetching plugin configuration",
            Self::ValidatingPlatform => "validating platform",
            Self::InstallingFiles => "installing plugin files",
            Self::ProcessingConfigs => "processing configuration files",
            Self::InstallingDependencies => "installing dependencies",
            Self::InstallingDevDependencies => "installing dev dependencies",
            Self::Succeeded => "done",
            Self::RollingBack => "rolling back",
            Self::Failed => "failed",
        };
        write!(f, "{}", label)
    }
}

/// What one successful install changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub plugin: String,
    pub files: Vec<PathBuf>,
    pub configs: Vec<ConfigReport>,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

/// Failure of one install attempt, after rollback ran
#[derive(Debug)]
pub struct InstallFailure {
    pub stage: InstallStage,
    pub error: BifrostError,
    pub rollback_failures: Vec<RollbackFailure>,
}

pub(crate) fn check_interrupted() -> Result<()> {
    if output::is_interrupted() {
        return Err(BifrostError::Interrupted);
    }
    Ok(())
}

/// Reject manifest content that could escape the project or inject flags,
/// before anything is written.
pub fn validate_manifest(manifest: &PluginManifest) -> Result<()> {
    for file in &manifest.files {
        sanitize::validate_source_name(&file.name)?;
        sanitize::validate_relative_path(&file.location)?;
    }

    for entry in &manifest.configs {
        sanitize::validate_source_name(&entry.config_source)?;
        sanitize::validate_relative_path(&entry.target_file)?;
    }

    sanitize::validate_package_names(&manifest.dependencies)?;
    sanitize::validate_package_names(&manifest.dev_dependencies)?;

    Ok(())
}

pub struct Installer<'a> {
    project_root: &'a Path,
    source: &'a dyn PluginSource,
    deps: &'a dyn DependencyInstaller,
    prompter: &'a mut dyn InstallPrompter,
    stage: InstallStage,
}

impl<'a> Installer<'a> {
    pub fn new(
        project_root: &'a Path,
        source: &'a dyn PluginSource,
        deps: &'a dyn DependencyInstaller,
        prompter: &'a mut dyn InstallPrompter,
    ) -> Self {
        Self {
            project_root,
            source,
            deps,
            prompter,
            stage: InstallStage::FetchingManifest,
        }
    }

    pub fn stage(&self) -> InstallStage {
        self.stage
    }

    /// Install the plugin into the project, or undo everything and return
    /// the error that stopped it.
    pub fn install(&mut self, project_platform: &str) -> Result<InstallReport> {
        self.install_detailed(project_platform).map_err(|failure| failure.error)
    }

    /// Like [`Installer::install`], but keeps the failing stage and the
    /// rollback steps that could not be completed.
    pub fn install_detailed(
        &mut self,
        project_platform: &str,
    ) -> std::result::Result<InstallReport, InstallFailure> {
        let mut tx = Transaction::new();

        match self.run_stages(project_platform, &mut tx) {
            Ok(report) => {
                self.enter(InstallStage::Succeeded);
                tx.commit();
                Ok(report)
            }
            Err(error) => {
                let failed_stage = self.stage;
                output::error(&format!("Plugin installation failed while {}", failed_stage));

                let mut rollback_failures = Vec::new();
                if !tx.is_empty() {
                    self.enter(InstallStage::RollingBack);
                    output::warning("Rolling back changes...");
                    rollback_failures = tx.rollback(self.deps);
                    for failure in &rollback_failures {
                        output::warning(&failure.to_string());
                    }
                    if rollback_failures.is_empty() {
                        output::info("Changes rolled back");
                    }
                }

                self.enter(InstallStage::Failed);
                Err(InstallFailure {
                    stage: failed_stage,
                    error,
                    rollback_failures,
                })
            }
        }
    }

    fn enter(&mut self, stage: InstallStage) {
        output::verbose(&format!("stage: {}", stage));
        self.stage = stage;
    }

    fn run_stages(&mut self, project_platform: &str, tx: &mut Transaction) -> Result<InstallReport> {
        self.enter(InstallStage::FetchingManifest);
        let spinner = Spinner::start("Fetching plugin configuration");
        let manifest = match self.source.manifest() {
            Ok(manifest) => {
                spinner.finish_with_success("Plugin configuration fetched");
                manifest
            }
            Err(e) => {
                spinner.finish_with_error("Could not fetch plugin configuration");
                return Err(e);
            }
        };

        self.enter(InstallStage::ValidatingPlatform);
        if manifest.platform != project_platform {
            return Err(BifrostError::PlatformMismatch {
                plugin: manifest.platform.clone(),
                project: project_platform.to_string(),
            });
        }
        validate_manifest(&manifest)?;

        let mut report = InstallReport {
            plugin: if manifest.name.is_empty() {
                self.source.describe()
            } else {
                manifest.name.clone()
            },
            ..Default::default()
        };

        self.enter(InstallStage::InstallingFiles);
        if !manifest.files.is_empty() {
            output::info("Installing plugin files...");
            report.files = files::install_files(
                self.project_root,
                &manifest.files,
                self.source,
                &mut *self.prompter,
                tx,
            )?;
            output::success("Plugin files installed");
        }

        self.enter(InstallStage::ProcessingConfigs);
        if !manifest.configs.is_empty() {
            output::info("Processing configuration files...");
            report.configs = configs::process_configs(
                self.project_root,
                &manifest.configs,
                self.source,
                &mut *self.prompter,
                tx,
            )?;
            output::success("Configuration files processed");
        }

        self.enter(InstallStage::InstallingDependencies);
        if !manifest.dependencies.is_empty() {
            check_interrupted()?;
            output::info(&format!("Installing dependencies with {}...", self.deps.name()));
            self.deps.add(&manifest.dependencies, false)?;
            tx.record(UndoAction::UninstallPackages(manifest.dependencies.clone()));
            output::success("Dependencies installed");
            report.dependencies = manifest.dependencies.clone();
        }

        self.enter(InstallStage::InstallingDevDependencies);
        if !manifest.dev_dependencies.is_empty() {
            check_interrupted()?;
            output::info(&format!("Installing dev dependencies with {}...", self.deps.name()));
            self.deps.add(&manifest.dev_dependencies, true)?;
            tx.record(UndoAction::UninstallPackages(manifest.dev_dependencies.clone()));
            output::success("Dev dependencies installed");
            report.dev_dependencies = manifest.dev_dependencies.clone();
        }

        check_interrupted()?;
        Ok(report)
    }
}
