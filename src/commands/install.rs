//! Install Command
//!
//! Resolves a plugin from the registry, checks it against the project's
//! platform and hands it to the installer.

mod presentation;
mod prompter;


pub use prompter::TerminalPrompter;

use crate::config::is_platform_compatible;
use crate::config::project::ProjectConfig;
use crate::config::registry::{Registry, RegistryPlugin};
use crate::config::settings::Settings;
use crate::error::{BifrostError, Result};
use crate::install::Installer;
use crate::packages::ShellPackageManager;
use crate::ui as output;
use crate::utils::remote::GithubSource;
use std::path::PathBuf;

/// Options for the install command
#[derive(Debug)]
pub struct InstallOptions {
    /// Plugin to install; `None` opens the selection menu
    pub plugin: Option<String>,
    /// Directory holding `config.bifrost`
    pub project_root: PathBuf,
    /// Accept defaults instead of prompting
    pub yes: bool,
}

/// Run the install command
pub fn run(options: InstallOptions) -> Result<()> {
    let project = ProjectConfig::load(&options.project_root).inspect_err(|e| {
        if matches!(e, BifrostError::ProjectConfigNotFound { .. }) {
            output::warning("Make sure you are in a bifrost project directory");
        }
    })?;
    output::verbose(&format!("Project platform: {}", project.platform));

    let registry = Registry::load()?;

    let plugin = match options.plugin.as_deref() {
        Some(name) => resolve_named(&registry, name, &project.platform)?.clone(),
        None => match select_plugin(&registry, &project.platform)? {
            Some(plugin) => plugin.clone(),
            None => return Ok(()),
        },
    };

    output::header(&format!("Installing {}...", plugin.name));

    let source = GithubSource::new(&plugin.github, Settings::from_env()?)?;
    let deps = ShellPackageManager::detect(&options.project_root);
    output::verbose(&format!("Package manager: {}", deps.kind()));

    let mut prompter = TerminalPrompter::new(options.yes);
    let report = Installer::new(&options.project_root, &source, &deps, &mut prompter)
        .install(&project.platform)?;

    presentation::show_install_summary(&options.project_root, &report);
    Ok(())
}

/// Look a plugin up by name and make sure it targets the project's platform
pub(crate) fn resolve_named<'r>(
    registry: &'r Registry,
    name: &str,
    project_platform: &str,
) -> Result<&'r RegistryPlugin> {
    let plugin = registry
        .find(name)
        .ok_or_else(|| BifrostError::PluginNotFound(name.to_string()))?;

    if !is_platform_compatible(project_platform, &plugin.platform) {
        return Err(BifrostError::PlatformMismatch {
            plugin: plugin.platform.clone(),
            project: project_platform.to_string(),
        });
    }

    Ok(plugin)
}

/// Let the user pick among compatible plugins. `None` means there was
/// nothing to pick; an empty answer cancels the command.
fn select_plugin<'r>(registry: &'r Registry, platform: &str) -> Result<Option<&'r RegistryPlugin>> {
    let compatible = registry.compatible(platform);

    if compatible.is_empty() {
        output::warning(&format!("No plugins available for platform: {}", platform));
        return Ok(None);
    }

    if !output::is_interactive() {
        return Err(BifrostError::Other(
            "No plugin name given and no terminal to choose one. Pass the plugin name as an argument".to_string(),
        ));
    }

    let choices = presentation::plugin_choices(&compatible);
    match output::prompt_select("Select a plugin to install:", &choices) {
        Some(index) => Ok(Some(compatible[index])),
        None => Err(BifrostError::Cancelled),
    }
}
