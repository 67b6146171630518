use crate::config::registry::RegistryPlugin;
use crate::install::{ConfigOutcome, InstallReport};
use crate::ui as output;
use colored::Colorize;
use std::path::Path;

pub(super) fn plugin_choices(plugins: &[&RegistryPlugin]) -> Vec<String> {
    plugins
        .iter()
        .map(|p| {
            if p.description.is_empty() {
                p.name.clone()
            } else {
                format!("{} - {}", p.name, p.description)
            }
        })
        .collect()
}

pub(super) fn show_install_summary(project_root: &Path, report: &InstallReport) {
    output::success(&format!("{} installed successfully!", report.plugin));

    if output::is_quiet() {
        return;
    }

    if !report.files.is_empty() {
        output::keyval("Files", &report.files.len().to_string());
        for file in &report.files {
            let shown = file.strip_prefix(project_root).unwrap_or(file);
            output::indent(&format!("{} {}", "+".green(), shown.display()), 1);
        }
    }

    if !report.configs.is_empty() {
        output::keyval("Configs", &report.configs.len().to_string());
        for config in &report.configs {
            let marker = match config.outcome {
                ConfigOutcome::Applied => "~".yellow(),
                ConfigOutcome::AlreadyPresent => "=".green(),
                ConfigOutcome::Manual => "!".cyan(),
                ConfigOutcome::TargetMissing | ConfigOutcome::Skipped => "-".dimmed(),
            };
            output::indent(
                &format!("{} {} ({})", marker, config.target_file, config.outcome),
                1,
            );
        }
    }

    if !report.dependencies.is_empty() {
        output::keyval("Dependencies", &report.dependencies.join(", "));
    }

    if !report.dev_dependencies.is_empty() {
        output::keyval("Dev dependencies", &report.dev_dependencies.join(", "));
    }
}
