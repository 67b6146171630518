use super::PackageManagerKind;
use crate::error::{BifrostError, Result};
use crate::traits::DependencyInstaller;
use crate::ui as output;
use crate::utils::sanitize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Runs the detected package manager in the project root with inherited stdio
pub struct ShellPackageManager {
    kind: PackageManagerKind,
    project_root: PathBuf,
}

impl ShellPackageManager {
    pub fn new(kind: PackageManagerKind, project_root: &Path) -> Self {
        Self {
            kind,
            project_root: project_root.to_path_buf(),
        }
    }

    pub fn detect(project_root: &Path) -> Self {
        Self::new(PackageManagerKind::detect(project_root), project_root)
    }

    pub fn kind(&self) -> PackageManagerKind {
        self.kind
    }

    fn run(&self, args: &[&str], packages: &[String]) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        sanitize::validate_package_names(packages)?;

        let binary = self.kind.binary();
        let display = render_command(binary, args, packages);

        let program = which::which(binary).map_err(|e| BifrostError::SystemCommandFailed {
            command: display.clone(),
            reason: format!("'{}' not found in PATH: {}", binary, e),
        })?;

        output::verbose(&format!("Running: {}", display));

        let status = Command::new(program)
            .args(args)
            .args(packages)
            .current_dir(&self.project_root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| BifrostError::SystemCommandFailed {
                command: display.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(BifrostError::PackageManagerError(format!(
                "'{}' exited with {}",
                display, status
            )));
        }

        Ok(())
    }
}

impl DependencyInstaller for ShellPackageManager {
    fn add(&self, packages: &[String], dev: bool) -> Result<()> {
        self.run(&self.kind.add_args(dev), packages)
    }

    fn remove(&self, packages: &[String]) -> Result<()> {
        self.run(&self.kind.remove_args(), packages)
    }

    fn name(&self) -> &str {
        self.kind.binary()
    }
}

/// Shell-quoted command line for logs and error messages
pub(crate) fn render_command(binary: &str, args: &[&str], packages: &[String]) -> String {
    let words = std::iter::once(binary)
        .chain(args.iter().copied())
        .chain(packages.iter().map(String::as_str));
    shlex::try_join(words).unwrap_or_else(|_| {
        let mut parts = vec![binary.to_string()];
        parts.extend(args.iter().map(|a| a.to_string()));
        parts.extend(packages.iter().cloned());
        parts.join(" ")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn render_command_quotes_specs() {
        let line = render_command("npm", &["install", "-D"], &["zod@>=3".to_string()]);
        assert!(line.starts_with("npm install -D "));
        assert!(line.contains("zod@>=3"));
        assert_ne!(line, "npm install -D zod@>=3");
    }

    #[test]
    fn empty_package_list_is_a_no_op() {
        let dir = tempdir().expect("tempdir");
        let pm = ShellPackageManager::new(PackageManagerKind::Npm, dir.path());
        assert!(pm.add(&[], false).is_ok());
        assert!(pm.remove(&[]).is_ok());
    }

    #[test]
    fn unsafe_names_are_rejected_before_spawning() {
        let dir = tempdir().expect("tempdir");
        let pm = ShellPackageManager::new(PackageManagerKind::Pnpm, dir.path());
        let err = pm
            .add(&["left-pad; rm -rf ~".to_string()], false)
            .expect_err("unsafe name");
        assert!(matches!(err, BifrostError::UnsafeInput(_)));
    }

    #[test]
    fn detect_uses_project_root() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(dir.path().join("yarn.lock"), "").expect("write");
        let pm = ShellPackageManager::detect(dir.path());
        assert_eq!(pm.kind(), PackageManagerKind::Yarn);
        assert_eq!(pm.name(), "yarn");
    }
}
