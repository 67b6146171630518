//! Install transaction log
//!
//! Every filesystem or dependency change made during an install is recorded
//! as an undo action. On failure the log is replayed newest-first; every
//! action runs even if an earlier one failed.

use crate::error::{BifrostError, Result};
use crate::traits::DependencyInstaller;
use crate::ui as output;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoAction {
    /// A plugin file created by the install
    RemoveFile(PathBuf),
    /// A directory created to hold plugin files; removed only if still empty
    RemoveEmptyDir(PathBuf),
    /// A file that existed before and was overwritten or edited
    RestoreFile { path: PathBuf, contents: Vec<u8> },
    /// Packages added by one package-manager invocation
    UninstallPackages(Vec<String>),
}

impl UndoAction {
    /// Revert this change. Safe to call again after a success.
    pub fn undo(&self, deps: &dyn DependencyInstaller) -> Result<()> {
        match self {
            UndoAction::RemoveFile(path) => match fs::remove_file(path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(BifrostError::io(path, e)),
            },
            UndoAction::RemoveEmptyDir(path) => match fs::remove_dir(path) {
                Ok(()) => Ok(()),
                Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::DirectoryNotEmpty) => {
                    Ok(())
                }
                Err(e) => Err(BifrostError::io(path, e)),
            },
            UndoAction::RestoreFile { path, contents } => {
                fs::write(path, contents).map_err(|e| BifrostError::io(path, e))
            }
            UndoAction::UninstallPackages(packages) => deps.remove(packages),
        }
    }
}

impl fmt::Display for UndoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoAction::RemoveFile(path) => write!(f, "remove {}", path.display()),
            UndoAction::RemoveEmptyDir(path) => write!(f, "remove directory {}", path.display()),
            UndoAction::RestoreFile { path, .. } => write!(f, "restore {}", path.display()),
            UndoAction::UninstallPackages(packages) => {
                write!(f, "uninstall {}", packages.join(" "))
            }
        }
    }
}

/// An undo step that could not be completed
#[derive(Debug)]
pub struct RollbackFailure {
    pub action: UndoAction,
    pub reason: String,
}

impl fmt::Display for RollbackFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to {}: {}", self.action, self.reason)
    }
}

#[derive(Debug, Default)]
pub struct Transaction {
    actions: Vec<UndoAction>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, action: UndoAction) {
        output::verbose(&format!("recorded undo: {}", action));
        self.actions.push(action);
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions(&self) -> &[UndoAction] {
        &self.actions
    }

    /// Keep every change: the install succeeded
    pub fn commit(self) {
        output::verbose(&format!("committed {} change(s)", self.actions.len()));
    }

    /// Undo every recorded change, newest first. Failures are collected, not
    /// raised, so one stuck file never blocks the rest of the rollback.
    pub fn rollback(self, deps: &dyn DependencyInstaller) -> Vec<RollbackFailure> {
        let mut failures = Vec::new();

        for action in self.actions.into_iter().rev() {
            output::verbose(&format!("rollback: {}", action));
            if let Err(e) = action.undo(deps) {
                failures.push(RollbackFailure {
                    action,
                    reason: e.to_string(),
                });
            }
        }

        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingDeps {
        removed: RefCell<Vec<Vec<String>>>,
        fail_remove: bool,
    }

    impl DependencyInstaller for RecordingDeps {
        fn add(&self, _packages: &[String], _dev: bool) -> Result<()> {
            Ok(())
        }

        fn remove(&self, packages: &[String]) -> Result<()> {
            self.removed.borrow_mut().push(packages.to_vec());
            if self.fail_remove {
                return Err(BifrostError::PackageManagerError("remove failed".into()));
            }
            Ok(())
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    #[test]
    fn rollback_removes_created_files_and_dirs() {
        let dir = tempdir().expect("tempdir");
        let nested = dir.path().join("src/lib");
        fs::create_dir_all(&nested).expect("mkdir");
        let file = nested.join("auth.ts");
        fs::write(&file, "export {}").expect("write");

        let mut tx = Transaction::new();
        tx.record(UndoAction::RemoveEmptyDir(dir.path().join("src")));
        tx.record(UndoAction::RemoveEmptyDir(nested.clone()));
        tx.record(UndoAction::RemoveFile(file.clone()));

        let failures = tx.rollback(&RecordingDeps::default());
        assert!(failures.is_empty());
        assert!(!file.exists());
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn rollback_keeps_directories_that_gained_other_files() {
        let dir = tempdir().expect("tempdir");
        let sub = dir.path().join("components");
        fs::create_dir_all(&sub).expect("mkdir");
        fs::write(sub.join("user.tsx"), "user file").expect("write");

        let mut tx = Transaction::new();
        tx.record(UndoAction::RemoveEmptyDir(sub.clone()));

        assert!(tx.rollback(&RecordingDeps::default()).is_empty());
        assert!(sub.join("user.tsx").exists());
    }

    #[test]
    fn rollback_restores_previous_contents() {
        let dir = tempdir().expect("tempdir");
        let file = dir.path().join(".env");
        fs::write(&file, "FOO=1\n\nBAR=2").expect("write");

        let mut tx = Transaction::new();
        tx.record(UndoAction::RestoreFile {
            path: file.clone(),
            contents: b"FOO=1".to_vec(),
        });

        assert!(tx.rollback(&RecordingDeps::default()).is_empty());
        assert_eq!(fs::read_to_string(&file).expect("read"), "FOO=1");
    }

    #[test]
    fn rollback_runs_newest_first_and_uninstalls_packages() {
        let deps = RecordingDeps::default();
        let mut tx = Transaction::new();
        tx.record(UndoAction::UninstallPackages(vec!["zod".into()]));
        tx.record(UndoAction::UninstallPackages(vec!["vitest".into()]));

        assert!(tx.rollback(&deps).is_empty());
        assert_eq!(
            *deps.removed.borrow(),
            vec![vec!["vitest".to_string()], vec!["zod".to_string()]]
        );
    }

    #[test]
    fn rollback_continues_after_a_failure() {
        let dir = tempdir().expect("tempdir");
        let file = dir.path().join("a.ts");
        fs::write(&file, "a").expect("write");

        let deps = RecordingDeps {
            fail_remove: true,
            ..Default::default()
        };
        let mut tx = Transaction::new();
        tx.record(UndoAction::RemoveFile(file.clone()));
        tx.record(UndoAction::UninstallPackages(vec!["zod".into()]));

        let failures = tx.rollback(&deps);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].to_string().contains("uninstall zod"));
        assert!(!file.exists());
    }

    #[test]
    fn removing_a_missing_file_counts_as_done() {
        let dir = tempdir().expect("tempdir");
        let action = UndoAction::RemoveFile(dir.path().join("never-written.ts"));
        assert!(action.undo(&RecordingDeps::default()).is_ok());
        assert!(action.undo(&RecordingDeps::default()).is_ok());
    }
}
