use super::transaction::{Transaction, UndoAction};
use crate::core::types::PluginFile;
use crate::error::{BifrostError, Result};
use crate::traits::{InstallPrompter, PluginSource};
use crate::utils::sanitize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Fetch and write every plugin file in manifest order.
///
/// Returns the written paths. Each change is recorded in `tx` before the
/// write happens, so a half-written file is still undone.
pub(super) fn install_files(
    project_root: &Path,
    files: &[PluginFile],
    source: &dyn PluginSource,
    prompter: &mut dyn InstallPrompter,
    tx: &mut Transaction,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        super::check_interrupted()?;

        let destination = prompter.file_destination(file)?;
        let relative = sanitize::validate_relative_path(&destination)?;
        let content = source.file(&file.name)?;

        let target = project_root.join(relative);
        write_tracked(project_root, &target, content.as_bytes(), tx)?;
        written.push(target);
    }

    Ok(written)
}

fn write_tracked(project_root: &Path, target: &Path, content: &[u8], tx: &mut Transaction) -> Result<()> {
    if let Some(parent) = target.parent() {
        for dir in missing_dirs(project_root, parent) {
            fs::create_dir(&dir).map_err(|e| BifrostError::io(&dir, e))?;
            tx.record(UndoAction::RemoveEmptyDir(dir));
        }
    }

    match fs::read(target) {
        Ok(previous) => tx.record(UndoAction::RestoreFile {
            path: target.to_path_buf(),
            contents: previous,
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tx.record(UndoAction::RemoveFile(target.to_path_buf()))
        }
        Err(e) => return Err(BifrostError::io(target, e)),
    }

    fs::write(target, content).map_err(|e| BifrostError::io(target, e))
}

/// Directories between `project_root` and `dir` that do not exist yet,
/// outermost first.
fn missing_dirs(project_root: &Path, dir: &Path) -> Vec<PathBuf> {
    let mut missing: Vec<PathBuf> = dir
        .ancestors()
        .take_while(|p| p.starts_with(project_root) && *p != project_root)
        .filter(|p| !p.exists())
        .map(Path::to_path_buf)
        .collect();
    missing.reverse();
    missing
}
