use crate::error::Result;
use crate::io;
use crate::paths;
use crate::spec_kit::detection::command_files;
use crate::spec_kit::types::{RestoreResult, RollbackResult};
use std::path::{Path, PathBuf};

/// Create a timestamped backup of the current command files.
///
/// Files that do not exist are skipped without error; an empty backup
/// directory is a valid result. The directory is returned even when zero
/// files were copied.
pub fn create_backup(project_root: &Path) -> Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let base = project_root.join(format!("{}{timestamp}", paths::BACKUP_PREFIX));

    // Same-second invocations would collide on the timestamp alone, so
    // suffix with a counter until the name is free. Zero-padded so
    // lexicographic order stays chronological past ten collisions.
    let mut backup_dir = base.clone();
    let mut attempt = 1u32;
    while backup_dir.exists() {
        backup_dir = PathBuf::from(format!("{}-{attempt:03}", base.display()));
        attempt += 1;
    }
    io::ensure_dir(&backup_dir)?;

    if let Some(files) = command_files(project_root) {
        for (_, source) in files.iter() {
            if source.exists() {
                // Preserve the original filename in the backup.
                let dest = backup_dir.join(source.file_name().unwrap_or_default());
                io::copy_file(&source, &dest)?;
            }
        }
    }

    Ok(backup_dir)
}

/// Find the most recent integration backup directory, or `None`.
///
/// Sorting by name is sorting by time: the timestamp is fixed-width and
/// embedded in the name.
pub fn find_latest_backup(project_root: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(project_root).ok()?;

    let mut backups: Vec<PathBuf> = entries
        .flatten()
        .filter(|e| {
            e.file_name()
                .to_string_lossy()
                .starts_with(paths::BACKUP_PREFIX)
                && e.path().is_dir()
        })
        .map(|e| e.path())
        .collect();

    backups.sort();
    backups.pop()
}

/// Restore every `*.md` file in `backup_dir` into the commands directory.
///
/// Restores by filename, not by role — whatever was backed up comes back,
/// old- or new-named. Per-file failures are collected and the restore
/// continues; success requires at least one restored file and zero errors.
pub fn restore_files(backup_dir: &Path, project_root: &Path) -> RestoreResult {
    let mut result = RestoreResult {
        success: false,
        files_restored: Vec::new(),
        errors: Vec::new(),
    };

    if !backup_dir.exists() {
        result
            .errors
            .push(format!("Backup directory not found: {}", backup_dir.display()));
        return result;
    }

    let commands_dir = paths::commands_dir(project_root);

    let entries = match std::fs::read_dir(backup_dir) {
        Ok(entries) => entries,
        Err(e) => {
            result
                .errors
                .push(format!("Failed to read {}: {e}", backup_dir.display()));
            return result;
        }
    };

    let mut backed_up: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect();
    backed_up.sort();

    for backup_file in backed_up {
        let name = backup_file
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        let dest = commands_dir.join(&name);
        match io::copy_file(&backup_file, &dest) {
            Ok(()) => result.files_restored.push(name),
            Err(e) => result.errors.push(format!("Failed to restore {name}: {e}")),
        }
    }

    result.success = !result.files_restored.is_empty() && result.errors.is_empty();
    result
}

/// Restore from the most recent backup. "No backup found" is reported as a
/// result error, not raised.
pub fn rollback_integration(project_root: &Path) -> RollbackResult {
    let mut result = RollbackResult {
        success: false,
        backup_dir: None,
        files_restored: Vec::new(),
        errors: Vec::new(),
    };

    let Some(backup_dir) = find_latest_backup(project_root) else {
        result
            .errors
            .push("No backup found. Nothing to rollback.".to_string());
        return result;
    };

    result.backup_dir = Some(backup_dir.clone());

    let restore = restore_files(&backup_dir, project_root);
    result.files_restored = restore.files_restored;
    result.errors.extend(restore.errors);
    result.success = restore.success;

    result
}
