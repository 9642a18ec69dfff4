//! Point-in-time copies of individual files.
//!
//! Backups are named `<basename>.<8 hex>.bak` and live flat in one directory,
//! so files sharing a basename never overwrite each other's copies.

use crate::error::{EditError, Result};

use std::fs;
use std::path::{Path, PathBuf};

/// Attempts to find an unused backup name before giving up.
const NAME_ATTEMPTS: usize = 8;

/// Creates and restores file backups under a single directory.
#[derive(Debug, Clone)]
pub struct BackupStore {
    dir: PathBuf,
}

impl BackupStore {
    /// Creates a store rooted at `dir`. The directory is created lazily.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Copies `path` into the backup directory and returns the copy's path.
    ///
    /// Fails with `FileNotFound` if `path` is missing or not a regular file.
    pub fn create_backup(&self, path: &Path) -> Result<PathBuf> {
        if !path.is_file() {
            return Err(EditError::FileNotFound(path.to_path_buf()));
        }

        let base = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                EditError::InvalidInput(path.display().to_string(), "has no file name".into())
            })?;

        fs::create_dir_all(&self.dir).map_err(|e| {
            EditError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create backup directory {}: {}", self.dir.display(), e),
            ))
        })?;

        let backup = self.unused_name(&base)?;
        fs::copy(path, &backup).map_err(|e| {
            EditError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to back up {}: {}", path.display(), e),
            ))
        })?;

        log::debug!("Backed up {} → {}", path.display(), backup.display());
        Ok(backup)
    }

    /// Overwrites `target` with the bytes of `backup`.
    pub fn restore(&self, backup: &Path, target: &Path) -> Result<()> {
        restore_copy(backup, target)
    }

    /// Moves `backup` back to `target`, consuming the backup file.
    pub fn restore_by_move(&self, backup: &Path, target: &Path) -> Result<()> {
        restore_move(backup, target)
    }

    fn unused_name(&self, base: &str) -> Result<PathBuf> {
        for _ in 0..NAME_ATTEMPTS {
            let candidate = self.dir.join(format!("{}.{}.bak", base, random_suffix()));
            if !candidate.exists() {
                return Ok(candidate);
            }
            log::debug!("Backup name collision: {}", candidate.display());
        }

        Err(EditError::Other(anyhow::anyhow!(
            "Could not find an unused backup name for '{}' in {}",
            base,
            self.dir.display()
        )))
    }
}

/// Eight lowercase hex characters.
fn random_suffix() -> String {
    let mut hex = uuid::Uuid::new_v4().simple().to_string();
    hex.truncate(8);
    hex
}

pub(crate) fn restore_copy(backup: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::copy(backup, target).map_err(|e| {
        EditError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to restore {}: {}", target.display(), e),
        ))
    })?;
    Ok(())
}

pub(crate) fn restore_move(backup: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    super::move_file(backup, target)
}
