//! File system primitives: backups, change records and transaction scopes.
//!
//! Every mutation the engine performs is preceded by a backup and described
//! by a [`Change`], which is what rollback consumes.

pub mod backup;
pub mod transaction;

pub use backup::BackupStore;
pub use transaction::{Change, OperationKind, Transaction};

use crate::error::{EditError, Result};
use std::fs;
use std::path::Path;

/// Moves a single file, falling back to copy + delete across filesystems.
pub(crate) fn move_file(from: &Path, to: &Path) -> Result<()> {
    if is_same_filesystem(from, to)? {
        fs::rename(from, to).map_err(|e| {
            EditError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to move {} → {}: {}", from.display(), to.display(), e),
            ))
        })?;
    } else {
        log::debug!(
            "Cross-filesystem move, copying {} → {}",
            from.display(),
            to.display()
        );
        fs::copy(from, to)?;
        fs::remove_file(from)?;
    }
    Ok(())
}

/// Checks if `path1` and the parent of `path2` are on the same filesystem.
///
/// Determines if atomic `rename()` is possible, or if copy + delete is
/// required.
fn is_same_filesystem(path1: &Path, path2: &Path) -> Result<bool> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        let meta1 = fs::metadata(path1)?;
        let parent = path2
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let meta2 = fs::metadata(parent)?;
        Ok(meta1.dev() == meta2.dev())
    }

    #[cfg(not(unix))]
    {
        let path1_str = path1.to_string_lossy();
        let path2_str = path2.to_string_lossy();

        if path1_str.len() >= 2 && path2_str.len() >= 2 {
            Ok(path1_str.chars().next() == path2_str.chars().next())
        } else {
            Ok(true)
        }
    }
}
