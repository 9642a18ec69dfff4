//! Engine operations: edits, renames, search/replace and moves.
//!
//! Every mutating path funnels through [`Engine::rewrite_file`], which takes
//! the backup before anything is read or written.

mod edit;
mod relocate;
mod rename;
mod replace;

pub use edit::{EditRequest, FileEdits, Selector};
pub use rename::{PREVIEW_FILE_LIMIT, RenameRequest};

use crate::engine::{Engine, OperationResult};
use crate::error::{EditError, Result};
use crate::fs::backup::restore_copy;
use crate::fs::transaction::restore_in_order;
use crate::fs::{Change, OperationKind};
use crate::search::FileHits;

use std::fs;
use std::path::{Path, PathBuf};

/// First failure of a grouped operation, after its earlier changes were
/// rolled back.
pub(crate) struct GroupFailure {
    path: PathBuf,
    error: EditError,
    /// Changes whose rollback failed; their files are still modified.
    unrestored: Vec<Change>,
    rollback_errors: Vec<String>,
}

impl GroupFailure {
    /// The failure result carries the unrestored changes so that an
    /// enclosing transaction can still undo them.
    fn into_operation_result(self, engine: &Engine) -> OperationResult {
        log::warn!("Failed at {}: {}", self.path.display(), self.error);
        OperationResult::failure(
            self.error.kind(),
            format!("Failed at {}: {}", engine.display_path(&self.path), self.error),
        )
        .with_changes(self.unrestored)
        .with_warnings(self.rollback_errors)
    }
}

impl Engine {
    /// Backs up `path`, passes its content through `rewrite` and writes the
    /// result back.
    ///
    /// The write is skipped when the content is unchanged. The returned
    /// change always references the backup.
    pub(crate) fn rewrite_file<F>(&self, path: &Path, kind: OperationKind, rewrite: F) -> Result<Change>
    where
        F: FnOnce(&str) -> Result<String>,
    {
        let backup = self.backups().create_backup(path)?;

        let content = fs::read_to_string(path).map_err(|e| {
            EditError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;

        let updated = rewrite(&content)?;

        if updated == content {
            log::debug!("Content unchanged, skipping write: {}", path.display());
        } else {
            write_or_restore(path, &updated, &backup, |p, c| fs::write(p, c))?;
            log::info!("Updated: {}", path.display());
        }

        Ok(Change::new(path, backup, kind))
    }

    /// Rewrites every file in `hits`. On the first failure, files already
    /// rewritten in this call are restored and the failure is returned.
    pub(crate) fn rewrite_hits<F>(
        &self,
        hits: &[FileHits],
        kind: OperationKind,
        rewrite: F,
    ) -> std::result::Result<Vec<Change>, GroupFailure>
    where
        F: Fn(&str) -> Result<String>,
    {
        let mut changes = Vec::with_capacity(hits.len());

        for hit in hits {
            match self.rewrite_file(&hit.path, kind, &rewrite) {
                Ok(change) => changes.push(change),
                Err(error) => return Err(Self::fail_group(&changes, &hit.path, error)),
            }
        }

        Ok(changes)
    }

    fn fail_group(applied: &[Change], path: &Path, error: EditError) -> GroupFailure {
        if !applied.is_empty() {
            log::warn!("Rolling back {} changes...", applied.len());
        }

        let mut unrestored = Vec::new();
        let mut rollback_errors = Vec::new();
        for (change, message) in restore_in_order(applied) {
            unrestored.push(change);
            rollback_errors.push(message);
        }

        GroupFailure {
            path: path.to_path_buf(),
            error,
            unrestored,
            rollback_errors,
        }
    }
}

/// Writes `content` to `path` with `write`. If the write fails, `path` is put
/// back from `backup` before the error is returned, so a failed call never
/// leaves a partially written file.
fn write_or_restore<W>(path: &Path, content: &str, backup: &Path, write: W) -> Result<()>
where
    W: FnOnce(&Path, &str) -> std::io::Result<()>,
{
    let Err(e) = write(path, content) else {
        return Ok(());
    };

    if let Err(restore_err) = restore_copy(backup, path) {
        log::warn!(
            "Failed to restore {} after a failed write: {}",
            path.display(),
            restore_err
        );
    }

    Err(EditError::Io(std::io::Error::new(
        e.kind(),
        format!("Failed to write {}: {}", path.display(), e),
    )))
}

/// Shortens long search text for messages.
pub(crate) fn preview_text(text: &str) -> String {
    const LIMIT: usize = 50;
    if text.chars().count() > LIMIT {
        let head: String = text.chars().take(LIMIT).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// `"1 file"` / `"3 files"`.
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
