//! Moving a file and rewriting the quoted references to it.

use super::plural;
use crate::engine::{Engine, OperationResult};
use crate::error::{EditError, Result};
use crate::fs::{Change, OperationKind};
use crate::search::{Pattern, scan};
use crate::validation::validate_glob;

use std::fs;
use std::path::Path;

/// Matches a double-quoted path whose last segment is `basename`, such as
/// `"util.h"` or `"core/util.h"`. Group 1 holds the directory prefix.
fn reference_pattern(basename: &str) -> Result<Pattern> {
    Pattern::regex(&format!(r#""((?:[^"\n]*/)?){}""#, regex::escape(basename)))
}

/// Replacement for [`reference_pattern`] keeping the directory prefix.
fn reference_replacement(basename: &str) -> String {
    format!("\"${{1}}{}\"", basename.replace('$', "$$"))
}

fn file_name(path: &Path) -> Result<&str> {
    path.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        EditError::InvalidInput(
            path.display().to_string(),
            "path has no UTF-8 file name".to_string(),
        )
    })
}

impl Engine {
    /// Moves `from` to `to`, creating missing destination directories.
    ///
    /// With `update_references`, quoted references to the old file name in
    /// files matching the configured reference glob are rewritten to the new
    /// name. If that rewrite fails, the touched files are restored and the
    /// move is undone.
    pub fn move_file(
        &self,
        from: impl AsRef<Path>,
        to: impl AsRef<Path>,
        update_references: bool,
    ) -> OperationResult {
        self.try_move(from.as_ref(), to.as_ref(), update_references)
            .unwrap_or_else(|e| OperationResult::from_error(&e))
    }

    fn try_move(&self, from: &Path, to: &Path, update_references: bool) -> Result<OperationResult> {
        let from = self.resolve(from);
        let to = self.resolve(to);

        if !from.exists() {
            return Err(EditError::FileNotFound(from));
        }
        if !from.is_file() {
            return Err(EditError::InvalidInput(
                from.display().to_string(),
                "only regular files can be moved".to_string(),
            ));
        }
        if to.exists() {
            return Err(EditError::DestinationExists(to));
        }

        let old_name = file_name(&from)?;
        let new_name = file_name(&to)?;
        let references = if update_references && old_name != new_name {
            validate_glob(&self.config().reference_pattern)?;
            Some(reference_pattern(old_name)?)
        } else {
            None
        };

        let backup = self.backups().create_backup(&from)?;
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }
        crate::fs::move_file(&from, &to)?;
        let moved = Change::moved(&from, backup, &to);

        let mut message = format!(
            "Moved {} to {}",
            self.display_path(&from),
            self.display_path(&to)
        );
        log::info!("{}", message);

        let Some(pattern) = references else {
            return Ok(OperationResult::ok(message).with_changes(vec![moved]));
        };

        let report = scan(&self.scope(&self.config().reference_pattern), &pattern);
        let warnings: Vec<String> = report.skipped_warning().into_iter().collect();
        let replacement = reference_replacement(new_name);

        let rewritten = self.rewrite_hits(&report.hits, OperationKind::Replace, |content| {
            Ok(pattern.replace_all(content, &replacement).0)
        });

        match rewritten {
            Ok(updated) => {
                message.push_str(&format!(
                    "; updated {} in {}",
                    plural(report.total(), "reference"),
                    plural(report.file_count(), "file")
                ));
                let mut changes = vec![moved];
                changes.extend(updated);
                Ok(OperationResult::ok(message)
                    .with_changes(changes)
                    .with_warnings(warnings))
            }
            Err(failure) => {
                let mut result = failure.into_operation_result(self);
                if let Err(e) = moved.undo() {
                    log::warn!("Failed to undo move of {}: {}", from.display(), e);
                    result
                        .warnings
                        .push(format!("failed to undo move of {}: {}", from.display(), e));
                    result.changes.push(moved);
                }
                Ok(result.with_warnings(warnings))
            }
        }
    }
}
