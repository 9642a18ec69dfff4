//! Targeted substring edits within one file, and batches of them across
//! files.

use super::{plural, preview_text};
use crate::engine::{Engine, OperationResult};
use crate::error::{EditError, Result};
use crate::fs::{Change, OperationKind};
use crate::validation::{validate_occurrence, validate_search_text};

use std::path::{Path, PathBuf};

/// Which occurrences of the search text an edit replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    All,
    /// 1-based index among non-overlapping matches, left to right.
    Occurrence(usize),
}

impl Default for Selector {
    fn default() -> Self {
        Selector::Occurrence(1)
    }
}

/// One substring replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub old: String,
    pub new: String,
    pub selector: Selector,
}

impl EditRequest {
    /// Replaces the first occurrence.
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
            selector: Selector::default(),
        }
    }

    pub fn all(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            selector: Selector::All,
            ..Self::new(old, new)
        }
    }

    pub fn nth(old: impl Into<String>, new: impl Into<String>, occurrence: usize) -> Self {
        Self {
            selector: Selector::Occurrence(occurrence),
            ..Self::new(old, new)
        }
    }

    fn validate(&self) -> Result<()> {
        validate_search_text(&self.old)?;
        if let Selector::Occurrence(n) = self.selector {
            validate_occurrence(n)?;
        }
        Ok(())
    }

    /// Applies this edit to `content`.
    ///
    /// `path` is only used for error messages.
    pub fn apply(&self, content: &str, path: &Path) -> Result<String> {
        if !content.contains(&self.old) {
            return Err(EditError::PatternNotFound {
                path: path.to_path_buf(),
                pattern: preview_text(&self.old),
            });
        }

        match self.selector {
            Selector::All => Ok(content.replace(&self.old, &self.new)),
            Selector::Occurrence(n) => {
                replace_nth(content, &self.old, &self.new, n).ok_or_else(|| {
                    EditError::PatternNotFound {
                        path: path.to_path_buf(),
                        pattern: format!(
                            "{} (occurrence {}, found {})",
                            preview_text(&self.old),
                            n,
                            content.matches(self.old.as_str()).count()
                        ),
                    }
                })
            }
        }
    }
}

/// A file and the edits to apply to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEdits {
    pub path: PathBuf,
    pub edits: Vec<EditRequest>,
}

impl FileEdits {
    pub fn new(path: impl Into<PathBuf>, edits: Vec<EditRequest>) -> Self {
        Self {
            path: path.into(),
            edits,
        }
    }

    /// Single first-occurrence replacement.
    pub fn single(path: impl Into<PathBuf>, old: impl Into<String>, new: impl Into<String>) -> Self {
        Self::new(path, vec![EditRequest::new(old, new)])
    }
}

/// Replaces the `n`-th (1-based) match of `old` in one forward scan.
fn replace_nth(content: &str, old: &str, new: &str, n: usize) -> Option<String> {
    let (start, _) = content.match_indices(old).nth(n.checked_sub(1)?)?;
    let end = start + old.len();

    let mut out = String::with_capacity(content.len() + new.len());
    out.push_str(&content[..start]);
    out.push_str(new);
    out.push_str(&content[end..]);
    Some(out)
}

impl Engine {
    /// Applies `edits` in order to one file, writing it once at the end.
    ///
    /// A backup is taken before any edit is tried, so a failed call still
    /// leaves a backup artifact behind. Fails with `PatternNotFound` if any
    /// edit's text (or requested occurrence) is missing from the content as
    /// modified by the edits before it; the file is then left untouched.
    pub fn apply_edits(&self, path: impl AsRef<Path>, edits: &[EditRequest]) -> OperationResult {
        let path = self.resolve(path.as_ref());
        match self.edit_file(&path, edits) {
            Ok(change) => OperationResult::ok(format!(
                "Successfully edited {}",
                self.display_path(&path)
            ))
            .with_changes(vec![change]),
            Err(e) => {
                log::debug!("Edit of {} failed: {}", path.display(), e);
                OperationResult::from_error(&e)
            }
        }
    }

    /// Applies independent per-file edits in request order.
    ///
    /// Stops at the first failing operation: the files edited before it are
    /// restored from their backups and the ones after it are never opened.
    pub fn apply_many(&self, operations: &[FileEdits]) -> OperationResult {
        let mut changes: Vec<Change> = Vec::with_capacity(operations.len());

        for op in operations {
            let path = self.resolve(&op.path);
            match self.edit_file(&path, &op.edits) {
                Ok(change) => changes.push(change),
                Err(error) => {
                    return Self::fail_group(&changes, &path, error).into_operation_result(self);
                }
            }
        }

        OperationResult::ok(format!(
            "Successfully edited {}",
            plural(operations.len(), "file")
        ))
        .with_changes(changes)
    }

    fn edit_file(&self, path: &Path, edits: &[EditRequest]) -> Result<Change> {
        for edit in edits {
            edit.validate()?;
        }

        self.rewrite_file(path, OperationKind::Edit, |content| {
            edits
                .iter()
                .try_fold(content.to_string(), |current, edit| edit.apply(&current, path))
        })
    }
}
