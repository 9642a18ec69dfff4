//! Project-wide rename with a non-mutating preview.
//!
//! Preview and execution share one [`Pattern`], so the counts a preview
//! reports are exactly the occurrences execution rewrites. The default
//! [`MatchMode::IdentifierBoundary`] leaves longer identifiers alone
//! (`Foo` does not touch `FooBar`); [`MatchMode::Literal`] rewrites every
//! substring occurrence.

use super::plural;
use crate::engine::{Engine, OperationResult};
use crate::error::Result;
use crate::fs::OperationKind;
use crate::search::{MatchMode, Pattern, ScanReport, scan};
use crate::validation::validate_glob;

/// Maximum number of files listed individually in a preview.
pub const PREVIEW_FILE_LIMIT: usize = 10;

/// Parameters of a rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRequest {
    pub old_name: String,
    pub new_name: String,
    /// Glob selecting candidate files, relative to the project root.
    pub file_pattern: String,
    pub mode: MatchMode,
    /// Report what would change without touching any file.
    pub preview: bool,
}

impl RenameRequest {
    /// Preview of a boundary-aware rename over every file.
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
            file_pattern: "**/*".to_string(),
            mode: MatchMode::default(),
            preview: true,
        }
    }

    pub fn file_pattern(mut self, glob: impl Into<String>) -> Self {
        self.file_pattern = glob.into();
        self
    }

    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }
}

impl Engine {
    /// Renames `old_name` to `new_name` across the files selected by the
    /// request's glob.
    ///
    /// In execute mode, the first file that cannot be rewritten causes every
    /// file rewritten so far in this call to be restored.
    pub fn rename_symbol(&self, request: &RenameRequest) -> OperationResult {
        self.try_rename(request)
            .unwrap_or_else(|e| OperationResult::from_error(&e))
    }

    fn try_rename(&self, request: &RenameRequest) -> Result<OperationResult> {
        validate_glob(&request.file_pattern)?;
        let pattern = Pattern::new(&request.old_name, request.mode)?;

        log::debug!(
            "Scanning '{}' for '{}' ({:?})",
            request.file_pattern,
            request.old_name,
            request.mode
        );
        let report = scan(&self.scope(&request.file_pattern), &pattern);
        let warnings: Vec<String> = report.skipped_warning().into_iter().collect();

        if request.preview {
            return Ok(OperationResult::ok(self.rename_preview(request, &report)).with_warnings(warnings));
        }

        let rewritten = self.rewrite_hits(&report.hits, OperationKind::Edit, |content| {
            Ok(pattern.replace_all(content, &request.new_name).0)
        });

        Ok(match rewritten {
            Ok(changes) => OperationResult::ok(format!(
                "Renamed {} in {}",
                plural(report.total(), "occurrence"),
                plural(report.file_count(), "file")
            ))
            .with_changes(changes)
            .with_warnings(warnings),
            Err(failure) => failure.into_operation_result(self).with_warnings(warnings),
        })
    }

    fn rename_preview(&self, request: &RenameRequest, report: &ScanReport) -> String {
        let mut lines = vec![
            format!(
                "Would rename '{}' to '{}':",
                request.old_name, request.new_name
            ),
            format!(
                "  {} in {}:",
                plural(report.total(), "occurrence"),
                plural(report.file_count(), "file")
            ),
        ];

        for hit in report.hits.iter().take(PREVIEW_FILE_LIMIT) {
            lines.push(format!(
                "    {}: {}",
                self.display_path(&hit.path),
                plural(hit.count, "occurrence")
            ));
        }

        if report.file_count() > PREVIEW_FILE_LIMIT {
            let omitted = report.file_count() - PREVIEW_FILE_LIMIT;
            lines.push(format!(
                "    ... and {} more {}",
                omitted,
                if omitted == 1 { "file" } else { "files" }
            ));
        }

        lines.join("\n")
    }
}
