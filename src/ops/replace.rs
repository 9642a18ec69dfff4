//! Regex search-and-replace across a file glob.

use super::{plural, preview_text};
use crate::engine::{Engine, OperationResult};
use crate::error::Result;
use crate::fs::OperationKind;
use crate::search::{Pattern, scan};
use crate::validation::validate_glob;

impl Engine {
    /// Replaces every match of the regular expression `pattern` in the files
    /// selected by `file_pattern`.
    ///
    /// `replacement` may reference capture groups (`$1`, `${name}`). With
    /// `dry_run` set, only counts are reported.
    pub fn find_replace_all(
        &self,
        pattern: &str,
        replacement: &str,
        file_pattern: &str,
        dry_run: bool,
    ) -> OperationResult {
        self.try_replace(pattern, replacement, file_pattern, dry_run)
            .unwrap_or_else(|e| OperationResult::from_error(&e))
    }

    fn try_replace(
        &self,
        pattern: &str,
        replacement: &str,
        file_pattern: &str,
        dry_run: bool,
    ) -> Result<OperationResult> {
        validate_glob(file_pattern)?;
        let pattern = Pattern::regex(pattern)?;

        let report = scan(&self.scope(file_pattern), &pattern);
        let warnings: Vec<String> = report.skipped_warning().into_iter().collect();
        let summary = format!(
            "{} in {}",
            plural(report.total(), "occurrence"),
            plural(report.file_count(), "file")
        );

        if dry_run {
            log::debug!(
                "Dry run of /{}/ matched {}",
                preview_text(pattern.as_str()),
                summary
            );
            return Ok(OperationResult::ok(format!("Would replace {}", summary)).with_warnings(warnings));
        }

        let rewritten = self.rewrite_hits(&report.hits, OperationKind::Replace, |content| {
            Ok(pattern.replace_all(content, replacement).0)
        });

        Ok(match rewritten {
            Ok(changes) => OperationResult::ok(format!("Replaced {}", summary))
                .with_changes(changes)
                .with_warnings(warnings),
            Err(failure) => failure.into_operation_result(self).with_warnings(warnings),
        })
    }
}
