//! Locating pattern occurrences across a file tree.

pub mod pattern;
pub mod scope;

pub use pattern::{MatchMode, Pattern};
pub use scope::FileScope;

use std::fs;
use std::path::PathBuf;

/// Occurrences of a pattern in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHits {
    pub path: PathBuf,
    pub count: usize,
}

/// Outcome of scanning a scope for a pattern.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Files with at least one match, in walk order.
    pub hits: Vec<FileHits>,
    /// Files that could not be read as UTF-8 text.
    pub skipped: Vec<PathBuf>,
}

impl ScanReport {
    pub fn total(&self) -> usize {
        self.hits.iter().map(|h| h.count).sum()
    }

    pub fn file_count(&self) -> usize {
        self.hits.len()
    }

    /// Warning naming how many files could not be scanned, if any.
    pub fn skipped_warning(&self) -> Option<String> {
        match self.skipped.len() {
            0 => None,
            1 => Some("Skipped 1 file that could not be read".to_string()),
            n => Some(format!("Skipped {} files that could not be read", n)),
        }
    }
}

/// Counts `pattern` in every file of `scope`.
///
/// Unreadable files are recorded in [`ScanReport::skipped`] rather than
/// failing the scan.
pub fn scan(scope: &FileScope, pattern: &Pattern) -> ScanReport {
    let mut report = ScanReport::default();

    for path in scope.files() {
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                log::debug!("Skipping file (read error): {} - {}", path.display(), e);
                report.skipped.push(path);
                continue;
            }
        };

        let count = pattern.count(&content);
        if count > 0 {
            log::debug!("{} match(es) in {}", count, path.display());
            report.hits.push(FileHits { path, count });
        }
    }

    report
}
