//! The editing engine and the result shape every operation returns.
//!
//! Operations live in [`crate::ops`] as `impl Engine` blocks; transaction
//! scopes in [`crate::fs::transaction`].

use crate::config::Config;
use crate::error::{EditError, FailureKind, Result};
use crate::fs::{BackupStore, Change};
use crate::search::FileScope;

use std::path::{Path, PathBuf};

/// Outcome of a public engine operation.
///
/// Expected failures (missing pattern, missing file, I/O trouble on one file
/// of a batch) come back as `success == false` rather than as an `Err`.
#[derive(Debug, Default)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
    /// Applied changes in application order. On failure, only the changes
    /// that could not be rolled back.
    pub changes: Vec<Change>,
    pub warnings: Vec<String>,
    /// Cause of failure; `None` on success.
    pub kind: Option<FailureKind>,
}

impl OperationResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn from_error(err: &EditError) -> Self {
        Self::failure(err.kind(), err.to_string())
    }

    pub fn with_changes(mut self, changes: Vec<Change>) -> Self {
        self.changes = changes;
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    /// Turns a failed result into an error so it can be propagated with `?`.
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(EditError::Operation {
                kind: self.kind.unwrap_or(FailureKind::Io),
                message: self.message,
            })
        }
    }
}

/// Transactional text-editing engine bound to one project root.
///
/// Not safe to share across processes or threads working on overlapping
/// files: there is no locking of touched files or of the backup directory.
#[derive(Debug)]
pub struct Engine {
    root: PathBuf,
    config: Config,
    backups: BackupStore,
}

impl Engine {
    /// Engine with default configuration.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(root, Config::default())
    }

    /// Engine configured from `<root>/.txedit.toml` when present.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = absolute(root.as_ref())?;
        let config = Config::load(&root)?;
        Self::with_config(root, config)
    }

    pub fn with_config(root: impl AsRef<Path>, config: Config) -> Result<Self> {
        let root = absolute(root.as_ref())?;
        if !root.is_dir() {
            return Err(EditError::InvalidInput(
                root.display().to_string(),
                "project root is not a directory".to_string(),
            ));
        }

        let backup_dir = root.join(&config.backup_dir);
        log::debug!(
            "Engine at {} (backups in {})",
            root.display(),
            backup_dir.display()
        );

        Ok(Self {
            root,
            config,
            backups: BackupStore::new(backup_dir),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn backups(&self) -> &BackupStore {
        &self.backups
    }

    /// Resolves `path` against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Root-relative display form of `path`, with forward slashes.
    pub fn display_path(&self, path: &Path) -> String {
        let relative = pathdiff::diff_paths(path, &self.root).unwrap_or_else(|| path.to_path_buf());
        relative.to_string_lossy().replace('\\', "/")
    }

    /// Files matching `glob`, minus the configured exclusions and the backup
    /// directory.
    pub(crate) fn scope(&self, glob: &str) -> FileScope {
        FileScope::new(&self.root, glob)
            .exclude(self.config.exclude.iter().cloned())
            .skip_dir(self.backups.dir())
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backup_dir_resolves_against_root() {
        let temp = TempDir::new().unwrap();
        let engine = Engine::new(temp.path()).unwrap();
        assert_eq!(engine.backups().dir(), temp.path().join(".txedit_backups"));
    }

    #[test]
    fn test_absolute_backup_dir_is_kept() {
        let temp = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let config = Config {
            backup_dir: elsewhere.path().to_path_buf(),
            ..Config::default()
        };
        let engine = Engine::with_config(temp.path(), config).unwrap();
        assert_eq!(engine.backups().dir(), elsewhere.path());
    }

    #[test]
    fn test_root_must_be_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        std::fs::write(&file, "").unwrap();
        assert!(Engine::new(&file).is_err());
    }

    #[test]
    fn test_open_reads_config_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".txedit.toml"), "backup_dir = \"bk\"\n").unwrap();
        let engine = Engine::open(temp.path()).unwrap();
        assert_eq!(engine.backups().dir(), temp.path().join("bk"));
    }

    #[test]
    fn test_display_path_is_relative() {
        let temp = TempDir::new().unwrap();
        let engine = Engine::new(temp.path()).unwrap();
        assert_eq!(
            engine.display_path(&temp.path().join("src").join("a.rs")),
            "src/a.rs"
        );
    }

    #[test]
    fn test_into_result() {
        assert!(OperationResult::ok("done").into_result().is_ok());

        let err = OperationResult::failure(FailureKind::FileNotFound, "missing")
            .into_result()
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::FileNotFound);
        assert_eq!(err.to_string(), "missing");
    }
}
