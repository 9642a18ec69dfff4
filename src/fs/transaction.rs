//! Change records and scoped transactions with rollback support.
//!
//! A [`Transaction`] groups engine operations so that they succeed or fail
//! as a unit.
//!
//! ## Guarantees
//!
//! - **Exclusivity**: a scope mutably borrows its [`Engine`], so only one can
//!   be open per engine
//! - **Ordering**: the change log follows application order
//! - **Rollback**: on abort or drop without commit, changes are undone in
//!   LIFO order
//! - **Best effort**: a change that cannot be undone is logged and skipped;
//!   later entries are still processed
//!
//! ## Example
//!
//! ```no_run
//! # use txedit::{Engine, EditRequest};
//! # fn example() -> txedit::Result<()> {
//! let mut engine = Engine::new(".")?;
//!
//! engine.transaction(|txn| {
//!     txn.apply_edits("src/lib.rs", &[EditRequest::all("old_fn", "new_fn")])
//!         .into_result()?;
//!     txn.move_file("src/util.h", "include/util.h", true).into_result()?;
//!     Ok(())
//! })?; // commits, or restores every touched file and returns the error
//! # Ok(())
//! # }
//! ```

use crate::engine::{Engine, OperationResult};
use crate::error::{EditError, Result};
use crate::fs::backup::{restore_copy, restore_move};
use crate::ops::{EditRequest, FileEdits, RenameRequest};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Kind of mutation a [`Change`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Targeted substring edit or rename rewrite.
    Edit,
    /// Regex search-and-replace rewrite.
    Replace,
    /// File relocation.
    Move,
}

/// One applied mutation, with the backup needed to undo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub target_path: PathBuf,
    pub backup_path: PathBuf,
    pub kind: OperationKind,
    /// Where a moved file ended up. Only set for [`OperationKind::Move`].
    pub destination: Option<PathBuf>,
}

impl Change {
    pub fn new(target: impl Into<PathBuf>, backup: impl Into<PathBuf>, kind: OperationKind) -> Self {
        Self {
            target_path: target.into(),
            backup_path: backup.into(),
            kind,
            destination: None,
        }
    }

    pub fn moved(
        from: impl Into<PathBuf>,
        backup: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
    ) -> Self {
        Self {
            target_path: from.into(),
            backup_path: backup.into(),
            kind: OperationKind::Move,
            destination: Some(to.into()),
        }
    }

    /// Restores the target to its pre-change content.
    ///
    /// Edit/Replace copy the backup over the target. Move puts the backup
    /// back at the original path and removes the relocated file.
    pub fn undo(&self) -> Result<()> {
        match self.kind {
            OperationKind::Edit | OperationKind::Replace => {
                restore_copy(&self.backup_path, &self.target_path)
            }
            OperationKind::Move => {
                restore_move(&self.backup_path, &self.target_path)?;
                if let Some(dest) = self.destination.as_deref() {
                    if dest.exists() {
                        fs::remove_file(dest).map_err(|e| {
                            EditError::Io(std::io::Error::new(
                                e.kind(),
                                format!("Failed to remove {}: {}", dest.display(), e),
                            ))
                        })?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Rolls back the changes of one grouped operation in append order.
///
/// A target recorded more than once is restored from its earliest backup
/// only, which holds the content from before the operation started.
/// Returns each change that could not be undone with the reason.
pub(crate) fn restore_in_order(changes: &[Change]) -> Vec<(Change, String)> {
    let mut restored: HashSet<&Path> = HashSet::new();
    let mut failures = Vec::new();

    for change in changes {
        if !restored.insert(change.target_path.as_path()) {
            continue;
        }
        match change.undo() {
            Ok(()) => log::debug!("Restored {}", change.target_path.display()),
            Err(e) => {
                log::warn!("Failed to restore {}: {}", change.target_path.display(), e);
                let message = format!("failed to restore {}: {}", change.target_path.display(), e);
                failures.push((change.clone(), message));
            }
        }
    }

    failures
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransactionState {
    /// Recording changes.
    Active,
    /// Changes kept; log discarded.
    Committed,
    /// Changes undone.
    RolledBack,
}

/// Scope grouping several engine operations into one atomic unit.
///
/// Obtained from [`Engine::begin_transaction`]. Operations invoked through
/// the scope append their changes to its log. Call [`commit`] to keep them;
/// [`abort`] or dropping the scope undoes them in reverse order.
///
/// [`commit`]: Transaction::commit
/// [`abort`]: Transaction::abort
#[must_use = "Transaction rolls back unless committed"]
pub struct Transaction<'e> {
    engine: &'e mut Engine,
    log: Vec<Change>,
    state: TransactionState,
}

impl<'e> Transaction<'e> {
    pub(crate) fn new(engine: &'e mut Engine) -> Self {
        log::debug!("Transaction started");
        Self {
            engine,
            log: Vec::new(),
            state: TransactionState::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == TransactionState::Active
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Changes recorded so far, oldest first.
    pub fn changes(&self) -> &[Change] {
        &self.log
    }

    pub fn engine(&self) -> &Engine {
        &*self.engine
    }

    pub fn apply_edits(&mut self, path: impl AsRef<Path>, edits: &[EditRequest]) -> OperationResult {
        let result = self.engine.apply_edits(path, edits);
        self.record(result)
    }

    pub fn apply_many(&mut self, operations: &[FileEdits]) -> OperationResult {
        let result = self.engine.apply_many(operations);
        self.record(result)
    }

    pub fn rename_symbol(&mut self, request: &RenameRequest) -> OperationResult {
        let result = self.engine.rename_symbol(request);
        self.record(result)
    }

    pub fn find_replace_all(
        &mut self,
        pattern: &str,
        replacement: &str,
        file_pattern: &str,
        dry_run: bool,
    ) -> OperationResult {
        let result = self
            .engine
            .find_replace_all(pattern, replacement, file_pattern, dry_run);
        self.record(result)
    }

    pub fn move_file(
        &mut self,
        from: impl AsRef<Path>,
        to: impl AsRef<Path>,
        update_references: bool,
    ) -> OperationResult {
        let result = self.engine.move_file(from, to, update_references);
        self.record(result)
    }

    /// Appends the changes of `result` to the log.
    ///
    /// A failed operation only reports changes its own rollback could not
    /// undo; those are kept too so that abort gets another chance at them.
    fn record(&mut self, result: OperationResult) -> OperationResult {
        if !result.changes.is_empty() {
            if !result.success {
                log::warn!(
                    "Keeping {} changes a failed operation could not roll back",
                    result.changes.len()
                );
            }
            self.log.extend(result.changes.iter().cloned());
            log::debug!("Transaction now has {} changes", self.log.len());
        }
        result
    }

    /// Keeps every recorded change. Backups stay on disk, untracked.
    pub fn commit(mut self) {
        log::info!("Committed {} changes", self.log.len());
        self.log.clear();
        self.state = TransactionState::Committed;
    }

    /// Undoes every recorded change, newest first.
    ///
    /// All entries are attempted even if some fail; the failures are
    /// reported together as `RollbackFailed`.
    pub fn abort(mut self) -> Result<()> {
        let errors = self.rollback();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(EditError::RollbackFailed(errors.join("; ")))
        }
    }

    fn rollback(&mut self) -> Vec<String> {
        log::warn!("Rolling back {} changes...", self.log.len());

        let mut errors = Vec::new();
        for change in self.log.drain(..).rev() {
            if let Err(e) = change.undo() {
                log::warn!("Failed to undo change to {}: {}", change.target_path.display(), e);
                errors.push(format!("{}: {}", change.target_path.display(), e));
            }
        }

        self.state = TransactionState::RolledBack;
        if errors.is_empty() {
            log::info!("Rollback completed");
        }
        errors
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if self.state == TransactionState::Active {
            if !self.log.is_empty() {
                log::warn!("Transaction dropped without commit");
            }
            self.rollback();
        }
    }
}

impl Engine {
    /// Opens a transaction scope over this engine.
    ///
    /// The scope holds the engine mutably, so a second scope cannot be opened
    /// until this one is committed, aborted or dropped.
    pub fn begin_transaction(&mut self) -> Transaction<'_> {
        Transaction::new(self)
    }

    /// Runs `f` inside a transaction scope.
    ///
    /// Commits when `f` returns `Ok`. On `Err`, rolls back every change made
    /// through the scope and returns the original error; rollback problems
    /// are only logged.
    pub fn transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Transaction<'_>) -> Result<T>,
    {
        let mut txn = self.begin_transaction();
        match f(&mut txn) {
            Ok(value) => {
                txn.commit();
                Ok(value)
            }
            Err(e) => {
                log::warn!("Transaction failed: {}", e);
                if let Err(rollback_err) = txn.abort() {
                    log::warn!("{}", rollback_err);
                }
                Err(e)
            }
        }
    }
}
