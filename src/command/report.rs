//! Terminal summary of an operation result.

use crate::engine::{Engine, OperationResult};
use crate::error::Result;
use crate::fs::{Change, OperationKind};
use colored::Colorize;
use std::collections::HashSet;

const LISTED_FILES: usize = 8;

/// Prints `result` and converts a failure into an error.
///
/// Warnings go to stderr either way. The failure message itself is left to
/// the caller, which prints it as `Error: ...`.
pub fn finish(engine: &Engine, result: OperationResult, dry_run: bool) -> Result<()> {
    for warning in &result.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    let result = result.into_result()?;

    if dry_run {
        println!("{}", "DRY RUN - No changes will be made".yellow().bold());
        println!("{}", result.message);
        return Ok(());
    }

    print_changes(engine, &result.changes);
    println!("{} {}", "✓".green().bold(), result.message);
    Ok(())
}

fn print_changes(engine: &Engine, changes: &[Change]) {
    if changes.is_empty() {
        println!("{}", "No changes needed".yellow());
        return;
    }

    // A file edited twice in one call is listed once.
    let mut seen = HashSet::new();
    let lines: Vec<String> = changes
        .iter()
        .filter(|c| seen.insert((&c.target_path, c.kind)))
        .map(|c| describe(engine, c))
        .collect();

    println!("{}", "Changes applied:".green().bold());
    for line in lines.iter().take(LISTED_FILES) {
        println!("   {} {}", "✓".green(), line);
    }
    if lines.len() > LISTED_FILES {
        println!("   {} {} more...", "✓".green(), lines.len() - LISTED_FILES);
    }
}

fn describe(engine: &Engine, change: &Change) -> String {
    let target = engine.display_path(&change.target_path);
    match (change.kind, change.destination.as_deref()) {
        (OperationKind::Move, Some(dest)) => {
            format!("{} → {}", target.yellow(), engine.display_path(dest).green())
        }
        _ => target.dimmed().to_string(),
    }
}
