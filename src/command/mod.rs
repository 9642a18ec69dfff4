pub mod edit;
pub mod relocate;
pub mod rename;
pub mod replace;
mod report;

use crate::cli::Cli;
use crate::config::Config;
use crate::engine::Engine;
use crate::error::Result;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replace text in a single file
    Edit(edit::EditArgs),
    /// Rename an identifier across the project (previews unless --execute)
    Rename(rename::RenameArgs),
    /// Move a file and update quoted references to it
    Move(relocate::MoveArgs),
    /// Regex search-and-replace across the project (previews unless --execute)
    Replace(replace::ReplaceArgs),
}

pub fn execute(cli: Cli) -> Result<()> {
    let engine = open_engine(&cli)?;

    match cli.command {
        Command::Edit(args) => edit::execute(&engine, args),
        Command::Rename(args) => rename::execute(&engine, args),
        Command::Move(args) => relocate::execute(&engine, args),
        Command::Replace(args) => replace::execute(&engine, args),
    }
}

/// Builds the engine from the config file, then applies command-line
/// overrides.
pub fn open_engine(cli: &Cli) -> Result<Engine> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(&cli.root)?,
    };

    if let Some(dir) = &cli.backup_dir {
        log::debug!("Backup directory overridden: {}", dir.display());
        config.backup_dir = dir.clone();
    }

    Engine::with_config(&cli.root, config)
}
