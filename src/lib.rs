#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod fs;
pub mod ops;
pub mod search;
pub mod validation;

pub use config::Config;
pub use engine::{Engine, OperationResult};
pub use error::*;
pub use fs::{BackupStore, Change, OperationKind, Transaction};
pub use ops::*;
pub use search::{MatchMode, Pattern};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    command::execute(cli)
}
