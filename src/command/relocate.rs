use super::report;
use crate::engine::Engine;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
pub struct MoveArgs {
    /// File to move, relative to the project root
    pub from: PathBuf,

    /// Destination path; missing directories are created
    pub to: PathBuf,

    /// Do not rewrite quoted references to the old file name
    #[arg(long)]
    pub no_update: bool,
}

pub fn execute(engine: &Engine, args: MoveArgs) -> Result<()> {
    let result = engine.move_file(&args.from, &args.to, !args.no_update);
    report::finish(engine, result, false)
}
