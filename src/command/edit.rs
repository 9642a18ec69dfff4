use super::report;
use crate::engine::Engine;
use crate::error::Result;
use crate::ops::EditRequest;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
pub struct EditArgs {
    /// File to edit, relative to the project root
    pub file: PathBuf,

    /// Exact text to replace
    pub old: String,

    /// Replacement text
    pub new: String,

    /// Replace every occurrence
    #[arg(long, conflicts_with = "occurrence")]
    pub all: bool,

    /// Replace only the N-th occurrence (1-based; default 1)
    #[arg(long, short = 'o', value_name = "N")]
    pub occurrence: Option<usize>,
}

impl EditArgs {
    pub fn request(&self) -> EditRequest {
        match (self.all, self.occurrence) {
            (true, _) => EditRequest::all(&self.old, &self.new),
            (false, Some(n)) => EditRequest::nth(&self.old, &self.new, n),
            (false, None) => EditRequest::new(&self.old, &self.new),
        }
    }
}

pub fn execute(engine: &Engine, args: EditArgs) -> Result<()> {
    let result = engine.apply_edits(&args.file, &[args.request()]);
    report::finish(engine, result, false)
}
