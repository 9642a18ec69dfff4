use super::report;
use crate::engine::Engine;
use crate::error::Result;
use crate::ops::RenameRequest;
use crate::search::MatchMode;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Skip matches that are part of a longer identifier
    #[default]
    Boundary,
    /// Replace every substring occurrence
    Literal,
}

impl From<Mode> for MatchMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Boundary => MatchMode::IdentifierBoundary,
            Mode::Literal => MatchMode::Literal,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[clap(verbatim_doc_comment)]
pub struct RenameArgs {
    /// Current name
    pub old_name: String,

    /// New name
    pub new_name: String,

    /// Glob selecting the files to search, relative to the project root
    #[arg(long, short = 'p', value_name = "GLOB", default_value = "**/*")]
    pub pattern: String,

    /// How occurrences are matched
    ///
    ///   boundary  `Foo` matches in `Foo()` but not in `FooBar`
    ///   literal   every substring occurrence
    #[arg(long, value_enum, default_value_t = Mode::Boundary, verbatim_doc_comment)]
    pub mode: Mode,

    /// Apply the rename instead of previewing it
    #[arg(long, short = 'x')]
    pub execute: bool,
}

impl RenameArgs {
    pub fn request(&self) -> RenameRequest {
        RenameRequest::new(&self.old_name, &self.new_name)
            .file_pattern(&self.pattern)
            .mode(self.mode.into())
            .preview(!self.execute)
    }
}

pub fn execute(engine: &Engine, args: RenameArgs) -> Result<()> {
    let request = args.request();
    log::debug!("Rename request: {:?}", request);

    let result = engine.rename_symbol(&request);
    report::finish(engine, result, request.preview)
}
