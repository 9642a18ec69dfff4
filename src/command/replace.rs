use super::report;
use crate::engine::Engine;
use crate::error::Result;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
pub struct ReplaceArgs {
    /// Regular expression to search for
    pub regex: String,

    /// Replacement text; `$1` or `${name}` insert capture groups
    pub replacement: String,

    /// Glob selecting the files to search, relative to the project root
    #[arg(long, short = 'p', value_name = "GLOB", default_value = "**/*")]
    pub pattern: String,

    /// Apply the replacement instead of counting matches
    #[arg(long, short = 'x')]
    pub execute: bool,
}

pub fn execute(engine: &Engine, args: ReplaceArgs) -> Result<()> {
    let dry_run = !args.execute;
    let result = engine.find_replace_all(&args.regex, &args.replacement, &args.pattern, dry_run);
    report::finish(engine, result, dry_run)
}
