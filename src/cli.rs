use crate::command::Command;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "txedit", version, about = "Transactional multi-file text editing")]
pub struct Cli {
    /// Project root that file patterns and relative paths resolve against
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Directory where backups are written (relative paths resolve against the root)
    #[arg(long, global = true, value_name = "DIR", env = "TXEDIT_BACKUP_DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Configuration file to use instead of `<root>/.txedit.toml`
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}
