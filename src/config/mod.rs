pub mod cli;

use clap::Parser;
use std::path::PathBuf;

pub use cli::Command;

#[derive(Debug, Parser)]
#[command(name = "wl")]
#[command(about = "A small command-line watchlist tracker")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Watchlist file to use (overrides $WL_PATH and the default)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The file all load/save calls go against, resolved once:
    /// `--file`, then `$WL_PATH`, then `<home>/wl`.
    pub fn watchlist_path(&self) -> PathBuf {
        cli::resolve_watchlist_path(self.file.as_deref())
    }
}
