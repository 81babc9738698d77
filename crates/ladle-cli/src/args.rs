use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the ladle recipe manager
///
/// Ladle is menu-driven rather than subcommand-driven: running the binary
/// drops straight into the interactive main menu. The only configuration is
/// where the database lives.
#[derive(Parser)]
#[command(version, about, name = "ladle")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/ladle/ladle.db
    #[arg(long)]
    pub database_file: Option<PathBuf>,
}
