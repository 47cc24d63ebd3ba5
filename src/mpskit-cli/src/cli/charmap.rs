//! Charmap command CLI definitions

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum CharmapCommand {
    /// Write the default charmap-mpskit.json (never overwrites an existing one)
    Create {
        /// Target directory, usually the game's main directory (defaults to the current directory)
        dir: Option<PathBuf>,
    },

    /// Show the active charmap and where it was loaded from
    Show {
        /// Print the table as charmap JSON
        #[arg(long)]
        json: bool,
    },
}
