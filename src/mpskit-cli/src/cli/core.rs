//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::charmap::CharmapCommand;
use super::text::TextCommand;

#[derive(Parser)]
#[command(name = "mpskit")]
#[command(about = "Text tools for legacy game resource files", long_about = None)]
pub struct Cli {
    /// Charmap file to use instead of searching for charmap-mpskit.json
    #[arg(long, global = true, env = "MPSKIT_CHARMAP")]
    pub charmap: Option<PathBuf>,

    /// Directory to start the charmap search from (defaults to the current directory)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Charmap operations (create, show)
    #[command(visible_alias = "c")]
    Charmap {
        #[command(subcommand)]
        command: CharmapCommand,
    },

    /// Convert between raw game bytes and text (decode, encode)
    #[command(visible_alias = "t")]
    Text {
        #[command(subcommand)]
        command: TextCommand,
    },
}
