//! Command handlers for mpskit CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod charmap;
pub mod text;

use anyhow::{Context, Result};
use mpskit::LoadedCharmap;
use std::path::Path;

/// Load the charmap named on the command line, or search for one.
///
/// The search starts at `dir`, or the current directory when not given.
pub fn load_charmap(explicit: Option<&Path>, dir: Option<&Path>) -> Result<LoadedCharmap> {
    if let Some(path) = explicit {
        return mpskit::load_from_path(path)
            .with_context(|| format!("Failed to load charmap from {}", path.display()));
    }

    let start = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Could not determine current directory")?,
    };

    mpskit::load(&start).context("Failed to load charmap")
}
