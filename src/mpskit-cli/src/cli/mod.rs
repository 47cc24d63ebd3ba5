//! CLI argument definitions for mpskit
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod charmap;
mod core;
mod text;

pub use charmap::CharmapCommand;
pub use self::core::{Cli, Commands};
pub use text::TextCommand;
