//! Charmap file discovery and loading.
//!
//! The charmap normally lives in the game's main directory. Tools are run
//! from somewhere below it, so the search starts at the working directory
//! and walks up through its parents.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use tracing::{info, warn};

use super::{Charmap, ConfigError, DEFAULT_CHARMAP_JSON};

/// Sentinel filename searched for in the working directory and its parents.
pub const CHARMAP_FILENAME: &str = "charmap-mpskit.json";

/// Maximum number of directories visited by [`find_charmap_path`].
pub const MAX_SEARCH_DEPTH: usize = 64;

/// Where the active charmap came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharmapOrigin {
    File(PathBuf),
    Builtin,
}

/// A charmap together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedCharmap {
    pub charmap: Charmap,
    pub origin: CharmapOrigin,
}

impl LoadedCharmap {
    pub fn builtin() -> Self {
        Self {
            charmap: Charmap::builtin(),
            origin: CharmapOrigin::Builtin,
        }
    }

    /// Path of the charmap file, `None` for the built-in table.
    pub fn path(&self) -> Option<&Path> {
        match &self.origin {
            CharmapOrigin::File(path) => Some(path),
            CharmapOrigin::Builtin => None,
        }
    }
}

/// Result of [`create_default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

impl CreateOutcome {
    pub fn path(&self) -> &Path {
        match self {
            CreateOutcome::Created(path) | CreateOutcome::AlreadyExists(path) => path,
        }
    }
}

/// Make `path` absolute and resolve `.` and `..` lexically.
fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Find the charmap file, starting at `start` and searching upwards.
///
/// Returns `None` when the filesystem root is reached without a match, or
/// when [`MAX_SEARCH_DEPTH`] directories have been checked.
pub fn find_charmap_path(start: &Path) -> Option<PathBuf> {
    let mut current = normalize(start);

    for _ in 0..MAX_SEARCH_DEPTH {
        let candidate = current.join(CHARMAP_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent.to_path_buf(),
            _ => return None,
        }
    }

    warn!(
        curr_dir = %current.display(),
        "charmap file not found due to search depth limit"
    );
    None
}

/// Load the charmap for a process started in `start`.
///
/// Falls back to the built-in table when no charmap file is found. A file
/// that exists but cannot be read or parsed is an error.
pub fn load(start: &Path) -> Result<LoadedCharmap, ConfigError> {
    load_found(find_charmap_path(start))
}

fn load_found(path: Option<PathBuf>) -> Result<LoadedCharmap, ConfigError> {
    match path {
        Some(path) => load_from_path(&path),
        None => {
            info!("using default charmap");
            let loaded = LoadedCharmap::builtin();
            info!(size = loaded.charmap.len(), "charmap loaded");
            Ok(loaded)
        }
    }
}

/// Load a specific charmap file.
pub fn load_from_path(path: &Path) -> Result<LoadedCharmap, ConfigError> {
    info!(path = %path.display(), "reading charmap");

    let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let charmap = Charmap::from_json(&json)?;

    info!(size = charmap.len(), "charmap loaded");
    Ok(LoadedCharmap {
        charmap,
        origin: CharmapOrigin::File(path.to_path_buf()),
    })
}

/// Write the default charmap into `dir` unless one is already there.
///
/// An existing file is never overwritten.
pub fn create_default(dir: &Path) -> io::Result<CreateOutcome> {
    create_with(&dir.join(CHARMAP_FILENAME), |file| {
        file.write_all(DEFAULT_CHARMAP_JSON.as_bytes())
    })
}

/// Create `path` and fill it with `write`. A failed write removes the file
/// again so no partial charmap is left behind.
fn create_with<F>(path: &Path, write: F) -> io::Result<CreateOutcome>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(CreateOutcome::AlreadyExists(path.to_path_buf()));
        }
        Err(e) => return Err(e),
    };

    if let Err(e) = write(&mut file) {
        drop(file);
        if let Err(remove_err) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %remove_err, "failed to remove partial charmap");
        }
        return Err(e);
    }

    Ok(CreateOutcome::Created(path.to_path_buf()))
}
