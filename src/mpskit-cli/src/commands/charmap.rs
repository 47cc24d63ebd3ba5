//! Charmap command handlers

use anyhow::{Context, Result};
use mpskit::{CharmapOrigin, CreateOutcome, LoadedCharmap};
use std::path::Path;

/// Handle `charmap create`
///
/// Writes the default charmap into `dir` (or the current directory) and
/// prints the written path. An existing charmap is left untouched.
pub fn create(dir: Option<&Path>) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Could not determine current directory")?,
    };

    let outcome = mpskit::create_default(&dir)
        .with_context(|| format!("Failed to write charmap into {}", dir.display()))?;

    match outcome {
        CreateOutcome::Created(path) => println!("{}", path.display()),
        CreateOutcome::AlreadyExists(path) => {
            println!("charmap already exists at: {}", path.display())
        }
    }

    Ok(())
}

/// Handle `charmap show`
pub fn show(loaded: &LoadedCharmap, json: bool) -> Result<()> {
    if json {
        println!("{}", render_json(loaded)?);
        return Ok(());
    }

    print!("{}", render_table(loaded));
    Ok(())
}

fn render_json(loaded: &LoadedCharmap) -> Result<String> {
    serde_json::to_string_pretty(loaded.charmap.source()).context("Failed to serialize charmap")
}

fn render_table(loaded: &LoadedCharmap) -> String {
    let mut out = String::new();

    match &loaded.origin {
        CharmapOrigin::File(path) => out.push_str(&format!("charmap-path: {}\n", path.display())),
        CharmapOrigin::Builtin => out.push_str("charmap-path: (built-in default)\n"),
    }
    out.push_str(&format!("charmap-size: {}\n", loaded.charmap.len()));

    for (code, text) in loaded.charmap.entries() {
        out.push_str(&format!("{:03}  {:?}\n", code, text));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpskit::CHARMAP_FILENAME;
    use tempfile::TempDir;

    #[test]
    fn test_create_into_dir() {
        let tmp = TempDir::new().unwrap();
        create(Some(tmp.path())).unwrap();
        assert!(tmp.path().join(CHARMAP_FILENAME).exists());

        // Second run reports the existing file and succeeds.
        create(Some(tmp.path())).unwrap();
    }

    #[test]
    fn test_create_into_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(create(Some(&tmp.path().join("nope"))).is_err());
    }

    #[test]
    fn test_render_builtin_table() {
        let table = render_table(&LoadedCharmap::builtin());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "charmap-path: (built-in default)");
        assert_eq!(lines[1], "charmap-size: 14");
        assert_eq!(lines[2], "000  \"|\"");
        assert_eq!(lines[3], "010  \"\\n\"");
        assert_eq!(lines.len(), 2 + 14);
    }

    #[test]
    fn test_show_json_round_trips() {
        let loaded = LoadedCharmap::builtin();
        let json = render_json(&loaded).unwrap();
        let parsed = mpskit::Charmap::from_json(&json).unwrap();
        assert_eq!(parsed, loaded.charmap);
    }

    #[test]
    fn test_show_json_keeps_file_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CHARMAP_FILENAME);
        std::fs::write(&path, r#"{"066": "x", "065": "x", "010": "\n"}"#).unwrap();
        let loaded = mpskit::load_from_path(&path).unwrap();

        let json = render_json(&loaded).unwrap();
        let keys: Vec<&str> = json
            .lines()
            .filter_map(|line| line.trim().strip_prefix('"'))
            .map(|line| &line[..3])
            .collect();
        assert_eq!(keys, vec!["066", "065", "010"]);

        let parsed = mpskit::Charmap::from_json(&json).unwrap();
        assert_eq!(parsed.encode_char('x'), Some(65));
        assert_eq!(parsed, loaded.charmap);
    }
}
