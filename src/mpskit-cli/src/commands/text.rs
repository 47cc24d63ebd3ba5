//! Text command handlers
//!
//! Decode raw text regions out of resource files and encode replacement text.

use anyhow::{Context, Result};
use mpskit::{Charmap, EncodeOptions, ReadBinExt};
use std::fs::{self, File};
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Handle `text decode`
pub fn decode(
    input: &Path,
    offset: u64,
    length: Option<usize>,
    null_term: bool,
    charmap: &Charmap,
) -> Result<()> {
    let text = decode_region(input, offset, length, null_term, charmap)?;
    println!("{}", text);
    Ok(())
}

/// Read `length` bytes at `offset` (or everything after it) and decode them.
pub fn decode_region(
    input: &Path,
    offset: u64,
    length: Option<usize>,
    null_term: bool,
    charmap: &Charmap,
) -> Result<String> {
    let file =
        File::open(input).with_context(|| format!("Failed to open {}", input.display()))?;
    let mut reader = BufReader::new(file);
    reader
        .seek(SeekFrom::Start(offset))
        .with_context(|| format!("Failed to seek to {} in {}", offset, input.display()))?;

    let text = match length {
        Some(length) => reader.read_text(length, charmap, null_term).with_context(|| {
            format!(
                "Failed to decode {} bytes at offset {} of {}",
                length,
                offset,
                input.display()
            )
        })?,
        None => {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes)?;
            mpskit::decode(&bytes, charmap, null_term).with_context(|| {
                format!("Failed to decode {} from offset {}", input.display(), offset)
            })?
        }
    };

    Ok(text)
}

/// Handle `text encode`
///
/// Writes the encoded bytes to `output` and prints its path, or prints the
/// bytes as hex when no output file is given.
pub fn encode(
    text: &str,
    options: &EncodeOptions,
    output: Option<&Path>,
    charmap: &Charmap,
) -> Result<()> {
    let bytes = mpskit::encode(text, charmap, options).context("Failed to encode text")?;

    match output {
        Some(path) => {
            fs::write(path, &bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(bytes = bytes.len(), "encoded text written");
            println!("{}", path.display());
        }
        None => println!("{}", hex::encode(&bytes)),
    }

    Ok(())
}
