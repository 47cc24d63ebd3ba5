//! Charmap tables mapping raw byte codes to display text.
//!
//! A charmap is read from a JSON object such as:
//!
//! ```json
//! {
//! "000": "|",
//! "065": "A"
//! }
//! ```
//!
//! Keys are byte codes written as exactly three decimal digits. Values are the
//! replacement text shown in place of that byte. Byte codes missing from the
//! table pass through the codec unchanged.

mod loader;
mod source;

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

pub use loader::{
    create_default, find_charmap_path, load, load_from_path, CharmapOrigin, CreateOutcome,
    LoadedCharmap, CHARMAP_FILENAME, MAX_SEARCH_DEPTH,
};
pub use source::CharmapSource;

/// Contents written by [`create_default`].
///
/// Custom charmaps should keep lower and upper case letters 32 codes apart,
/// digits at their ASCII positions, and codes 010, 013 and `@` unchanged.
pub const DEFAULT_CHARMAP_JSON: &str = r#"{
"000": "|",
"010": "\u000A",
"013": "\u000D",
"064": "@",
"048": "0",
"049": "1",
"050": "2",
"051": "3",
"052": "4",
"053": "5",
"054": "6",
"055": "7",
"056": "8",
"057": "9"
}
"#;

/// Built-in table used when no charmap file is found, in file order.
pub const BUILTIN_ENTRIES: [(u8, &str); 14] = [
    (0, "|"),
    (10, "\n"),
    (13, "\r"),
    (64, "@"),
    (48, "0"),
    (49, "1"),
    (50, "2"),
    (51, "3"),
    (52, "4"),
    (53, "5"),
    (54, "6"),
    (55, "7"),
    (56, "8"),
    (57, "9"),
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("while reading charmap file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read charmap file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid byte code key {0:?}: expected three decimal digits between 000 and 255")]
    InvalidKey(String),

    #[error("empty replacement text for byte code {0:?}")]
    EmptyValue(String),
}

/// Bidirectional byte code ↔ text table.
///
/// Built once and shared by reference with every codec call. The entries it
/// was built from are kept in load order, since that order decides which code
/// a shared replacement text encodes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charmap {
    source: CharmapSource,
    decode: HashMap<u8, String>,
    encode: HashMap<String, u8>,
}

impl Charmap {
    /// Table with no entries; every byte decodes to itself.
    pub fn identity() -> Self {
        Self::from_source(CharmapSource::default())
    }

    /// The built-in default table.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_ENTRIES)
    }

    /// Build a table from known-good (byte code, text) pairs.
    pub(crate) fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u8, S)>,
        S: Into<String>,
    {
        let mut source = CharmapSource::default();
        for (code, text) in pairs {
            source.insert(code, text.into());
        }
        Self::from_source(source)
    }

    /// Build a table from validated entries.
    ///
    /// Later entries overwrite earlier ones in the encode direction, so when
    /// two codes share the same text, encoding yields the last of them.
    pub fn from_source(source: CharmapSource) -> Self {
        let mut decode = HashMap::with_capacity(source.len());
        let mut encode = HashMap::with_capacity(source.len());
        for (code, text) in source.entries() {
            encode.insert(text.clone(), *code);
            decode.insert(*code, text.clone());
        }
        Self {
            source,
            decode,
            encode,
        }
    }

    /// Parse and validate charmap JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        CharmapSource::from_json(json).map(Self::from_source)
    }

    /// Number of byte codes with a replacement.
    pub fn len(&self) -> usize {
        self.decode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decode.is_empty()
    }

    /// Replacement text for a byte code, if mapped.
    #[inline]
    pub fn decode_byte(&self, code: u8) -> Option<&str> {
        self.decode.get(&code).map(String::as_str)
    }

    /// Byte code whose replacement is exactly `text`, if any.
    #[inline]
    pub fn encode_text(&self, text: &str) -> Option<u8> {
        self.encode.get(text).copied()
    }

    /// Byte code whose replacement is the single character `ch`, if any.
    #[inline]
    pub fn encode_char(&self, ch: char) -> Option<u8> {
        let mut buf = [0u8; 4];
        self.encode_text(ch.encode_utf8(&mut buf))
    }

    /// Entries sorted by byte code.
    pub fn entries(&self) -> Vec<(u8, &str)> {
        let mut entries: Vec<(u8, &str)> = self
            .decode
            .iter()
            .map(|(code, text)| (*code, text.as_str()))
            .collect();
        entries.sort_unstable_by_key(|(code, _)| *code);
        entries
    }

    /// Entries in load order. Serializing this gives a charmap file that
    /// loads back into an identical table.
    pub fn source(&self) -> &CharmapSource {
        &self.source
    }
}
