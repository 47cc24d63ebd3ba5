//! # mpskit
//!
//! Text codec for legacy game resource files.
//!
//! Resource files store text as single-byte codes whose glyph assignment does
//! not match ASCII. A charmap translates each byte code to display text and
//! back. This crate provides:
//! - Charmap construction from `charmap-mpskit.json`, discovered by walking up
//!   from a working directory, with a built-in default
//! - Decoding raw bytes to text and encoding text to raw bytes, leaving
//!   anything inside `[...]` untouched
//! - Little-endian binary primitives used by the resource readers and writers
//!
//! ## Example
//!
//! ```no_run
//! use mpskit::{codec, Charmap, EncodeOptions};
//!
//! # fn main() -> anyhow::Result<()> {
//! let loaded = mpskit::charmap::load(&std::env::current_dir()?)?;
//! let charmap: &Charmap = &loaded.charmap;
//!
//! let text = codec::decode(b"HELLO\0junk", charmap, true)?;
//! let bytes = codec::encode(&text, charmap, &EncodeOptions::new().max_len(16).fill())?;
//! assert_eq!(bytes.len(), 16);
//! # Ok(())
//! # }
//! ```

pub mod binary;
pub mod charmap;
pub mod codec;

use thiserror::Error;

// Re-export commonly used items
#[doc(inline)]
pub use binary::{asciiz, ReadBinExt, WriteBinExt};
#[doc(inline)]
pub use charmap::{
    create_default, find_charmap_path, load, load_from_path, Charmap, CharmapOrigin,
    CharmapSource, ConfigError, CreateOutcome, LoadedCharmap, CHARMAP_FILENAME,
};
#[doc(inline)]
pub use codec::{decode, encode, EncodeOptions};

#[derive(Debug, Error)]
pub enum Error {
    #[error("charmap error: {0}")]
    Config(#[from] ConfigError),

    #[error("byte {byte:#04x} at offset {offset} is outside the 7-bit text range")]
    ByteOutOfRange { byte: u8, offset: usize },

    #[error("character {ch:?} at offset {offset} cannot be encoded as a 7-bit byte")]
    CharOutOfRange { ch: char, offset: usize },

    #[error("this string must be shorter than {max_len} chars: {text:?}")]
    TooLong { max_len: usize, text: String },

    #[error("string too long for field (must be <= {width}): {len} bytes")]
    FieldOverflow { width: usize, len: usize },

    #[error("raw block length mismatch: expected {expected} bytes, got {actual}")]
    RawLength { expected: usize, actual: usize },

    #[error("invalid magic: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: Vec<u8>, actual: Vec<u8> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_limit() {
        let err = Error::TooLong {
            max_len: 3,
            text: "HELLO".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains("HELLO"));

        let err = Error::FieldOverflow { width: 8, len: 12 };
        assert!(err.to_string().contains("8"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: Error = ConfigError::InvalidKey("9999".to_string()).into();
        assert!(matches!(err, Error::Config(ConfigError::InvalidKey(_))));
    }
}
