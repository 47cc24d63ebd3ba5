//! Conversion between raw game bytes and editable text.
//!
//! Both directions run the text through the active [`Charmap`], except for
//! anything between `[` and `]`. Bracketed spans are copied verbatim, which
//! lets translators write raw codes the charmap would otherwise rewrite.
//!
//! The bracket state is a single on/off flag. `[` always switches remapping
//! off and `]` always switches it back on; there is no nesting.

use crate::charmap::Charmap;
use crate::{Error, Result};

const ZONE_OPEN: char = '[';
const ZONE_CLOSE: char = ']';

/// Highest byte value allowed in game text.
const MAX_TEXT_BYTE: u8 = 0x7f;

/// Tracks whether the charmap applies at the current position.
#[derive(Debug, Clone, Copy)]
struct ExclusionZone {
    remap: bool,
}

impl ExclusionZone {
    fn new() -> Self {
        Self { remap: true }
    }

    /// Whether `ch` should go through the charmap. The brackets themselves
    /// are never remapped while they switch the flag.
    #[inline]
    fn remaps(&mut self, ch: char) -> bool {
        if ch == ZONE_OPEN {
            self.remap = false;
        }
        let remap = self.remap;
        if ch == ZONE_CLOSE {
            self.remap = true;
        }
        remap
    }
}

/// Options for [`encode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Append a zero byte unless the output already ends with one.
    pub null_term: bool,
    /// Fail when the encoded bytes are longer than this.
    pub max_len: Option<usize>,
    /// Pad with zero bytes up to `max_len`. Ignored without `max_len`.
    pub fill: bool,
}

impl EncodeOptions {
    pub const fn new() -> Self {
        Self {
            null_term: false,
            max_len: None,
            fill: false,
        }
    }

    /// Options for a fixed-width, zero-padded field.
    pub const fn field(width: usize) -> Self {
        Self::new().max_len(width).fill()
    }

    pub const fn null_term(mut self) -> Self {
        self.null_term = true;
        self
    }

    pub const fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub const fn fill(mut self) -> Self {
        self.fill = true;
        self
    }
}

/// Decode raw bytes into text.
///
/// With `null_term`, everything from the first zero byte on is dropped.
/// Every remaining byte must be below 0x80.
pub fn decode(bytes: &[u8], charmap: &Charmap, null_term: bool) -> Result<String> {
    let end = if null_term {
        bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())
    } else {
        bytes.len()
    };
    let bytes = &bytes[..end];

    if let Some(offset) = bytes.iter().position(|&b| b > MAX_TEXT_BYTE) {
        return Err(Error::ByteOutOfRange {
            byte: bytes[offset],
            offset,
        });
    }

    let mut text = String::with_capacity(bytes.len());
    let mut zone = ExclusionZone::new();

    for &byte in bytes {
        let ch = char::from(byte);
        match zone.remaps(ch).then(|| charmap.decode_byte(byte)).flatten() {
            Some(replacement) => text.push_str(replacement),
            None => text.push(ch),
        }
    }

    Ok(text)
}

/// Encode text into raw bytes.
///
/// Characters are looked up in the charmap one at a time; unmapped
/// characters are kept as they are. The result must be 7-bit.
pub fn encode(text: &str, charmap: &Charmap, options: &EncodeOptions) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(text.len() + 1);
    let mut zone = ExclusionZone::new();

    for (offset, ch) in text.chars().enumerate() {
        let unit = match zone.remaps(ch).then(|| charmap.encode_char(ch)).flatten() {
            Some(code) => u32::from(code),
            None => u32::from(ch),
        };
        match u8::try_from(unit) {
            Ok(byte) if byte <= MAX_TEXT_BYTE => bytes.push(byte),
            _ => return Err(Error::CharOutOfRange { ch, offset }),
        }
    }

    if options.null_term && bytes.last() != Some(&0) {
        bytes.push(0);
    }

    if let Some(max_len) = options.max_len {
        if bytes.len() > max_len {
            return Err(Error::TooLong {
                max_len,
                text: text.to_string(),
            });
        }
        if options.fill {
            bytes.resize(max_len, 0);
        }
    }

    Ok(bytes)
}
