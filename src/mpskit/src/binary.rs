//! Binary primitives shared by the resource readers and writers.
//!
//! Integers are little-endian and come straight from `byteorder`:
//!
//! ```
//! use mpskit::binary::{ReadBytesExt, LE};
//! use std::io::Cursor;
//!
//! let mut cur = Cursor::new([0x34u8, 0x12, 0xff, 0xff]);
//! assert_eq!(cur.read_u16::<LE>().unwrap(), 0x1234);
//! assert_eq!(cur.read_i16::<LE>().unwrap(), -1);
//! ```
//!
//! The extension traits here add the byte-block, fixed-field and
//! charmap-aware text operations on top.

use std::io::{Read, Write};

pub use byteorder::{ReadBytesExt, WriteBytesExt, LE};

use crate::charmap::Charmap;
use crate::codec::{self, EncodeOptions};
use crate::{Error, Result};

/// Text before the first zero byte, or the whole buffer if there is none.
pub fn asciiz(buf: &[u8]) -> Result<String> {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    let bytes = &buf[..end];
    if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
        return Err(Error::ByteOutOfRange {
            byte: bytes[offset],
            offset,
        });
    }
    Ok(bytes.iter().map(|&b| char::from(b)).collect())
}

pub trait ReadBinExt: Read {
    /// Read exactly `n` bytes.
    fn read_raw(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Read bytes up to and including `terminator`.
    fn read_terminated(&mut self, terminator: u8) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        loop {
            let byte = self.read_u8()?;
            bytes.push(byte);
            if byte == terminator {
                return Ok(bytes);
            }
        }
    }

    /// Read a zero-terminated ASCII string, consuming the terminator.
    fn read_asciiz(&mut self) -> Result<String> {
        let bytes = self.read_terminated(0)?;
        asciiz(&bytes)
    }

    /// Read `expected.len()` bytes and check they match.
    fn read_idstring(&mut self, expected: &[u8]) -> Result<()> {
        let actual = self.read_raw(expected.len())?;
        if actual != expected {
            return Err(Error::InvalidMagic {
                expected: expected.to_vec(),
                actual,
            });
        }
        Ok(())
    }

    /// Read an `n`-byte text field and decode it through `charmap`.
    fn read_text(&mut self, n: usize, charmap: &Charmap, null_term: bool) -> Result<String> {
        let bytes = self.read_raw(n)?;
        codec::decode(&bytes, charmap, null_term)
    }
}

impl<R: Read + ?Sized> ReadBinExt for R {}

pub trait WriteBinExt: Write {
    /// Write a raw block that must be exactly `n` bytes long.
    fn write_raw(&mut self, n: usize, bytes: &[u8]) -> Result<usize> {
        if bytes.len() != n {
            return Err(Error::RawLength {
                expected: n,
                actual: bytes.len(),
            });
        }
        self.write_all(bytes)?;
        Ok(n)
    }

    /// Write an ASCII string without terminator or padding.
    fn write_ascii(&mut self, s: &str) -> Result<usize> {
        check_ascii(s)?;
        self.write_all(s.as_bytes())?;
        Ok(s.len())
    }

    /// Write `s` into a fixed field of `width` bytes, zero-padded.
    fn write_string(&mut self, width: usize, s: &str) -> Result<usize> {
        check_ascii(s)?;
        if s.len() > width {
            return Err(Error::FieldOverflow {
                width,
                len: s.len(),
            });
        }
        self.write_all(s.as_bytes())?;
        self.write_all(&vec![0u8; width - s.len()])?;
        Ok(width)
    }

    /// Encode `text` through `charmap` and write the bytes.
    fn write_text(
        &mut self,
        text: &str,
        charmap: &Charmap,
        options: &EncodeOptions,
    ) -> Result<usize> {
        let bytes = codec::encode(text, charmap, options)?;
        self.write_all(&bytes)?;
        Ok(bytes.len())
    }
}

impl<W: Write + ?Sized> WriteBinExt for W {}

fn check_ascii(s: &str) -> Result<()> {
    match s.chars().enumerate().find(|(_, ch)| !ch.is_ascii()) {
        Some((offset, ch)) => Err(Error::CharOutOfRange { ch, offset }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_integers_little_endian() {
        let mut out: Vec<u8> = Vec::new();
        out.write_u8(0xab).unwrap();
        out.write_u16::<LE>(0x1234).unwrap();
        out.write_i16::<LE>(-2).unwrap();
        out.write_u32::<LE>(0xdeadbeef).unwrap();
        out.write_i32::<LE>(-1).unwrap();
        assert_eq!(&out[..5], &[0xabu8, 0x34, 0x12, 0xfe, 0xff]);

        let mut cur = Cursor::new(out);
        assert_eq!(cur.read_u8().unwrap(), 0xab);
        assert_eq!(cur.read_u16::<LE>().unwrap(), 0x1234);
        assert_eq!(cur.read_i16::<LE>().unwrap(), -2);
        assert_eq!(cur.read_u32::<LE>().unwrap(), 0xdeadbeef);
        assert_eq!(cur.read_i32::<LE>().unwrap(), -1);
    }

    #[test]
    fn test_asciiz() {
        assert_eq!(asciiz(b"NAME\0\0\0").unwrap(), "NAME");
        assert_eq!(asciiz(b"FULL").unwrap(), "FULL");
        assert_eq!(asciiz(b"\0rest").unwrap(), "");
        assert!(matches!(
            asciiz(&[b'A', 0xc0, 0]),
            Err(Error::ByteOutOfRange { byte: 0xc0, offset: 1 })
        ));
    }

    #[test]
    fn test_read_raw_and_terminated() {
        let mut cur = Cursor::new(b"ABCD\x01two\0tail".to_vec());
        assert_eq!(cur.read_raw(4).unwrap(), b"ABCD");
        assert_eq!(cur.read_terminated(1).unwrap(), b"\x01");
        assert_eq!(cur.read_asciiz().unwrap(), "two");
        assert_eq!(cur.read_raw(4).unwrap(), b"tail");
        assert!(matches!(cur.read_raw(1), Err(Error::Io(_))));
    }

    #[test]
    fn test_read_terminated_hits_eof() {
        let mut cur = Cursor::new(b"no terminator".to_vec());
        assert!(matches!(cur.read_terminated(0), Err(Error::Io(_))));
    }

    #[test]
    fn test_read_idstring() {
        let mut cur = Cursor::new(b"MADSPACKrest".to_vec());
        cur.read_idstring(b"MADSPACK").unwrap();

        let mut cur = Cursor::new(b"MADSPOCK".to_vec());
        let err = cur.read_idstring(b"MADSPACK").unwrap_err();
        assert!(matches!(err, Error::InvalidMagic { .. }));
    }

    #[test]
    fn test_write_raw_checks_length() {
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(out.write_raw(3, &[1, 2, 3]).unwrap(), 3);
        assert!(matches!(
            out.write_raw(4, &[1, 2, 3]),
            Err(Error::RawLength {
                expected: 4,
                actual: 3
            })
        ));
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_write_string_fixed_field() {
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(out.write_string(8, "MESSAGE").unwrap(), 8);
        assert_eq!(out, b"MESSAGE\0");

        let mut out: Vec<u8> = Vec::new();
        assert_eq!(out.write_string(4, "ABCD").unwrap(), 4);
        assert_eq!(out, b"ABCD");

        let mut out: Vec<u8> = Vec::new();
        assert!(matches!(
            out.write_string(3, "ABCD"),
            Err(Error::FieldOverflow { width: 3, len: 4 })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_ascii() {
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(out.write_ascii("abc").unwrap(), 3);
        assert_eq!(out, b"abc");
        assert!(matches!(
            out.write_ascii("aé"),
            Err(Error::CharOutOfRange { ch: 'é', offset: 1 })
        ));
    }

    #[test]
    fn test_text_fields_through_charmap() {
        let charmap = Charmap::from_pairs([(b'#', "ss"), (b'+', "!")]);

        let mut out: Vec<u8> = Vec::new();
        let written = out
            .write_text("Hi!", &charmap, &EncodeOptions::field(6))
            .unwrap();
        assert_eq!(written, 6);
        assert_eq!(out, b"Hi+\0\0\0");

        let mut cur = Cursor::new(out);
        assert_eq!(cur.read_text(6, &charmap, true).unwrap(), "Hi!");
    }
}
