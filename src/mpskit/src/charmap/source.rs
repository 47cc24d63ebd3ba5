//! Validated charmap configuration.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::ConfigError;

/// Ordered (byte code, replacement text) pairs read from a charmap file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharmapSource {
    entries: Vec<(u8, String)>,
}

impl CharmapSource {
    /// Build from (byte code, text) pairs, rejecting empty text.
    ///
    /// A repeated code replaces the earlier text in place, the same way a
    /// repeated key does in a charmap file.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (u8, S)>,
        S: Into<String>,
    {
        let mut source = Self::default();
        for (code, text) in entries {
            let text = text.into();
            if text.is_empty() {
                return Err(ConfigError::EmptyValue(format!("{code:03}")));
            }
            source.insert(code, text);
        }
        Ok(source)
    }

    /// Parse charmap JSON, rejecting malformed keys and empty values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawEntries = serde_json::from_str(json)?;
        let mut source = Self::default();
        for (key, text) in raw.0 {
            let code = parse_key(&key)?;
            if text.is_empty() {
                return Err(ConfigError::EmptyValue(key));
            }
            source.insert(code, text);
        }
        Ok(source)
    }

    pub(crate) fn insert(&mut self, code: u8, text: String) {
        match self.entries.iter_mut().find(|(c, _)| *c == code) {
            Some(slot) => slot.1 = text,
            None => self.entries.push((code, text)),
        }
    }

    pub fn entries(&self) -> &[(u8, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a key such as `"064"` into its byte code.
pub(crate) fn parse_key(key: &str) -> Result<u8, ConfigError> {
    if key.len() != 3 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidKey(key.to_string()));
    }
    key.parse::<u8>()
        .map_err(|_| ConfigError::InvalidKey(key.to_string()))
}

impl Serialize for CharmapSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (code, text) in &self.entries {
            map.serialize_entry(&format!("{code:03}"), text)?;
        }
        map.end()
    }
}

/// Raw JSON object entries in document order.
///
/// A repeated key replaces the earlier value in place.
struct RawEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RawVisitor)
    }
}

struct RawVisitor;

impl<'de> Visitor<'de> for RawVisitor {
    type Value = RawEntries;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object mapping byte codes to strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(String, String)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }
        }
        Ok(RawEntries(entries))
    }
}
