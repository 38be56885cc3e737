//! The `key=value` text format.
//!
//! ```text
//! casa=sarmiento
//! float = 3.141560
//! num=casa
//! ```
//!
//! - One entry per line.  A line is split at its *first* `=`, so values may
//!   contain `=` but keys may not.
//! - Spaces and carriage returns around the key and the value are dropped.
//! - Lines without `=` are skipped.  There is no comment syntax, no sections,
//!   no quoting and no escaping.
//! - When a key appears more than once, the last line wins.

use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::normalize::{trim, trim_bytes};

/// Ordered key → raw value mapping held by a store.
pub type Entries = BTreeMap<String, String>;

/// Splits one line into a trimmed `(key, value)` pair.
///
/// Returns `None` when the line has no `=`.
///
/// # Examples
///
/// ```rust
/// use kvconf_core::format::parse_line;
///
/// assert_eq!(parse_line(" url = a=b \r"), Some(("url", "a=b")));
/// assert_eq!(parse_line("no separator"), None);
/// ```
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    Some((trim(key), trim(value)))
}

/// Byte-level [`parse_line`] for lines that are not valid UTF-8.
fn parse_raw_line(line: &[u8]) -> Option<(&[u8], &[u8])> {
    let eq = line.iter().position(|b| *b == b'=')?;
    Some((trim_bytes(&line[..eq]), trim_bytes(&line[eq + 1..])))
}

/// A parsed file.
///
/// Lines that are valid UTF-8 become plain text entries.  A line that is not
/// (a Latin-1 `caf\xE9`, say) is readable through a lossy decoding, but its
/// original bytes are kept and written back by [`Document::to_bytes`] until
/// the key is overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    entries: Entries,
    verbatim: BTreeMap<String, Vec<u8>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the raw contents of a file.
    pub fn parse(bytes: &[u8]) -> Self {
        let mut doc = Self::new();
        for (number, line) in bytes.split(|b| *b == b'\n').enumerate() {
            let parsed = match std::str::from_utf8(line) {
                Ok(text) => parse_line(text).map(|(key, value)| {
                    doc.insert(key.to_string(), value.to_string());
                }),
                Err(_) => parse_raw_line(line).map(|(key, value)| {
                    doc.insert_verbatim(key, value);
                }),
            };
            if parsed.is_none() {
                trace!(line = number + 1, "skipping line without '='");
            }
        }
        doc
    }

    fn insert_verbatim(&mut self, key: &[u8], value: &[u8]) {
        let name = String::from_utf8_lossy(key).into_owned();
        let mut raw = Vec::with_capacity(key.len() + value.len() + 1);
        raw.extend_from_slice(key);
        raw.push(b'=');
        raw.extend_from_slice(value);
        self.entries
            .insert(name.clone(), String::from_utf8_lossy(value).into_owned());
        self.verbatim.insert(name, raw);
    }

    /// Text view of every entry.
    pub fn entries(&self) -> &Entries {
        &self.entries
    }

    pub fn into_entries(self) -> Entries {
        self.entries
    }

    /// Inserts or overwrites `key`, dropping any bytes kept for it.
    pub fn insert(&mut self, key: String, value: String) {
        self.verbatim.remove(&key);
        self.entries.insert(key, value);
    }

    /// Number of entries still carrying their original non-UTF-8 bytes.
    pub fn verbatim_len(&self) -> usize {
        self.verbatim.len()
    }

    /// Renders every entry as a `key=value\n` line, in key order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (key, value) in &self.entries {
            match self.verbatim.get(key) {
                Some(raw) => out.extend_from_slice(raw),
                None => {
                    out.extend_from_slice(key.as_bytes());
                    out.push(b'=');
                    out.extend_from_slice(value.as_bytes());
                }
            }
            out.push(b'\n');
        }
        out
    }
}

/// Parses a whole file into an [`Entries`] map.
pub fn parse_entries(text: &str) -> Entries {
    Document::parse(text.as_bytes()).into_entries()
}

/// Renders `entries` as `key=value\n` lines, in map order.
pub fn serialize_entries(entries: &Entries) -> String {
    let capacity = entries.iter().map(|(k, v)| k.len() + v.len() + 2).sum();
    let mut out = String::with_capacity(capacity);
    for (key, value) in entries {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
