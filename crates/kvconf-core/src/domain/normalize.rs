//! Trimming and boolean recognition.
//!
//! # Which characters are trimmed?
//!
//! Only the ASCII space (`0x20`) and carriage return (`0x0D`).  Tabs and other
//! Unicode whitespace are part of the key or value.  The carriage return is in
//! the set so that files written on Windows (`\r\n` line endings) load the
//! same way as files written on Unix.

/// Values that [`is_truthy`] accepts, already in lowercase.
///
/// Anything else, including the empty string and `"0"`, reads as `false`.
pub const TRUTHY: [&str; 10] = [
    "yes",
    "y",
    "true",
    "t",
    "sí",
    "s",
    "verdadero",
    "v",
    "on",
    "1",
];

fn is_trim_char(c: char) -> bool {
    c == ' ' || c == '\r'
}

/// Removes leading and trailing spaces and carriage returns.
///
/// Returns an empty slice for empty or all-blank input.
///
/// # Examples
///
/// ```rust
/// use kvconf_core::domain::trim;
///
/// assert_eq!(trim("  key \r"), "key");
/// assert_eq!(trim("\tkey"), "\tkey");
/// assert_eq!(trim("   "), "");
/// ```
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_trim_char)
}

/// Byte-level [`trim`], for lines that are not valid UTF-8.
pub fn trim_bytes(b: &[u8]) -> &[u8] {
    let is_trim = |c: &u8| *c == b' ' || *c == b'\r';
    let start = b.iter().position(|c| !is_trim(c)).unwrap_or(b.len());
    let end = b.iter().rposition(|c| !is_trim(c)).map_or(start, |i| i + 1);
    &b[start..end]
}

/// Lowercases ASCII letters and leaves every other byte as it is.
///
/// Multi-byte UTF-8 sequences pass through untouched, so `"SÍ"` folds to
/// `"sÍ"` rather than being corrupted.
pub fn fold_ascii(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Returns `true` if `s` is one of the [`TRUTHY`] words, ignoring ASCII case.
pub fn is_truthy(s: &str) -> bool {
    let folded = fold_ascii(s);
    TRUTHY.iter().any(|word| *word == folded)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
