//! [`ConfigStore`]: the in-memory view of one `key=value` file.
//!
//! # Lifecycle (for beginners)
//!
//! ```text
//! ConfigStore::open(path)   -- read + parse the whole file (never fails)
//!   ├─ get_* / exists        -- look up, convert on every call
//!   ├─ set / set_*           -- convert to text, insert or overwrite in memory
//!   └─ save()                -- rewrite the file from memory
//! ```
//!
//! Nothing is written to disk until [`ConfigStore::save`] is called.  Two
//! stores opened on the same path are independent; whichever saves last
//! decides the file contents.
//!
//! # Missing key vs. malformed value
//!
//! The typed getters return the caller's default only when the key is
//! absent.  Once a key exists its text is always converted, and text that is
//! not a number converts to zero:
//!
//! ```rust
//! use kvconf_core::{ConfigStore, MemoryBackend};
//!
//! let backend = MemoryBackend::new();
//! backend.insert("t.conf", "num=casa\n");
//! let store = ConfigStore::with_backend("t.conf", backend);
//!
//! assert_eq!(store.get_int("num", 5), 0);
//! assert_eq!(store.get_int("missing", 5), 5);
//! ```

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::backend::{FileBackend, StorageBackend};
use crate::domain::coerce::{parse_double, parse_int, parse_uint};
use crate::domain::normalize::is_truthy;
use crate::domain::value::ConfigValue;
use crate::error::StoreError;
use crate::format::Document;

/// Key/value configuration loaded from a backing file.
#[derive(Debug, Clone)]
pub struct ConfigStore<B: StorageBackend = FileBackend> {
    path: PathBuf,
    document: Document,
    backend: B,
}

impl ConfigStore<FileBackend> {
    /// Opens the store backed by the file at `path`.
    ///
    /// A missing or unreadable file is not an error: the store simply starts
    /// empty, and the first [`save`](Self::save) creates the file.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_backend(path, FileBackend::new())
    }
}

impl<B: StorageBackend> ConfigStore<B> {
    /// Opens the store at `path` through a custom backend.
    pub fn with_backend(path: impl Into<PathBuf>, backend: B) -> Self {
        let path = path.into();
        let document = match backend.load(&path) {
            Ok(bytes) => {
                let document = Document::parse(&bytes);
                debug!(
                    path = %path.display(),
                    entries = document.entries().len(),
                    non_utf8 = document.verbatim_len(),
                    "loaded config"
                );
                document
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file absent, starting empty");
                Document::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config file unreadable, starting empty");
                Document::new()
            }
        };
        Self {
            path,
            document,
            backend,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.document.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.entries().is_empty()
    }

    /// Iterates over `(key, raw value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.document
            .entries()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the stored text for `key`, or `None` if absent.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.document.entries().get(key).map(String::as_str)
    }

    /// `true` if `key` is present, whatever its value.
    pub fn exists(&self, key: &str) -> bool {
        self.document.entries().contains_key(key)
    }

    // ── Getters ───────────────────────────────────────────────────────────────

    /// Returns the stored text for `key`, or `default` if absent.
    pub fn get(&self, key: &str, default: &str) -> String {
        self.raw(key).unwrap_or(default).to_string()
    }

    /// Returns the value of `key` as a signed integer, or `default` if absent.
    ///
    /// Text without a leading number reads as `0`.
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.raw(key).map_or(default, parse_int)
    }

    /// Returns the value of `key` as an unsigned integer, or `default` if absent.
    ///
    /// Text without a leading number reads as `0`.
    pub fn get_uint(&self, key: &str, default: u32) -> u32 {
        self.raw(key).map_or(default, parse_uint)
    }

    /// Returns the value of `key` as a double, or `default` if absent.
    ///
    /// Text without a leading number reads as `0.0`.
    pub fn get_double(&self, key: &str, default: f64) -> f64 {
        self.raw(key).map_or(default, parse_double)
    }

    /// Returns the value of `key` as a boolean, or `default` if absent.
    ///
    /// True only for `yes`, `y`, `true`, `t`, `sí`, `s`, `verdadero`, `v`,
    /// `on` and `1`, ignoring ASCII case.  Everything else is `false`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.raw(key).map_or(default, is_truthy)
    }

    // ── Setters ───────────────────────────────────────────────────────────────

    /// Inserts or overwrites `key` with the canonical text of `value`.
    ///
    /// Only the in-memory map changes; call [`save`](Self::save) to persist.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.document.insert(key.into(), value.into().into_raw());
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, ConfigValue::Str(value.into()));
    }

    pub fn set_int(&mut self, key: impl Into<String>, value: i32) {
        self.set(key, ConfigValue::Int(value));
    }

    pub fn set_uint(&mut self, key: impl Into<String>, value: u32) {
        self.set(key, ConfigValue::UInt(value));
    }

    /// Stores `value` with six fractional digits (`3.14156` → `"3.141560"`).
    pub fn set_double(&mut self, key: impl Into<String>, value: f64) {
        self.set(key, ConfigValue::Double(value));
    }

    /// Stores `"true"` or `"false"`.
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, ConfigValue::Bool(value));
    }

    // ── Persistence ───────────────────────────────────────────────────────────

    /// Rewrites the backing file with every entry as a `key=value` line.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the file cannot be opened for writing
    /// or a write fails.  The in-memory entries are left untouched.
    pub fn save(&self) -> Result<(), StoreError> {
        let bytes = self.document.to_bytes();
        self.backend
            .store(&self.path, &bytes)
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), entries = self.len(), "saved config");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
