//! Storage backends for the configuration store.
//!
//! A [`crate::ConfigStore`] never touches `std::fs` directly.  It reads and
//! writes whole files, as raw bytes, through a [`StorageBackend`]:
//!
//! - [`FileBackend`] – the real filesystem.
//! - [`MemoryBackend`] – files kept in memory, for embedding and tests.
//!
//! # Testability
//!
//! Swapping the backend lets tests exercise load and save failures (missing
//! files, read-only locations) without touching the disk.

use std::io;
use std::path::Path;

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Whole-file access used by the store's load and save paths.
#[cfg_attr(test, mockall::automock)]
pub trait StorageBackend {
    /// Reads the complete raw contents of `path`.
    ///
    /// Any error here is treated by the store as "no configuration yet".
    fn load(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replaces the contents of `path` with `contents`, creating it if needed.
    fn store(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}
