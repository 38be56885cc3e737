//! In-memory backend for embedding and tests.
//!
//! Cloning a [`MemoryBackend`] yields another handle to the same files, so a
//! test can keep one handle, give a clone to a store, and inspect what the
//! store saved.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::StorageBackend;

#[derive(Debug, Default)]
struct Inner {
    files: HashMap<PathBuf, Vec<u8>>,
    read_only: bool,
}

/// [`StorageBackend`] that keeps file contents in a shared map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryBackend {
    /// Creates an empty backend with no files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a file with the given contents, replacing any existing one.
    pub fn insert(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        self.lock()
            .files
            .insert(path.as_ref().to_path_buf(), contents.into());
    }

    /// Returns the current contents of `path` as text, if it exists.
    ///
    /// Invalid UTF-8 is shown as `U+FFFD`; use [`bytes`](Self::bytes) to see
    /// exactly what was stored.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.bytes(path)
            .map(|b| String::from_utf8_lossy(&b).into_owned())
    }

    /// Returns the current raw contents of `path`, if it exists.
    pub fn bytes(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    /// When `true`, every [`StorageBackend::store`] call fails with
    /// `PermissionDenied`.
    pub fn set_read_only(&self, read_only: bool) {
        self.lock().read_only = read_only;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Every update is a single map operation, so a poisoned map is still whole.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.lock().files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn store(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut inner = self.lock();
        if inner.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", path.display()),
            ));
        }
        inner.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
