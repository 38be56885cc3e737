//! Filesystem backend.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::StorageBackend;

/// [`StorageBackend`] over `std::fs`.
///
/// Bytes pass through unchanged in both directions.  Writes truncate the file
/// first; no temporary file or rename is involved, so a crash mid-write can
/// leave a partial file behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileBackend;

impl FileBackend {
    pub fn new() -> Self {
        Self
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn store(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(contents)?;
        writer.flush()
    }
}
