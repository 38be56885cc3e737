//! Error type for configuration store operations.
//!
//! Only persistence can fail in a way the caller sees.  A backing file that
//! cannot be read when the store is opened is treated as "no configuration
//! yet" and never produces an error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`crate::ConfigStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be opened for writing, or a write failed.
    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Path of the backing file involved in the failure.
    pub fn path(&self) -> &std::path::Path {
        match self {
            StoreError::Write { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_display_names_path_and_cause() {
        // Arrange
        let err = StoreError::Write {
            path: PathBuf::from("/etc/app.conf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("/etc/app.conf"), "got: {msg}");
        assert!(msg.contains("denied"), "got: {msg}");
        assert_eq!(err.path(), std::path::Path::new("/etc/app.conf"));
    }
}
