//! Integration tests for the kvconf-core store against real files.
//!
//! Each test works in its own directory under the system temp dir so tests
//! can run in parallel.

use std::path::PathBuf;

use kvconf_core::{ConfigStore, StoreError};
use uuid::Uuid;

/// A unique scratch directory, removed when dropped.
struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("kvconf_it_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.dir).ok();
    }
}

#[test]
fn test_loads_existing_file() {
    // Arrange
    let scratch = Scratch::new();
    let path = scratch.path("testfile");
    std::fs::write(&path, "casa=sarmiento\nfloat=3.141560\nnum=casa\n").unwrap();

    // Act
    let store = ConfigStore::open(&path);

    // Assert
    assert_eq!(store.get("casa", "null"), "sarmiento");
    assert_eq!(store.get_double("float", 0.0), 3.14156);
    assert_eq!(store.get_double("num", 5.0), 0.0);
}

#[test]
fn test_nonexistent_path_starts_empty_and_save_creates_file() {
    // Arrange
    let scratch = Scratch::new();
    let path = scratch.path("first_run.conf");
    assert!(!path.exists());

    // Act
    let mut store = ConfigStore::open(&path);
    let empty = store.is_empty();
    store.set("nombre", "Documento sin título");
    store.set("tamaño", 1024);
    store.save().expect("save must create the file");

    // Assert
    assert!(empty);
    assert!(path.exists());
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("nombre=Documento sin título\n"));
    assert!(text.contains("tamaño=1024\n"));
}

#[test]
fn test_round_trip_of_every_type() {
    // Arrange
    let scratch = Scratch::new();
    let path = scratch.path("types.conf");
    let mut store = ConfigStore::open(&path);
    store.set_string("text", "a value with spaces");
    store.set_int("neg", -1001);
    store.set_uint("big", u32::MAX);
    store.set_double("ratio", -2.5);
    store.set_bool("enabled", true);

    // Act
    store.save().unwrap();
    let reloaded = ConfigStore::open(&path);

    // Assert
    assert_eq!(reloaded.get("text", ""), "a value with spaces");
    assert_eq!(reloaded.get_int("neg", 0), -1001);
    assert_eq!(reloaded.get_uint("big", 0), u32::MAX);
    assert_eq!(reloaded.get("big", ""), "4294967295");
    assert_eq!(reloaded.get_double("ratio", 0.0), -2.5);
    assert_eq!(reloaded.get("ratio", ""), "-2.500000");
    assert!(reloaded.get_bool("enabled", false));
    assert_eq!(reloaded.len(), 5);
}

#[test]
fn test_save_overwrites_previous_content() {
    let scratch = Scratch::new();
    let path = scratch.path("overwrite.conf");
    std::fs::write(&path, "old=1\nstale line\n").unwrap();

    let mut store = ConfigStore::open(&path);
    store.set("new", 2);
    store.save().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new=2\nold=1\n");
}

#[test]
fn test_windows_line_endings_and_padding_are_normalised() {
    let scratch = Scratch::new();
    let path = scratch.path("crlf.conf");
    std::fs::write(&path, "  width = 1280 \r\nfullscreen=Sí\r\n\r\nexpr = a = b\r\n").unwrap();

    let store = ConfigStore::open(&path);

    assert_eq!(store.get_int("width", 0), 1280);
    assert!(store.get_bool("fullscreen", false));
    assert_eq!(store.get("expr", ""), "a = b");
    assert_eq!(store.len(), 3);
}

#[test]
fn test_latin1_value_survives_save_of_other_key() {
    // Arrange
    let scratch = Scratch::new();
    let path = scratch.path("latin1.conf");
    std::fs::write(&path, b"name=caf\xE9\n").unwrap();

    // Act
    let mut store = ConfigStore::open(&path);
    store.set("other", 1);
    store.save().unwrap();

    // Assert
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes, b"name=caf\xE9\nother=1\n".to_vec());
}

#[test]
fn test_duplicate_keys_in_file_last_wins() {
    let scratch = Scratch::new();
    let path = scratch.path("dupes.conf");
    std::fs::write(&path, "mode=a\nmode=b\nmode=c\n").unwrap();

    let store = ConfigStore::open(&path);

    assert_eq!(store.get("mode", ""), "c");
}

#[test]
fn test_save_into_missing_directory_returns_write_error() {
    // Arrange
    let scratch = Scratch::new();
    let path = scratch.path("missing").join("dir").join("app.conf");
    let mut store = ConfigStore::open(&path);
    store.set("k", "v");

    // Act
    let err = store.save().unwrap_err();

    // Assert
    let StoreError::Write { path: failed, .. } = &err;
    assert_eq!(failed, &path);
    assert!(store.exists("k"));
}

#[test]
fn test_directory_as_backing_path_starts_empty() {
    // Reading a directory fails with an I/O error other than NotFound.
    let scratch = Scratch::new();
    let store = ConfigStore::open(scratch.path(""));
    assert!(store.is_empty());
}
