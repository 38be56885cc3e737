//! # kvconf-core
//!
//! A small configuration store backed by a flat text file of `key=value`
//! lines.  The whole file is loaded into memory when the store is opened,
//! values are read back through typed accessors with default fallback, and
//! changes are written to disk only when [`ConfigStore::save`] is called.
//!
//! # Architecture overview (for beginners)
//!
//! - **`domain`** – Pure string handling with no I/O: trimming, ASCII case
//!   folding, the liberal numeric parsers, and the canonical formatting used
//!   by the setters.
//!
//! - **`format`** – The line-oriented file format.  Splits each line at the
//!   first `=` and renders the mapping back to text.
//!
//! - **`backend`** – The filesystem seam.  [`FileBackend`] talks to the real
//!   disk; [`MemoryBackend`] keeps files in memory for embedding and tests.
//!
//! - **`store`** – [`ConfigStore`], the component callers actually use.
//!
//! # Example
//!
//! ```rust
//! use kvconf_core::{ConfigStore, MemoryBackend};
//!
//! let backend = MemoryBackend::new();
//! backend.insert("app.conf", "width = 1024\nfullscreen=yes\n");
//!
//! let mut store = ConfigStore::with_backend("app.conf", backend);
//! assert_eq!(store.get_int("width", 800), 1024);
//! assert!(store.get_bool("fullscreen", false));
//! assert_eq!(store.get("title", "untitled"), "untitled");
//!
//! store.set("title", "Documento sin título");
//! store.save().unwrap();
//! ```

pub mod backend;
pub mod domain;
pub mod error;
pub mod format;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use domain::value::ConfigValue;
pub use error::StoreError;
pub use store::ConfigStore;
