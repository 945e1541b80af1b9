//! # Storage Slot
//!
//! The local-storage analog: a named key-value slot with get/set semantics.
//!
//! ## Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storage Slot Semantics                             │
//! │                                                                         │
//! │  read()            getItem(key)   → Some(value) | None                  │
//! │  write(value)      setItem(key)   → whole-value overwrite               │
//! │                                                                         │
//! │  No deltas, no appends, no versioning: every write replaces the         │
//! │  entire stored value, exactly like the browser API it mirrors.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The trait keeps `CartStore` testable without a filesystem: production
//! uses [`FileSlot`], tests use [`MemorySlot`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreResult;

// =============================================================================
// StorageSlot Trait
// =============================================================================

/// A single named key-value slot in durable storage.
pub trait StorageSlot {
    /// Reads the stored value. `Ok(None)` means the key has never been
    /// written (a fresh browser profile).
    fn read(&self) -> StoreResult<Option<String>>;

    /// Overwrites the stored value in full.
    fn write(&mut self, value: &str) -> StoreResult<()>;
}

// =============================================================================
// File-Backed Slot
// =============================================================================

/// A slot persisted as one JSON file per key under a data directory.
///
/// ## Layout
/// `<data_dir>/<key>.json` - e.g. `./data/levelup-cart.json`
///
/// ## Usage
/// ```rust,no_run
/// use levelup_store::{FileSlot, StorageSlot, CART_SLOT_KEY};
///
/// let mut slot = FileSlot::new("./data", CART_SLOT_KEY);
/// slot.write("[]").unwrap();
/// assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
/// ```
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot for `key` under `data_dir`.
    ///
    /// Nothing is touched on disk until the first write; a missing file
    /// simply reads as `None`.
    pub fn new(data_dir: impl AsRef<Path>, key: &str) -> Self {
        FileSlot {
            path: data_dir.as_ref().join(format!("{}.json", key)),
        }
    }

    /// The file this slot reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> StoreResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, value: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value)?;
        debug!(path = %self.path.display(), bytes = value.len(), "slot written");
        Ok(())
    }
}

// =============================================================================
// In-Memory Slot
// =============================================================================

/// An in-memory slot for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Option<String>,
}

impl MemorySlot {
    /// Creates an empty slot (reads as `None`).
    pub fn new() -> Self {
        MemorySlot::default()
    }

    /// Creates a slot pre-seeded with a stored value, as if a previous
    /// session had written it.
    pub fn seeded(value: impl Into<String>) -> Self {
        MemorySlot {
            value: Some(value.into()),
        }
    }

    /// The currently stored value, if any.
    pub fn stored(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> StoreResult<Option<String>> {
        Ok(self.value.clone())
    }

    fn write(&mut self, value: &str) -> StoreResult<()> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
