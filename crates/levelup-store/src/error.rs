//! # Storage Error Types
//!
//! Error types for slot and cart-store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the storage context                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  View layer shows a user-facing message                                 │
//! │                                                                         │
//! │  NOTE: a corrupt snapshot at startup is NOT an error - it degrades      │
//! │  to an empty cart and is only logged (see CartStore::open).             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use levelup_core::CoreError;

/// Errors from cart-store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A domain rule failed (e.g. the product code is not in the catalog).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The storage slot could not be read or written.
    ///
    /// ## When This Occurs
    /// - Data directory is missing or not writable
    /// - Disk full
    #[error("storage slot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The in-memory cart could not be serialized for persistence.
    #[error("cart snapshot could not be serialized: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
