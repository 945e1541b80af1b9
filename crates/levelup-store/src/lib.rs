//! # levelup-store: Cart Persistence for the Level-Up Storefront
//!
//! This crate keeps the authoritative cart and mirrors it to a single
//! durable key-value slot after every mutation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  View layer (external)                                                  │
//! │       │  add_item / remove_item / clear / totals                        │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                 ★ levelup-store (THIS CRATE) ★                  │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────────┐          ┌──────────────────────────┐       │    │
//! │  │   │   CartStore   │ ───────► │  StorageSlot             │       │    │
//! │  │   │  (store.rs)   │ persist  │  (slot.rs)               │       │    │
//! │  │   │               │ ◄─────── │  FileSlot / MemorySlot   │       │    │
//! │  │   └───────┬───────┘  rehydrate └────────────────────────┘       │    │
//! │  │           │ pure cart math                                      │    │
//! │  └───────────┼─────────────────────────────────────────────────────┘    │
//! │              ▼                                                          │
//! │  levelup-core (Cart, Catalog, Money)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`slot`] - The storage-slot abstraction (the local-storage analog)
//! - [`store`] - CartStore: the four operations the view layer calls
//! - [`error`] - Storage error types

pub mod error;
pub mod slot;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use slot::{FileSlot, MemorySlot, StorageSlot};
pub use store::CartStore;

/// The fixed, namespaced key of the cart's persisted slot.
///
/// There is exactly one slot per browser/profile; the namespace prefix
/// keeps it from colliding with anything else the embedder stores.
pub const CART_SLOT_KEY: &str = "levelup-cart";
