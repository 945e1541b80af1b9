//! # Cart Store
//!
//! Owns the authoritative cart and keeps the persisted slot consistent
//! with in-memory state after every mutation.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Operations                                 │
//! │                                                                         │
//! │  View Action              Operation              State Change           │
//! │  ───────────              ─────────              ────────────           │
//! │                                                                         │
//! │  Click "add to cart" ───► add_item(code, n) ───► merge/append + persist │
//! │                                                                         │
//! │  Click line "×" ────────► remove_item(code) ───► drop line + persist    │
//! │                                                                         │
//! │  Click "empty cart" ────► clear() ─────────────► [] + persist           │
//! │                                                                         │
//! │  Render badge/totals ───► totals() ────────────► (read only)            │
//! │                                                                         │
//! │  Every mutation overwrites the slot in full before returning, so the    │
//! │  caller can never observe memory and storage disagreeing.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Atomicity
//! Operations are atomic from the caller's perspective: if the slot write
//! fails, the in-memory mutation is rolled back and the error surfaced.
//! Either both memory and slot advanced, or neither did.

use tracing::{debug, warn};

use levelup_core::cart::normalize_quantity;
use levelup_core::{Cart, CartTotals, Catalog, LineItem};

use crate::error::StoreResult;
use crate::slot::StorageSlot;

/// The process-wide cart store: one per session.
///
/// ## Construction
/// [`CartStore::open`] rehydrates the cart from the slot; an absent or
/// corrupt snapshot degrades to an empty cart and is never an error. The
/// catalog is injected so tests can run isolated instances instead of
/// sharing process-wide state.
///
/// ## Usage
/// ```rust
/// use levelup_core::{Catalog, Product};
/// use levelup_store::{CartStore, MemorySlot};
///
/// let catalog = Catalog::new(vec![Product::new(
///     "MS001", "Mouse Gamer Logitech G502", 49_990, "accesorios",
/// )]);
///
/// let mut store = CartStore::open(catalog, MemorySlot::new());
/// store.add_item("MS001", 2).unwrap();
/// assert_eq!(store.totals().total_item_count, 2);
/// ```
#[derive(Debug)]
pub struct CartStore<S: StorageSlot> {
    cart: Cart,
    catalog: Catalog,
    slot: S,
}

impl<S: StorageSlot> CartStore<S> {
    /// Opens the store, rehydrating the cart from the slot.
    ///
    /// ## Degradation, Not Failure
    /// - Slot never written → empty cart
    /// - Slot unreadable or unparseable → empty cart, WARN logged
    ///
    /// Nothing is written back at this stage; the slot is only read.
    pub fn open(catalog: Catalog, slot: S) -> Self {
        let cart = match slot.read() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<LineItem>>(&raw) {
                Ok(items) => {
                    debug!(lines = items.len(), "cart rehydrated from slot");
                    Cart::from_items(items)
                }
                Err(e) => {
                    warn!(error = %e, "persisted cart snapshot is corrupt, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "persisted cart slot unreadable, starting empty");
                Cart::new()
            }
        };

        CartStore {
            cart,
            catalog,
            slot,
        }
    }

    /// Adds a product to the cart and persists the result.
    ///
    /// ## Behavior
    /// - `requested_quantity` is normalized: anything below 1 becomes 1
    /// - Unknown `code` fails with `UnknownProduct`; neither the cart nor
    ///   the slot is touched
    /// - A code already in the cart has its quantity incremented in place;
    ///   a new code is appended with the catalog's current name and price
    ///   frozen in
    ///
    /// ## Guarantee
    /// On success, total item count grows by exactly the normalized
    /// quantity, and the slot holds the updated snapshot.
    pub fn add_item(&mut self, code: &str, requested_quantity: i64) -> StoreResult<&Cart> {
        // Catalog lookup comes first: an unknown code must abort before
        // any mutation.
        let product = self.catalog.require(code)?.clone();
        let quantity = normalize_quantity(requested_quantity);

        debug!(code = %code, quantity = %quantity, "add_item");

        let previous = self.cart.clone();
        self.cart.add_product(&product, quantity);

        if let Err(e) = self.persist() {
            self.cart = previous;
            return Err(e);
        }

        Ok(&self.cart)
    }

    /// Removes the line with this code and persists the result.
    ///
    /// An absent code is a no-op, not an error, and skips the slot write -
    /// the stored snapshot is already identical.
    pub fn remove_item(&mut self, code: &str) -> StoreResult<&Cart> {
        debug!(code = %code, "remove_item");

        let previous = self.cart.clone();
        if !self.cart.remove(code) {
            return Ok(&self.cart);
        }

        if let Err(e) = self.persist() {
            self.cart = previous;
            return Err(e);
        }

        Ok(&self.cart)
    }

    /// Empties the cart and persists the empty state.
    ///
    /// An already-empty cart is a no-op with no slot write, so upstream
    /// confirmation prompts are not triggered needlessly.
    pub fn clear(&mut self) -> StoreResult<&Cart> {
        if self.cart.is_empty() {
            return Ok(&self.cart);
        }

        debug!("clear");

        let previous = self.cart.clone();
        self.cart.clear();

        if let Err(e) = self.persist() {
            self.cart = previous;
            return Err(e);
        }

        Ok(&self.cart)
    }

    /// Derived totals: total item count and subtotal. Pure read.
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The injected catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The backing slot (e.g. to report the file a [`crate::FileSlot`]
    /// writes).
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Overwrites the slot with the current cart snapshot.
    ///
    /// The wire shape is the bare line-item array - see `LineItem` for the
    /// field schema.
    fn persist(&mut self) -> StoreResult<()> {
        let snapshot = serde_json::to_string(self.cart.items())?;
        self.slot.write(&snapshot)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::slot::MemorySlot;
    use levelup_core::{CoreError, Product};
    use std::io;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("MS001", "Mouse Gamer Logitech G502", 49_990, "accesorios"),
            Product::new("CO001", "PlayStation 5", 549_990, "consolas"),
        ])
    }

    /// Counts writes so tests can assert that no-ops skip persistence.
    #[derive(Debug, Default)]
    struct CountingSlot {
        inner: MemorySlot,
        writes: usize,
    }

    impl StorageSlot for CountingSlot {
        fn read(&self) -> StoreResult<Option<String>> {
            self.inner.read()
        }

        fn write(&mut self, value: &str) -> StoreResult<()> {
            self.writes += 1;
            self.inner.write(value)
        }
    }

    /// Reads fine, refuses every write.
    #[derive(Debug, Default)]
    struct ReadOnlySlot;

    impl StorageSlot for ReadOnlySlot {
        fn read(&self) -> StoreResult<Option<String>> {
            Ok(None)
        }

        fn write(&mut self, _value: &str) -> StoreResult<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    #[test]
    fn test_open_fresh_slot_starts_empty() {
        let store = CartStore::open(catalog(), MemorySlot::new());
        assert!(store.cart().is_empty());
        assert_eq!(store.totals().total_item_count, 0);
        assert_eq!(store.totals().subtotal.minor(), 0);
    }

    #[test]
    fn test_open_corrupt_slot_starts_empty() {
        let store = CartStore::open(catalog(), MemorySlot::seeded("definitely{not json"));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_open_does_not_write_back() {
        let slot = CountingSlot::default();
        let store = CartStore::open(catalog(), slot);
        assert_eq!(store.slot().writes, 0);
    }

    #[test]
    fn test_add_item_appends_and_persists() {
        let mut store = CartStore::open(catalog(), MemorySlot::new());
        store.add_item("MS001", 2).unwrap();

        assert_eq!(store.cart().line_count(), 1);
        assert_eq!(
            store.slot().stored().unwrap(),
            r#"[{"code":"MS001","name":"Mouse Gamer Logitech G502","price":49990,"quantity":2}]"#
        );
    }

    #[test]
    fn test_add_item_merges_quantity() {
        let mut store = CartStore::open(catalog(), MemorySlot::new());
        store.add_item("MS001", 2).unwrap();
        store.add_item("CO001", 1).unwrap();
        let cart = store.add_item("MS001", 1).unwrap();

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.items()[0].code, "MS001");
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_add_item_normalizes_quantity() {
        let mut store = CartStore::open(catalog(), MemorySlot::new());
        store.add_item("MS001", 0).unwrap();
        store.add_item("MS001", -4).unwrap();

        assert_eq!(store.totals().total_item_count, 2);
    }

    #[test]
    fn test_add_item_count_grows_by_normalized_quantity() {
        let mut store = CartStore::open(catalog(), MemorySlot::new());
        for (requested, expected_growth) in [(3, 3), (1, 1), (0, 1), (-2, 1)] {
            let before = store.totals().total_item_count;
            store.add_item("MS001", requested).unwrap();
            assert_eq!(store.totals().total_item_count, before + expected_growth);
        }
    }

    #[test]
    fn test_add_unknown_product_changes_nothing() {
        let mut store = CartStore::open(catalog(), MemorySlot::new());
        store.add_item("MS001", 1).unwrap();
        let snapshot_before = store.slot().stored().unwrap().to_string();
        let cart_before = store.cart().clone();

        let err = store.add_item("XX999", 1).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::UnknownProduct(code)) if code == "XX999"
        ));

        // Byte-for-byte identical, in memory and in the slot
        assert_eq!(store.cart(), &cart_before);
        assert_eq!(store.slot().stored().unwrap(), snapshot_before);
    }

    #[test]
    fn test_remove_item_persists() {
        let mut store = CartStore::open(catalog(), MemorySlot::new());
        store.add_item("MS001", 2).unwrap();
        store.add_item("CO001", 1).unwrap();

        let cart = store.remove_item("MS001").unwrap();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].code, "CO001");

        let stored = store.slot().stored().unwrap();
        assert!(!stored.contains("MS001"));
    }

    #[test]
    fn test_remove_absent_code_skips_write() {
        let mut store = CartStore::open(catalog(), CountingSlot::default());
        store.add_item("MS001", 1).unwrap();
        let writes_before = store.slot().writes;

        store.remove_item("XX999").unwrap();
        assert_eq!(store.slot().writes, writes_before);
        assert_eq!(store.cart().line_count(), 1);
    }

    #[test]
    fn test_clear_persists_empty_state() {
        let mut store = CartStore::open(catalog(), MemorySlot::new());
        store.add_item("MS001", 2).unwrap();

        let cart = store.clear().unwrap();
        assert!(cart.is_empty());
        assert_eq!(store.slot().stored().unwrap(), "[]");
    }

    #[test]
    fn test_clear_on_empty_cart_skips_write() {
        let mut store = CartStore::open(catalog(), CountingSlot::default());
        store.clear().unwrap();
        assert_eq!(store.slot().writes, 0);
    }

    #[test]
    fn test_roundtrip_to_fresh_store() {
        let mut store = CartStore::open(catalog(), MemorySlot::new());
        store.add_item("MS001", 2).unwrap();
        store.add_item("CO001", 1).unwrap();
        let snapshot = store.slot().stored().unwrap().to_string();

        // A new session over the same slot sees the identical cart
        let rehydrated = CartStore::open(catalog(), MemorySlot::seeded(snapshot));
        assert_eq!(rehydrated.cart(), store.cart());
    }

    #[test]
    fn test_failed_write_rolls_back_memory() {
        let mut store = CartStore::open(catalog(), ReadOnlySlot);

        let err = store.add_item("MS001", 2).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));

        // Fully rejected: the cart did not advance
        assert!(store.cart().is_empty());
    }

    /// The end-to-end scenario from the storefront walkthrough.
    #[test]
    fn test_session_scenario() {
        let mut store = CartStore::open(catalog(), MemorySlot::new());

        let cart = store.add_item("MS001", 2).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.items()[0].price.minor(), 49_990);

        let cart = store.add_item("MS001", 1).unwrap();
        assert_eq!(cart.items()[0].quantity, 3);

        let totals = store.totals();
        assert_eq!(totals.total_item_count, 3);
        assert_eq!(totals.subtotal.minor(), 149_970);

        let cart = store.remove_item("MS001").unwrap();
        assert!(cart.is_empty());

        // Clearing an empty cart stays a no-op
        let cart = store.clear().unwrap();
        assert!(cart.is_empty());
    }
}
