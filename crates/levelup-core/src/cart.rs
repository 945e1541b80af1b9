//! # Cart Module
//!
//! The cart value type: an ordered, code-unique sequence of line items.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Invariants                                  │
//! │                                                                         │
//! │  1. UNIQUENESS   At most one line item per product code.                │
//! │                  Re-adding a code merges into the existing line.        │
//! │                                                                         │
//! │  2. ORDER        Insertion order = order codes were FIRST added.        │
//! │                  Merging a quantity never moves the line.               │
//! │                                                                         │
//! │  3. QUANTITY     Every line's quantity ≥ 1. A line is removed,          │
//! │                  never zeroed.                                          │
//! │                                                                         │
//! │  4. SNAPSHOT     name/price are frozen from the catalog at the          │
//! │                  moment the line is first added.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This type is pure data: persistence lives in `levelup-store`, rendering
//! in the view layer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Product;
use crate::money::Money;

/// Clamps a requested quantity to the permissive storefront rule:
/// any non-positive request means "one, please".
///
/// The original storefront never rejected a quantity; it normalized it.
/// See `validation::parse_quantity` for the text-input side of the same rule.
#[inline]
pub fn normalize_quantity(requested: i64) -> i64 {
    if requested < 1 {
        1
    } else {
        requested
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product's entry in the cart.
///
/// ## Snapshot Fields
/// `name` and `price` are frozen copies of the catalog values at the time
/// the line was first added. If the catalog is reseeded with new prices, an
/// open cart keeps displaying what the shopper agreed to.
///
/// ## Wire Shape
/// Serializes to exactly the persisted slot schema:
/// `{"code": "...", "name": "...", "price": 49990, "quantity": 2}`
/// (`Money` is a newtype and serializes as a bare integer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Product code - must exist in the catalog at add-time.
    pub code: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub price: Money,

    /// Quantity in cart, always ≥ 1.
    pub quantity: i64,
}

impl LineItem {
    /// Creates a line item from a catalog product and a normalized quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        LineItem {
            code: product.code.clone(),
            name: product.name.clone(),
            price: product.price(),
            quantity,
        }
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered sequence of [`LineItem`].
///
/// All operations here are total functions over the cart value. Catalog
/// lookup (the only fallible step of adding) happens in the store layer
/// before this type is touched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Items in the cart, in first-added order.
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Rebuilds a cart from a persisted sequence of line items.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Cart { items }
    }

    /// The line items, in first-added order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Adds a product to the cart, merging quantities by code.
    ///
    /// ## Behavior
    /// - Code already in cart: its quantity grows by `quantity`, the line
    ///   keeps its position and its original name/price snapshot
    /// - New code: a line is appended at the end with the catalog's current
    ///   name/price frozen in
    ///
    /// The quantity is normalized with [`normalize_quantity`] so the total
    /// item count always grows by at least one. There is no upper bound.
    pub fn add_product(&mut self, product: &Product, quantity: i64) {
        let quantity = normalize_quantity(quantity);

        if let Some(item) = self.items.iter_mut().find(|i| i.code == product.code) {
            item.quantity += quantity;
            return;
        }

        self.items.push(LineItem::from_product(product, quantity));
    }

    /// Removes the line with this code.
    ///
    /// Returns `true` if a line was removed, `false` if the code was not in
    /// the cart. An absent code is a no-op, not an error.
    pub fn remove(&mut self, code: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.code != code);
        self.items.len() != initial_len
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of unique lines in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the subtotal (sum of line totals).
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total())
    }

    /// Derived totals for the view layer.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            total_item_count: self.total_quantity(),
            subtotal: self.subtotal(),
        }
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived cart totals, recomputed on demand.
///
/// The storefront has no taxes or fees: the displayed total IS the subtotal,
/// so only one monetary figure is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Sum of quantities over all lines (the badge on the cart icon).
    pub total_item_count: i64,

    /// Sum of unit price × quantity over all lines.
    pub subtotal: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
