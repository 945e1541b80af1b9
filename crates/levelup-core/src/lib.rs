//! # levelup-core: Pure Business Logic for the Level-Up Storefront
//!
//! This crate is the **heart** of the Level-Up storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Level-Up Storefront Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     View Layer (external)                       │   │
//! │  │    Product Grid ──► Cart Panel ──► Forms ──► Notifications      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ synchronous calls                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  levelup-store (persistence)                    │   │
//! │  │    CartStore: add_item, remove_item, clear, totals              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ levelup-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │ validation│   │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   rules   │   │   │
//! │  │   │  Catalog  │  │ discounts │  │ LineItem  │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The static product catalog and category filtering
//! - [`cart`] - The cart value type, line items, and derived totals
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Registration, review, and support form rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor currency units (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use levelup_core::catalog::Product;
//! use levelup_core::cart::Cart;
//!
//! let mouse = Product::new("MS001", "Mouse Gamer Logitech G502", 49990, "accesorios");
//!
//! let mut cart = Cart::new();
//! cart.add_product(&mouse, 2);
//! cart.add_product(&mouse, 1);
//!
//! let totals = cart.totals();
//! assert_eq!(totals.total_item_count, 3);
//! assert_eq!(totals.subtotal.minor(), 149_970);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use levelup_core::Money` instead of
// `use levelup_core::money::Money`

pub use cart::{Cart, CartTotals, LineItem};
pub use catalog::{Catalog, CategoryFilter, Product};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum length of a customer display name, in characters.
pub const NAME_MIN_LEN: usize = 2;

/// Minimum password length for registration.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Minimum age (in whole years) required to register an account.
pub const MIN_ACCOUNT_AGE_YEARS: u32 = 18;

/// Maximum length of a review comment, in characters.
pub const REVIEW_COMMENT_MAX_LEN: usize = 500;

/// Comment length at which the live counter starts warning the reviewer.
pub const REVIEW_COMMENT_WARN_LEN: usize = 400;

/// Lowest accepted star rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: u8 = 5;

/// Email domain that unlocks the student discount perk.
pub const DUOC_EMAIL_DOMAIN: &str = "duoc.cl";

/// Student discount granted to duoc.cl registrations, in basis points.
///
/// 2000 bps = 20%. Applied with [`Money::apply_percentage_discount`].
pub const DUOC_DISCOUNT_BPS: u32 = 2000;
