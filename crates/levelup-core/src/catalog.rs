//! # Catalog Module
//!
//! The static product catalog and category filtering.
//!
//! ## Ownership
//! The catalog is reference data: it is seeded once by the embedder and is
//! read-only to this crate. Nothing here mutates it after construction.
//!
//! ## Filtering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Category Filtering Works                         │
//! │                                                                         │
//! │  User clicks filter button: "accesorios"                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CategoryFilter::parse("accesorios")                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                            │
//! │  │ Catalog                                 │                            │
//! │  │                                         │                            │
//! │  │ AC002 | HyperX Cloud II  | accesorios   │ ← MATCH!                   │
//! │  │ MS001 | Logitech G502    | accesorios   │ ← MATCH!                   │
//! │  │ CO001 | PlayStation 5    | consolas     │                            │
//! │  └─────────────────────────────────────────┘                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Results: [AC002, MS001]   (code order, deterministic)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// ## Identity
/// The `code` is the business identifier (e.g. `MS001`) and is unique within
/// the catalog. There is no second surrogate key; the storefront never talks
/// to a database.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Product code - business identifier, unique within the catalog.
    pub code: String,

    /// Display name shown in the grid and on cart lines.
    pub name: String,

    /// Price in minor currency units.
    pub price_minor: i64,

    /// Category tag used by the grid filter (e.g. `accesorios`).
    pub category: String,
}

impl Product {
    /// Creates a product from its catalog fields.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price_minor: i64,
        category: impl Into<String>,
    ) -> Self {
        Product {
            code: code.into(),
            name: name.into(),
            price_minor,
            category: category.into(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_minor(self.price_minor)
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// A grid filter selection: everything, or one category tag.
///
/// An unknown tag is not an error - it simply matches nothing, which is what
/// the grid shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Show every product.
    All,
    /// Show only products carrying this category tag.
    Category(String),
}

impl CategoryFilter {
    /// Parses the filter value carried by a filter button.
    ///
    /// `"all"` selects everything; any other value selects that category.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "all" => CategoryFilter::All,
            tag => CategoryFilter::Category(tag.to_string()),
        }
    }

    /// Checks whether a product is visible under this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(tag) => product.category == *tag,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The static, read-only product catalog: code → product.
///
/// ## Usage
/// ```rust
/// use levelup_core::catalog::{Catalog, CategoryFilter, Product};
///
/// let catalog = Catalog::new(vec![
///     Product::new("MS001", "Mouse Gamer Logitech G502", 49_990, "accesorios"),
///     Product::new("CO001", "PlayStation 5", 549_990, "consolas"),
/// ]);
///
/// assert!(catalog.contains("MS001"));
/// let visible = catalog.filter(&CategoryFilter::parse("consolas"));
/// assert_eq!(visible.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    /// Builds a catalog from seeded products.
    ///
    /// Codes are unique; if the seed repeats a code the later entry wins,
    /// matching last-write semantics of a key-value seed.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Catalog {
            products: products
                .into_iter()
                .map(|p| (p.code.clone(), p))
                .collect(),
        }
    }

    /// Membership test by product code.
    pub fn contains(&self, code: &str) -> bool {
        self.products.contains_key(code)
    }

    /// Looks up a product by code.
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    /// Looks up a product by code, failing with [`CoreError::UnknownProduct`]
    /// if the catalog does not carry it.
    pub fn require(&self, code: &str) -> CoreResult<&Product> {
        self.products
            .get(code)
            .ok_or_else(|| CoreError::UnknownProduct(code.to_string()))
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns the products visible under a filter, in code order.
    ///
    /// Code order keeps the result deterministic regardless of map iteration
    /// order, so the grid renders stably between calls.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Product> {
        let mut visible: Vec<&Product> = self
            .products
            .values()
            .filter(|p| filter.matches(p))
            .collect();
        visible.sort_by(|a, b| a.code.cmp(&b.code));
        visible
    }

    /// All products, in code order.
    pub fn all(&self) -> Vec<&Product> {
        self.filter(&CategoryFilter::All)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
