//! # Storefront Demo Walkthrough
//!
//! Seeds the development catalog and walks the cart flow end to end.
//!
//! ## Usage
//! ```bash
//! # Walk the demo against ./data/levelup-cart.json
//! cargo run -p levelup-store --bin demo
//!
//! # Specify the data directory
//! cargo run -p levelup-store --bin demo -- --data-dir /tmp/levelup
//!
//! # Verbose logging
//! RUST_LOG=debug cargo run -p levelup-store --bin demo
//! ```
//!
//! The cart survives between runs: run it twice and the second run starts
//! from the persisted snapshot the first one left behind.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use levelup_core::validation::{RegistrationForm, ReviewForm};
use levelup_core::{Catalog, CategoryFilter, Product};
use levelup_store::{CartStore, FileSlot, CART_SLOT_KEY};

/// The development catalog: the storefront's six launch products.
fn seed_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new("JM002", "Carcassonne", 24_990, "juegos-mesa"),
        Product::new("AC002", "Auriculares HyperX Cloud II", 79_990, "accesorios"),
        Product::new("CO001", "PlayStation 5", 549_990, "consolas"),
        Product::new("CG001", "PC Gamer ASUS ROG Strix", 1_299_990, "computadores"),
        Product::new("SG001", "Silla Gamer Secretlab Titan", 349_990, "sillas"),
        Product::new("MS001", "Mouse Gamer Logitech G502", 49_990, "accesorios"),
    ])
}

fn main() {
    init_tracing();

    let data_dir = parse_data_dir().unwrap_or_else(|| "./data".to_string());
    info!(%data_dir, "starting storefront demo");

    let catalog = seed_catalog();
    let slot = FileSlot::new(&data_dir, CART_SLOT_KEY);
    println!("cart slot: {}", slot.path().display());

    let mut store = CartStore::open(catalog, slot);
    if !store.cart().is_empty() {
        println!(
            "rehydrated cart from previous run ({} items)",
            store.totals().total_item_count
        );
        store.clear().expect("clearing rehydrated cart");
    }

    // Browse: filter the grid by category
    println!("\n-- accesorios --");
    for product in store.catalog().filter(&CategoryFilter::parse("accesorios")) {
        println!("  {}  {}  {}", product.code, product.name, product.price());
    }

    // Shop: two mice, then one more, then a console
    store.add_item("MS001", 2).expect("adding MS001");
    store.add_item("MS001", 1).expect("adding MS001 again");
    store.add_item("CO001", 1).expect("adding CO001");

    println!("\n-- cart --");
    for line in store.cart().items() {
        println!(
            "  {} x{}  {}",
            line.name,
            line.quantity,
            line.line_total()
        );
    }
    let totals = store.totals();
    println!(
        "  total: {} items, {}",
        totals.total_item_count, totals.subtotal
    );

    // A typo'd code is rejected without touching the cart
    if let Err(e) = store.add_item("MS999", 1) {
        println!("\nrejected: {}", e);
    }

    // Register: a duoc.cl student gets the discount banner
    let registration = RegistrationForm {
        name: "Ana Martínez".to_string(),
        email: "ana@duoc.cl".to_string(),
        birth_date: "2000-01-15".to_string(),
        password: "Abcdef12".to_string(),
        password_confirmation: "Abcdef12".to_string(),
    };
    match registration.validate_today() {
        Ok(perk) => {
            let mouse = store.catalog().get("MS001").expect("seeded product");
            println!(
                "\nregistered with perk {:?}: mouse at {} for this student",
                perk,
                perk.discounted(mouse.price())
            );
        }
        Err(errors) => {
            for e in errors {
                println!("registration error: {}", e);
            }
        }
    }

    // Review the mouse
    let review = ReviewForm {
        product_code: "MS001".to_string(),
        rating: 5,
        comment: "Excelente sensor, la batería dura semanas.".to_string(),
    };
    match review.validate(store.catalog()) {
        Ok(()) => println!("review accepted"),
        Err(errors) => {
            for e in errors {
                println!("review error: {}", e);
            }
        }
    }

    info!("demo finished; cart snapshot left on disk for the next run");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,levelup_store=debug,levelup_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Reads `--data-dir <path>` from the command line, if given.
fn parse_data_dir() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--data-dir")
        .and_then(|i| args.get(i + 1).cloned())
}
