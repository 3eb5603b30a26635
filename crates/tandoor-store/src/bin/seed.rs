//! # Seed Data Generator
//!
//! Populates a fresh store with a Pakistani restaurant menu for development.
//!
//! ## Usage
//! ```bash
//! # Seed the menu and print a summary
//! cargo run -p tandoor-store --bin seed
//!
//! # Also run a demo order through its whole lifecycle
//! cargo run -p tandoor-store --bin seed -- --demo
//! ```
//!
//! ## Generated Menu
//! Creates a realistic dine-in menu across categories:
//! - BBQ (tikka, kabab, boti)
//! - Curries (karahi, daal, nihari)
//! - Bread (naan, roti)
//! - Rice (biryani)
//! - Drinks (margarita, soft drinks, kahwa)
//! - Desserts (gulab jamun, kheer)
//!
//! Plus two bundle deals priced below their itemized totals.

use std::collections::HashMap;
use std::env;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use tandoor_core::{DateRange, DealComponent, MenuItem, Money, OrderDraft};
use tandoor_store::{generate_menu_item_id, Store, StoreConfig};

/// Menu items per category, priced in whole rupees.
const MENU: &[(&str, &[(&str, i64)])] = &[
    (
        "BBQ",
        &[
            ("Chicken Tikka", 850),
            ("Beef Seekh Kabab", 600),
            ("Malai Boti", 750),
        ],
    ),
    (
        "Curries",
        &[
            ("Chicken Karahi", 1450),
            ("Daal Makhani", 550),
            ("Nihari", 900),
        ],
    ),
    (
        "Bread",
        &[
            ("Garlic Naan", 120),
            ("Tandoori Roti", 40),
            ("Roghni Naan", 150),
        ],
    ),
    ("Rice", &[("Chicken Biryani", 650)]),
    (
        "Drinks",
        &[
            ("Mint Margarita", 250),
            ("Soft Drink", 150),
            ("Kahwa", 180),
        ],
    ),
    ("Desserts", &[("Gulab Jamun", 300), ("Kheer", 350)]),
];

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tandoor_store=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut demo = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--demo" | "-d" => {
                demo = true;
            }
            "--help" | "-h" => {
                println!("Tandoor POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --demo    Run a demo order through create/start/complete");
                println!("  -h, --help    Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    init_tracing();

    println!("🌱 Tandoor POS Seed Data Generator");
    println!("==================================");
    println!();

    let store = Store::new(StoreConfig::new());
    let catalog = store.catalog();

    // Seed the plain menu, remembering ids for the deals below
    let start = std::time::Instant::now();
    let mut ids: HashMap<&str, String> = HashMap::new();

    for (category, items) in MENU {
        for (name, rupees) in *items {
            let item = MenuItem::new(
                generate_menu_item_id(),
                *name,
                *category,
                Money::from_rupees(*rupees),
            );
            let added = catalog.add(item)?;
            ids.insert(*name, added.id);
        }
    }

    println!("✓ Seeded {} menu items", catalog.count());

    // Bundle deals, priced under their itemized totals
    let family_feast = catalog.add(MenuItem::deal(
        generate_menu_item_id(),
        "Family Feast",
        Money::from_rupees(2400),
        vec![
            DealComponent::new(ids["Chicken Karahi"].clone(), 1),
            DealComponent::new(ids["Garlic Naan"].clone(), 4),
            DealComponent::new(ids["Soft Drink"].clone(), 4),
        ],
    ))?;
    let bbq_platter = catalog.add(MenuItem::deal(
        generate_menu_item_id(),
        "BBQ Platter",
        Money::from_rupees(2700),
        vec![
            DealComponent::new(ids["Chicken Tikka"].clone(), 2),
            DealComponent::new(ids["Beef Seekh Kabab"].clone(), 2),
            DealComponent::new(ids["Tandoori Roti"].clone(), 4),
        ],
    ))?;

    for deal in [&family_feast, &bbq_platter] {
        println!(
            "✓ Deal '{}' at {} (saves {})",
            deal.name,
            deal.price,
            catalog.deal_savings(&deal.id)?
        );
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Seeded {} catalog entries in {:?}", catalog.count(), elapsed);

    // Spot-check the catalog reads the frontend relies on
    println!();
    println!("Verifying catalog queries...");
    println!("  Search 'tikka': {} results", catalog.search("tikka").len());
    println!("  Deals listed: {}", catalog.deals().len());
    println!(
        "  BBQ category: {} items",
        catalog.by_category("BBQ").len()
    );

    if demo {
        run_demo(&store, &ids)?;
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Walks one table order through its whole lifecycle and prints the
/// dashboard summary for today.
fn run_demo(store: &Store, ids: &HashMap<&str, String>) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("Running demo order...");

    let catalog = store.catalog();
    let tikka = catalog
        .get(&ids["Chicken Tikka"])
        .ok_or("seeded item missing: Chicken Tikka")?;
    let margarita = catalog
        .get(&ids["Mint Margarita"])
        .ok_or("seeded item missing: Mint Margarita")?;

    let mut draft = OrderDraft::table(4);
    draft.add_item(&tikka, 2)?;
    draft.add_item(&margarita, 1)?;
    draft.set_discount(10)?;

    let orders = store.orders();
    let order = orders.create(&draft)?;
    println!(
        "  Created order {} (subtotal {}, 10% off, total {})",
        order.id, order.subtotal, order.total
    );

    orders.start(&order.id)?;
    let completed = orders.complete(&order.id)?;
    println!("  Completed order, sale recorded for {}", completed.total);

    let today = DateRange::single_day(Utc::now().date_naive());
    let summary = store.reports().stats(&today);
    println!();
    println!("Today's dashboard:");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
