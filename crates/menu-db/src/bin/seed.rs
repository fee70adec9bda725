//! # Seed Data Generator
//!
//! Populates an empty products file with a demo menu for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./data/products.json (default)
//! cargo run -p menu-db --bin seed
//!
//! # Specify the products file
//! cargo run -p menu-db --bin seed -- --file ./tmp/products.json
//! ```
//!
//! ## Generated Products
//! One entry per item below, grouped by section:
//! - Burgers, Pizzas, Drinks, Desserts
//!
//! Each product has:
//! - SKU: `{SECTION}-{INDEX}` (stored lowercase)
//! - Name and description from the tables below
//! - Price from the tables below

use std::env;

use menu_core::NewProduct;
use menu_db::{Catalog, CatalogConfig};

/// Menu sections: (sku prefix, [(name, price, description)])
const SECTIONS: &[(&str, &[(&str, f64, &str)])] = &[
    (
        "BRG",
        &[
            ("X-Burger", 18.9, "Pão, hambúrguer e queijo"),
            ("X-Salada", 21.9, "Pão, hambúrguer, queijo, alface e tomate"),
            ("X-Bacon", 24.9, "Pão, hambúrguer, queijo e bacon"),
            ("X-Tudo", 29.9, "O completo da casa"),
        ],
    ),
    (
        "PZZ",
        &[
            ("Pizza Margherita", 45.0, "Molho, muçarela e manjericão"),
            ("Pizza Calabresa", 47.0, "Calabresa e cebola"),
            ("Pizza Quatro Queijos", 52.0, "Muçarela, provolone, parmesão e gorgonzola"),
        ],
    ),
    (
        "BEB",
        &[
            ("Coca-Cola Lata 350ml", 6.0, ""),
            ("Coca-Cola Zero Lata 350ml", 6.0, ""),
            ("Guaraná Antarctica 2L", 12.0, ""),
            ("Suco de Laranja 500ml", 9.5, "Natural"),
            ("Água Mineral 500ml", 4.0, "Sem gás"),
        ],
    ),
    (
        "SOB",
        &[
            ("Pudim", 9.0, "Fatia"),
            ("Petit Gâteau", 16.5, "Com sorvete de creme"),
            ("Açaí 500ml", 19.0, "Com granola e banana"),
        ],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut file = String::from("./data/products.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Digital Menu Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>  Products file (default: ./data/products.json)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Digital Menu Seed Data Generator");
    println!("===================================");
    println!("File: {}", file);
    println!();

    let catalog = Catalog::open(CatalogConfig::new(&file)).await?;
    let products = catalog.products();

    println!("✓ Opened catalog");

    // Check existing products
    let existing = products.count().await?;
    if existing > 0 {
        println!("⚠ Catalog already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the products file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let mut generated = 0;
    for (prefix, items) in SECTIONS {
        for (idx, (name, price, description)) in items.iter().enumerate() {
            let new = NewProduct {
                name: name.to_string(),
                price: *price,
                sku: format!("{}-{:02}", prefix, idx + 1),
                description: description.to_string(),
            };

            match products.insert(new).await {
                Ok(product) => {
                    generated += 1;
                    println!("  #{:<3} {:<32} {:>8.2}", product.id, product.name, product.price);
                }
                Err(e) => eprintln!("Failed to insert {}: {}", name, e),
            }
        }
    }

    println!();
    println!("✓ Generated {} products", generated);

    // Verify search
    println!();
    println!("Verifying search...");
    let results = products.list_or_search(Some("coca")).await?;
    println!("  Search 'coca': {} results", results.len());
    let results = products.list_or_search(Some("1")).await?;
    println!("  Search '1': {} results", results.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
