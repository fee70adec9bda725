//! # Menu Browser
//!
//! Prints the catalog the way the menu screen loads it.
//!
//! ## Usage
//! ```bash
//! # List everything
//! cargo run -p menu-client --bin menu-browse
//!
//! # Search by name, or by id when the term is all digits
//! cargo run -p menu-client --bin menu-browse -- coca
//! cargo run -p menu-client --bin menu-browse -- 12
//!
//! # Point at another server
//! MENU_API_URL=http://192.168.0.10:3000 cargo run -p menu-client --bin menu-browse
//! ```

use std::env;
use std::sync::Arc;

use menu_client::{ApiClient, ClientConfig, ProductBrowser};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Digital Menu Browser");
        println!();
        println!("Usage: menu-browse [SEARCH TERM]");
        println!();
        println!("Environment:");
        println!("  MENU_API_URL         API base URL (default: http://localhost:3000)");
        println!("  MENU_API_TIMEOUT_MS  Request timeout (default: 8000)");
        return Ok(());
    }
    let term = args.join(" ");

    let config = ClientConfig::from_env()?;
    let client = ApiClient::new(config)?;
    println!("📋 {}", client.base_url());

    let browser = ProductBrowser::new(Arc::new(client));
    browser.search(&term).await;

    let state = browser.snapshot().await;
    if let Some(error) = state.error {
        eprintln!("✗ {}", error);
        std::process::exit(1);
    }

    if state.items.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    for product in &state.items {
        println!(
            "  #{:<4} {:<32} {:>8.2}  {}",
            product.id, product.name, product.price, product.sku
        );
    }
    println!();
    println!("✓ {} products", state.items.len());

    Ok(())
}
