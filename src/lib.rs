#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod domain;
pub mod store;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::{CART_STORAGE_KEY, FAVORITES_STORAGE_KEY};
pub use domain::{Product, ProductCategory, parse_price};
pub use store::{CartItem, CartStore, FavoriteItem, StorageBackend};
pub use ui::AtelierApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Wipe the persisted cart and favorites before the app starts
    #[arg(long, default_value_t = false)]
    pub reset: bool,

    /// Override the key-value storage file location (native builds only)
    #[arg(long)]
    pub storage_path: Option<std::path::PathBuf>,
}

/// Main application entry point - creates the GUI app.
/// This is the public API for both the native binary and the WASM start fn.
pub fn run_app(cc: &eframe::CreationContext, args: Cli) -> Box<dyn eframe::App> {
    let backend = store::default_backend(args.storage_path.as_deref());

    // 1. Build the store (the only stateful core): load-at-construction
    let mut cart_store = store::CartStore::load(backend);
    if args.reset {
        cart_store.clear_all();
        log::info!("🧹 Persisted cart and favorites wiped (--reset)");
    }

    let app = ui::AtelierApp::new(cc, cart_store);
    Box::new(app)
}
