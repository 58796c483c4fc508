//! Durable-storage keys and file locations.

/// Storage key for the serialized cart collection.
/// The value is a UTF-8 JSON array of cart entries.
pub const CART_STORAGE_KEY: &str = "cart";

/// Storage key for the serialized favorites collection.
pub const FAVORITES_STORAGE_KEY: &str = "favorites";

/// Native stand-in for the browser's localStorage: a single JSON file
/// holding the whole key-value map.
pub const STORE_FILE_PATH: &str = "atelier_store.json";

// App state persistence
/// Path for saving/loading egui window/UI state on native builds.
pub const APP_STATE_PATH: &str = ".states.json";
