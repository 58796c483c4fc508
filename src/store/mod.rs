// The cart/favorites persistence core
pub mod backend;
pub mod cart;

// Re-export commonly used types
pub use backend::{MemoryStore, StorageBackend, default_backend};
pub use cart::{CartItem, CartStore, FavoriteItem, FavoriteToggle};
