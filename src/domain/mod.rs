// Domain types and value objects
pub mod product;

// Re-export commonly used types
pub use product::{Product, ProductCategory, parse_price};
