//! Configuration module for the storefront application.

mod debug; // Private; use the re-export below (crate::config::DEBUG_FLAGS)
pub use debug::DEBUG_FLAGS;

pub mod catalog;
pub mod persistence;
pub mod promo;

// Re-export commonly used items
pub use catalog::CATALOG;
pub use persistence::{APP_STATE_PATH, CART_STORAGE_KEY, FAVORITES_STORAGE_KEY, STORE_FILE_PATH};
pub use promo::{
    DROP_COUNTDOWN_OFFSET_SECS, NAV_COLLAPSE_WIDTH, NAV_SCROLLED_THRESHOLD, SLIDER_SCROLL_STEP,
    TOAST_LIFETIME_SECS,
};
