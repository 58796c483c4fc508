// User interface components
pub mod app;
pub mod config;
pub mod countdown;
pub mod motion;
pub mod styles;
pub mod toasts;
pub mod ui_panels;
pub mod viewer;

// Re-export main app
pub use app::AtelierApp;
pub use config::{UI_CONFIG, UI_TEXT};
