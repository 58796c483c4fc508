//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; they are only consulted from
//! `debug_assertions` builds so release builds stay quiet.

pub struct DebugFlags {
    /// Emit a log line for every store mutation (add-to-cart, favorite toggle).
    pub print_store_events: bool,
    /// Emit UI interaction logs (menu toggle, slider buttons).
    pub print_ui_interactions: bool,
    /// Emit a log line on clean shutdown.
    pub print_shutdown: bool,
}

pub static DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_store_events: true,
    print_ui_interactions: false,
    print_shutdown: true,
};
