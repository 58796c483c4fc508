//! Promo, layout and feedback timing knobs.

/// How long a toast stays fully visible before it fades out, in seconds.
pub const TOAST_LIFETIME_SECS: f64 = 2.5;

/// Toast fade in/out duration, in seconds.
pub const TOAST_FADE_SECS: f64 = 0.3;

/// "The Drop" countdown deadline, measured from app launch:
/// 12 days, 18 hours, 45 minutes, 32 seconds.
pub const DROP_COUNTDOWN_OFFSET_SECS: i64 = 12 * 24 * 60 * 60 + 18 * 60 * 60 + 45 * 60 + 32;

/// How far one press of the slider prev/next buttons shifts the strip, in points.
pub const SLIDER_SCROLL_STEP: f32 = 300.0;

/// Viewport widths at or below this collapse the nav links behind the hamburger.
pub const NAV_COLLAPSE_WIDTH: f32 = 768.0;

/// Scroll offset past which the nav bar switches to its opaque "scrolled" style.
pub const NAV_SCROLLED_THRESHOLD: f32 = 50.0;
