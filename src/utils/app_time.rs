// src/utils/app_time.rs
//
// std::time::Instant panics on wasm32; web-time wraps performance.now()
// with the same API, so toast lifetimes tick identically on both targets.

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Seconds elapsed since `since`, as f64 for animation math.
pub fn secs_since(since: AppInstant) -> f64 {
    now().duration_since(since).as_secs_f64()
}
