// Cross-platform helpers
pub mod app_time;
pub mod maths_utils;

pub use app_time::{AppInstant, now};
pub use maths_utils::Vec3;
