//! Animation module - drives per-frame updates of the scene
//!
//! This module provides:
//! - `Animation` trait for anything updated from an interpolation fraction
//! - `RateFunc` for mapping run progress onto that fraction
//! - `AnimationDriver`, which owns the run clock and calls every animation
//!   once per frame

mod driver;
mod rate;
mod traits;

pub use driver::{AnimationDriver, DriverState, DEFAULT_RUN_TIME};
pub use rate::{interpolate, RateFunc};
pub use traits::Animation;
