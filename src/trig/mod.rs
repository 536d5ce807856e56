//! Trig scene - the unit circle animation itself
//!
//! This module provides:
//! - `TrigConfig` with the scene's fixed constants
//! - Builders that turn geometry into drawables (axes, circle, θ group,
//!   trig lines)
//! - `ThetaSweep`, the animation that owns θ and rebuilds the geometry
//!   every frame

mod config;
mod scene;
mod sweep;

pub use config::TrigConfig;
pub use scene::{theta_group, trig_line, trig_lines, TrigScene};
pub use sweep::{SweepRange, ThetaSweep};
