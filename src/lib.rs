//! trig-circle - Animated unit circle
//!
//! Sweeps an angle θ around a circle and draws the six trigonometric
//! functions as line segments:
//! - sin, tan and sec anchored on the x-axis
//! - cos, cot and csc anchored on the y-axis
//!
//! ## Layers
//! - `geometry`: pure functions of θ (circle point, segments, angle indicator)
//! - `shapes`: drawable primitives and the `Scene` they live in
//! - `animation`: the clock that turns elapsed time into an interpolation fraction
//! - `trig`: builds the scene and the θ sweep from a `TrigConfig`
//! - `render`: egui canvas, off-screen rasterizer and PNG export
//! - `app`, `cli`, `settings`: the window, the command line and the settings file

pub mod animation;
pub mod app;
pub mod cli;
pub mod color;
pub mod error;
pub mod geometry;
pub mod render;
pub mod settings;
pub mod shapes;
pub mod trig;
