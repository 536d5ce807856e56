//! Shape trait definition
//!
//! The `Shape` trait is the parametric view of a stroked primitive.
//! Both renderers turn shapes into polylines by sampling them, so a new
//! primitive only has to say where it is at each `t`.

use nalgebra::Point2;

/// A parametric outline in world units
///
/// `sample(t)` maps `t` in [0, 1] onto the outline:
///
/// - `t = 0.0` → Start of the shape
/// - `t = 1.0` → End (same as the start for closed shapes)
///
/// World units are the scene's own coordinates: the origin is the center
/// of the circle and y points up.
pub trait Shape {
    /// Sample the shape at parameter t
    fn sample(&self, t: f32) -> Point2<f32>;

    /// Get the name of this shape (for logs and the UI)
    fn name(&self) -> &str;

    /// Approximate length of the outline
    ///
    /// Renderers use this to decide how many samples a shape needs.
    fn length(&self) -> f32;

    /// Whether this shape is closed (end connects to start)
    fn is_closed(&self) -> bool {
        true
    }
}
