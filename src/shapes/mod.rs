//! Shapes module - everything that can be put in a scene
//!
//! This module provides:
//! - `Shape` trait for parametric outlines
//! - Primitive shapes: Circle, Line, Arc, Dot
//! - `Drawable` (colored primitives, labels and groups) and `Axes`
//! - `Scene` with stable handles and the `become_drawable` swap
//! - Glyph outlines for labels in exported frames

mod axes;
mod drawable;
mod glyph;
mod primitives;
mod scene;
mod traits;

pub use axes::Axes;
pub use drawable::{Drawable, Label};
pub use glyph::{label_outline, theta_outline, GlyphFont, GlyphOutline, TextError};
pub use primitives::{Arc, Circle, Dot, Line};
pub use scene::{DrawableId, Scene, SceneEntry};
pub use traits::Shape;

use nalgebra::Point2;

/// Sample a shape into a polyline
///
/// Returns `num_samples + 1` points from t = 0 to t = 1 inclusive, so open
/// shapes keep both endpoints and closed shapes end where they started.
pub fn shape_to_points(shape: &dyn Shape, num_samples: usize) -> Vec<Point2<f32>> {
    let num_samples = num_samples.max(1);
    (0..=num_samples)
        .map(|i| shape.sample(i as f32 / num_samples as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_keeps_endpoints() {
        let line = Line::horizontal(0.0, -1.0, 1.0);
        let points = shape_to_points(&line, 4);
        assert_eq!(points.len(), 5);
        assert!((points[0].x + 1.0).abs() < 0.001);
        assert!((points[4].x - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_circle_closes() {
        let points = shape_to_points(&Circle::new(1.0), 16);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first - last).norm() < 0.001);
    }

    #[test]
    fn test_zero_samples_still_has_endpoints() {
        let points = shape_to_points(&Line::vertical(0.0, 0.0, 1.0), 0);
        assert_eq!(points.len(), 2);
    }
}
