//! Primitive shapes - Circle, Line, Arc, Dot
//!
//! These are the building blocks every frame of the animation is made of.

use std::f32::consts::TAU;

use nalgebra::{Point2, Vector2};

use super::traits::Shape;

/// A circle centered at `center` with given radius
///
/// ## Parametric Equation
/// ```text
/// x = cx + radius * cos(t * 2π)
/// y = cy + radius * sin(t * 2π)
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point2<f32>,
    pub radius: f32,
}

impl Circle {
    /// Create a new circle at the origin with given radius
    pub fn new(radius: f32) -> Self {
        Self {
            center: Point2::origin(),
            radius,
        }
    }

    /// Create a circle at a specific position
    pub fn at(center: Point2<f32>, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Shape for Circle {
    fn sample(&self, t: f32) -> Point2<f32> {
        let angle = t * TAU;
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    fn name(&self) -> &str {
        "Circle"
    }

    fn length(&self) -> f32 {
        TAU * self.radius
    }
}

/// A line segment from `start` to `end`
///
/// ## Parametric Equation
/// ```text
/// p = start + t * (end - start)
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub start: Point2<f32>,
    pub end: Point2<f32>,
}

impl Line {
    pub fn new(start: Point2<f32>, end: Point2<f32>) -> Self {
        Self { start, end }
    }

    /// Create a horizontal line at y position
    pub fn horizontal(y: f32, x_start: f32, x_end: f32) -> Self {
        Self::new(Point2::new(x_start, y), Point2::new(x_end, y))
    }

    /// Create a vertical line at x position
    pub fn vertical(x: f32, y_start: f32, y_end: f32) -> Self {
        Self::new(Point2::new(x, y_start), Point2::new(x, y_end))
    }
}

impl Shape for Line {
    fn sample(&self, t: f32) -> Point2<f32> {
        self.start + (self.end - self.start) * t
    }

    fn name(&self) -> &str {
        "Line"
    }

    fn length(&self) -> f32 {
        nalgebra::distance(&self.start, &self.end)
    }

    fn is_closed(&self) -> bool {
        false
    }
}

/// A circular arc around `center`, starting at `start_angle` and turning
/// counter-clockwise by `sweep` radians (clockwise when negative)
#[derive(Clone, Debug, PartialEq)]
pub struct Arc {
    pub center: Point2<f32>,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep: f32,
}

impl Arc {
    /// Arc at the origin starting on the positive x-axis
    pub fn new(sweep: f32, radius: f32) -> Self {
        Self {
            center: Point2::origin(),
            radius,
            start_angle: 0.0,
            sweep,
        }
    }
}

impl Shape for Arc {
    fn sample(&self, t: f32) -> Point2<f32> {
        let angle = self.start_angle + t * self.sweep;
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    fn name(&self) -> &str {
        "Arc"
    }

    fn length(&self) -> f32 {
        (self.sweep * self.radius).abs()
    }

    fn is_closed(&self) -> bool {
        self.sweep.abs() >= TAU
    }
}

/// A small filled disc used as a point marker
#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    pub center: Point2<f32>,
    pub radius: f32,
}

impl Dot {
    pub fn new(center: Point2<f32>, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Shape for Dot {
    fn sample(&self, t: f32) -> Point2<f32> {
        Circle::at(self.center, self.radius).sample(t)
    }

    fn name(&self) -> &str {
        "Dot"
    }

    fn length(&self) -> f32 {
        TAU * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_circle() {
        let circle = Circle::new(0.5);

        // At t=0, should be at (0.5, 0) - rightmost point
        let p = circle.sample(0.0);
        assert!((p.x - 0.5).abs() < 0.001);
        assert!(p.y.abs() < 0.001);

        // At t=0.25, should be at (0, 0.5) - top
        let p = circle.sample(0.25);
        assert!(p.x.abs() < 0.001);
        assert!((p.y - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_line() {
        let line = Line::horizontal(0.0, -1.0, 1.0);

        let p = line.sample(0.0);
        assert!((p.x - (-1.0)).abs() < 0.001);
        assert!(p.y.abs() < 0.001);

        // At t=0.5, should be at midpoint
        let p = line.sample(0.5);
        assert!(p.x.abs() < 0.001);
        assert!(p.y.abs() < 0.001);

        assert!((line.length() - 2.0).abs() < 0.001);
        assert!(!line.is_closed());
    }

    #[test]
    fn test_arc_endpoints() {
        let arc = Arc::new(FRAC_PI_2, 0.5);

        let start = arc.sample(0.0);
        assert!((start.x - 0.5).abs() < 0.001);
        assert!(start.y.abs() < 0.001);

        let end = arc.sample(1.0);
        assert!(end.x.abs() < 0.001);
        assert!((end.y - 0.5).abs() < 0.001);

        assert!((arc.length() - 0.25 * PI).abs() < 0.001);
        assert!(!arc.is_closed());
    }

    #[test]
    fn test_arc_midpoint() {
        let arc = Arc::new(PI, 1.0);
        let mid = arc.sample(0.5);
        assert!(mid.x.abs() < 0.001);
        assert!((mid.y - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_dot_outline() {
        let dot = Dot::new(Point2::new(1.0, 1.0), 0.05);
        let p = dot.sample(0.5);
        assert!((p.x - 0.95).abs() < 0.001);
        assert!((p.y - 1.0).abs() < 0.001);
    }
}
