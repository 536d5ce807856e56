//! Coordinate axes with tick marks at every unit

use nalgebra::Point2;

use super::drawable::Drawable;
use super::primitives::Line;
use crate::color::Rgb;

/// An x and a y axis crossing at the origin
///
/// Ranges are in world units; ticks are placed at every multiple of
/// `unit_size` within the range, skipping the origin.
#[derive(Clone, Debug)]
pub struct Axes {
    pub unit_size: f32,
    pub x_range: (f32, f32),
    pub y_range: (f32, f32),
    pub tick_size: f32,
}

impl Axes {
    pub fn new(unit_size: f32) -> Self {
        Self {
            unit_size,
            x_range: (-7.0, 7.0),
            y_range: (-4.0, 4.0),
            tick_size: 0.1,
        }
    }

    pub fn with_ranges(mut self, x_range: (f32, f32), y_range: (f32, f32)) -> Self {
        self.x_range = x_range;
        self.y_range = y_range;
        self
    }

    /// World positions of the ticks along one axis range
    fn tick_positions(&self, (min, max): (f32, f32)) -> Vec<f32> {
        if self.unit_size <= 0.0 {
            return Vec::new();
        }
        let first = (min / self.unit_size).ceil() as i32;
        let last = (max / self.unit_size).floor() as i32;
        (first..=last)
            .filter(|&i| i != 0)
            .map(|i| i as f32 * self.unit_size)
            .collect()
    }

    /// Build the axes as a single drawable group
    pub fn to_drawable(&self, color: Rgb) -> Drawable {
        let half_tick = self.tick_size / 2.0;
        let mut lines = vec![
            Line::horizontal(0.0, self.x_range.0, self.x_range.1),
            Line::vertical(0.0, self.y_range.0, self.y_range.1),
        ];

        for x in self.tick_positions(self.x_range) {
            lines.push(Line::new(Point2::new(x, -half_tick), Point2::new(x, half_tick)));
        }
        for y in self.tick_positions(self.y_range) {
            lines.push(Line::new(Point2::new(-half_tick, y), Point2::new(half_tick, y)));
        }

        Drawable::group(lines.into_iter().map(|line| Drawable::line(line, color)))
    }
}
