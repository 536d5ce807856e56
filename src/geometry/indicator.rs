//! The angle indicator: radius line, arc, θ label and marker dot

use nalgebra::Point2;

use super::trig::circle_point;

/// Radius of the marker dot on the circle
pub const MARKER_RADIUS: f32 = 0.05;

/// How far out the label sits, relative to the arc's midpoint
const LABEL_OFFSET: f32 = 1.5;

/// Everything needed to draw θ itself for one frame
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AngleIndicator {
    /// Radius line from the origin to the circle point
    pub radius_start: Point2<f32>,
    pub radius_end: Point2<f32>,
    /// Arc centered at the origin, sweeping from angle 0 to `arc_sweep`
    pub arc_radius: f32,
    pub arc_sweep: f32,
    /// Center of the θ label
    pub label_position: Point2<f32>,
    pub label_height: f32,
    /// Marker dot at the circle point
    pub marker: Point2<f32>,
    pub marker_radius: f32,
}

impl AngleIndicator {
    /// Point at `proportion` (0..=1) along the arc
    pub fn arc_point(&self, proportion: f32) -> Point2<f32> {
        circle_point(proportion * self.arc_sweep, self.arc_radius)
    }
}

/// Build the indicator for θ
pub fn angle_indicator(
    theta: f32,
    unit_length: f32,
    arc_radius: f32,
    label_height: f32,
) -> AngleIndicator {
    let circle = circle_point(theta, unit_length);
    let arc_mid = circle_point(theta / 2.0, arc_radius);

    AngleIndicator {
        radius_start: Point2::origin(),
        radius_end: circle,
        arc_radius,
        arc_sweep: theta,
        label_position: Point2::from(arc_mid.coords * LABEL_OFFSET),
        label_height,
        marker: circle,
        marker_radius: MARKER_RADIUS,
    }
}
