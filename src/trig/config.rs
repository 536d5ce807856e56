use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::color::{self, Rgb};
use crate::geometry::LinePalette;

/// Fixed constants of the scene
///
/// Geometry depends only on these values and θ.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrigConfig {
    /// World units per unit of the circle (the circle's radius)
    pub unit_length: f32,
    /// Radius of the small arc marking θ
    pub arc_radius: f32,
    pub axes_color: Rgb,
    /// Radius line and marker dot
    pub radius_color: Rgb,
    pub circle_color: Rgb,
    pub theta_color: Rgb,
    /// Height of the θ label in world units
    pub theta_height: f32,
    /// θ shown before any animation runs
    pub theta_value: f32,
    pub lines: LinePalette,
}

impl Default for TrigConfig {
    fn default() -> Self {
        Self {
            unit_length: 1.5,
            arc_radius: 0.5,
            axes_color: color::WHITE,
            radius_color: color::WHITE,
            circle_color: color::RED,
            theta_color: color::YELLOW,
            theta_height: 0.3,
            theta_value: PI / 5.0,
            lines: LinePalette::default(),
        }
    }
}
