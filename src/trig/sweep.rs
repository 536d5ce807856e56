//! The θ sweep animation

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use super::config::TrigConfig;
use super::scene::{theta_group, trig_lines};
use crate::animation::{interpolate, Animation};
use crate::geometry::TrigFunction;
use crate::shapes::{DrawableId, Scene};

/// Start and end angle of a sweep, in radians
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct SweepRange {
    pub start: f32,
    pub end: f32,
}

impl SweepRange {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// 0 to 2π
    pub fn full_turn() -> Self {
        Self::new(0.0, TAU)
    }

    /// θ at interpolation fraction `alpha`
    pub fn theta_at(&self, alpha: f32) -> f32 {
        interpolate(self.start, self.end, alpha)
    }
}

impl Default for SweepRange {
    fn default() -> Self {
        Self::full_turn()
    }
}

/// Owns θ for a run and redraws the θ group and trig lines from it
pub struct ThetaSweep {
    config: TrigConfig,
    range: SweepRange,
    functions: Vec<TrigFunction>,
    theta_group: DrawableId,
    trig_lines: DrawableId,
    theta: f32,
}

impl ThetaSweep {
    pub fn new(
        config: TrigConfig,
        range: SweepRange,
        functions: Vec<TrigFunction>,
        theta_group: DrawableId,
        trig_lines: DrawableId,
    ) -> Self {
        Self {
            config,
            range,
            functions,
            theta_group,
            trig_lines,
            theta: range.start,
        }
    }

    /// θ as of the last frame
    pub fn theta(&self) -> f32 {
        self.theta
    }
}

impl Animation for ThetaSweep {
    fn interpolate(&mut self, scene: &mut Scene, alpha: f32) {
        self.theta = self.range.theta_at(alpha);

        let group = theta_group(&self.config, self.theta);
        if !scene.become_drawable(self.theta_group, group) {
            log::warn!("θ group is no longer in the scene");
        }

        let lines = trig_lines(&self.config, &self.functions, self.theta);
        if !scene.become_drawable(self.trig_lines, lines) {
            log::warn!("Trig lines are no longer in the scene");
        }
    }

    fn name(&self) -> &str {
        "theta sweep"
    }
}
