//! Rate functions - how run progress maps onto the interpolation fraction

use serde::{Deserialize, Serialize};

/// Steepness of the `Smooth` curve around its midpoint
const SMOOTH_INFLECTION: f32 = 10.0;

/// Linear interpolation between `start` and `end`
///
/// `alpha = 0` gives `start`, `alpha = 1` gives `end`.
pub fn interpolate(start: f32, end: f32, alpha: f32) -> f32 {
    start + alpha * (end - start)
}

/// Shape of the progress → alpha curve
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum RateFunc {
    /// Constant angular speed
    #[default]
    Linear,
    /// Sigmoid ease-in/ease-out
    Smooth,
}

impl RateFunc {
    pub fn all() -> &'static [RateFunc] {
        &[RateFunc::Linear, RateFunc::Smooth]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RateFunc::Linear => "Linear",
            RateFunc::Smooth => "Smooth",
        }
    }

    /// Map progress in [0, 1] to alpha in [0, 1]
    pub fn apply(&self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            RateFunc::Linear => t,
            RateFunc::Smooth => {
                let error = sigmoid(-SMOOTH_INFLECTION / 2.0);
                let value = (sigmoid(SMOOTH_INFLECTION * (t - 0.5)) - error) / (1.0 - 2.0 * error);
                value.clamp(0.0, 1.0)
            }
        }
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::circle_point;
    use std::f32::consts::TAU;

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate(0.0, TAU, 0.0), 0.0);
        assert!((interpolate(0.0, TAU, 1.0) - TAU).abs() < 0.0001);
        assert!((interpolate(1.0, 3.0, 0.25) - 1.5).abs() < 0.0001);
    }

    #[test]
    fn test_full_sweep_returns_to_start() {
        let start = circle_point(interpolate(0.0, TAU, 0.0), 1.5);
        let end = circle_point(interpolate(0.0, TAU, 1.0), 1.5);
        assert!((start - end).norm() < 0.001);
    }

    #[test]
    fn test_linear_is_identity() {
        for p in [0.0, 0.3, 0.75, 1.0] {
            assert_eq!(RateFunc::Linear.apply(p), p);
        }
    }

    #[test]
    fn test_smooth_fixed_points() {
        assert!(RateFunc::Smooth.apply(0.0).abs() < 0.0001);
        assert!((RateFunc::Smooth.apply(0.5) - 0.5).abs() < 0.0001);
        assert!((RateFunc::Smooth.apply(1.0) - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_smooth_is_monotonic() {
        let values: Vec<f32> = (0..=20).map(|i| RateFunc::Smooth.apply(i as f32 / 20.0)).collect();
        assert!(values.windows(2).all(|w| w[1] >= w[0]));
        // Slow start
        assert!(values[1] < 0.05);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(RateFunc::Linear.apply(-1.0), 0.0);
        assert_eq!(RateFunc::Linear.apply(2.0), 1.0);
        assert!((RateFunc::Smooth.apply(5.0) - 1.0).abs() < 0.0001);
    }
}
