//! Trig function segments
//!
//! Every trig function of θ is the length of a line segment built from the
//! point on the circle, the origin and the two axes:
//!
//! ```text
//! sin  circle point -> its projection on the x-axis
//! cos  circle point -> its projection on the y-axis
//! tan  circle point -> where the tangent line meets the x-axis
//! sec  origin       -> that same x-axis intercept
//! cot  circle point -> where the tangent line meets the y-axis
//! csc  origin       -> that same y-axis intercept
//! ```
//!
//! The intercepts are `unit / cos θ` and `unit / sin θ`. They blow up at
//! θ = π/2 + kπ and θ = kπ. No clamping happens here: the segment
//! simply gets a huge or non-finite endpoint for that frame and the
//! renderer clips it.

use std::fmt;
use std::str::FromStr;

use nalgebra::{Point2, Rotation2};
use serde::{Deserialize, Serialize};

use super::error::GeometryError;
use crate::color::{self, Rgb};

/// The six functions drawn by the animation
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
}

/// Which axis a function's segment ends on
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Anchor {
    X,
    Y,
}

impl TrigFunction {
    /// All functions, in drawing order
    pub fn all() -> &'static [TrigFunction] {
        &[
            TrigFunction::Sin,
            TrigFunction::Cos,
            TrigFunction::Tan,
            TrigFunction::Sec,
            TrigFunction::Csc,
            TrigFunction::Cot,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TrigFunction::Sin => "sin",
            TrigFunction::Cos => "cos",
            TrigFunction::Tan => "tan",
            TrigFunction::Cot => "cot",
            TrigFunction::Sec => "sec",
            TrigFunction::Csc => "csc",
        }
    }

    /// sin, tan and sec end on the x-axis; the co-functions on the y-axis
    pub fn anchor(&self) -> Anchor {
        match self {
            TrigFunction::Sin | TrigFunction::Tan | TrigFunction::Sec => Anchor::X,
            TrigFunction::Cos | TrigFunction::Cot | TrigFunction::Csc => Anchor::Y,
        }
    }

    /// Whether the segment starts at the circle point (otherwise at the origin)
    pub fn starts_on_circle(&self) -> bool {
        !matches!(self, TrigFunction::Sec | TrigFunction::Csc)
    }

    /// Numeric value of the function at θ
    pub fn value(&self, theta: f32) -> f32 {
        match self {
            TrigFunction::Sin => theta.sin(),
            TrigFunction::Cos => theta.cos(),
            TrigFunction::Tan => theta.tan(),
            TrigFunction::Cot => 1.0 / theta.tan(),
            TrigFunction::Sec => 1.0 / theta.cos(),
            TrigFunction::Csc => 1.0 / theta.sin(),
        }
    }
}

impl FromStr for TrigFunction {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sin" => Ok(TrigFunction::Sin),
            "cos" => Ok(TrigFunction::Cos),
            "tan" => Ok(TrigFunction::Tan),
            "cot" => Ok(TrigFunction::Cot),
            "sec" => Ok(TrigFunction::Sec),
            "csc" => Ok(TrigFunction::Csc),
            other => Err(GeometryError::InvalidArgument(other.to_string())),
        }
    }
}

impl fmt::Display for TrigFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Default segment colors, one per anchor axis
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct LinePalette {
    pub x_line: Rgb,
    pub y_line: Rgb,
}

impl Default for LinePalette {
    fn default() -> Self {
        Self {
            x_line: color::MAROON_B,
            y_line: color::BLUE,
        }
    }
}

impl LinePalette {
    pub fn color_for(&self, function: TrigFunction) -> Rgb {
        match function.anchor() {
            Anchor::X => self.x_line,
            Anchor::Y => self.y_line,
        }
    }
}

/// One function's segment for a single frame
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment {
    pub function: TrigFunction,
    pub start: Point2<f32>,
    pub end: Point2<f32>,
    pub color: Rgb,
}

impl Segment {
    pub fn length(&self) -> f32 {
        nalgebra::distance(&self.start, &self.end)
    }

    /// False when θ sits on (or numerically at) a singularity of the function
    pub fn is_finite(&self) -> bool {
        self.start.iter().chain(self.end.iter()).all(|c| c.is_finite())
    }
}

/// Point at angle θ on the circle of radius `unit_length`
pub fn circle_point(theta: f32, unit_length: f32) -> Point2<f32> {
    Rotation2::new(theta) * Point2::new(unit_length, 0.0)
}

/// Segment for `function` at θ, colored with the default palette
pub fn trig_segment(function: TrigFunction, theta: f32, unit_length: f32) -> Segment {
    trig_segment_colored(function, theta, unit_length, None, &LinePalette::default())
}

/// Segment for `function` at θ with an optional color override
pub fn trig_segment_colored(
    function: TrigFunction,
    theta: f32,
    unit_length: f32,
    color: Option<Rgb>,
    palette: &LinePalette,
) -> Segment {
    let start = if function.starts_on_circle() {
        circle_point(theta, unit_length)
    } else {
        Point2::origin()
    };

    let end = match function {
        TrigFunction::Sin => Point2::new(start.x, 0.0),
        TrigFunction::Cos => Point2::new(0.0, start.y),
        TrigFunction::Tan | TrigFunction::Sec => Point2::new(unit_length / theta.cos(), 0.0),
        TrigFunction::Cot | TrigFunction::Csc => Point2::new(0.0, unit_length / theta.sin()),
    };

    Segment {
        function,
        start,
        end,
        color: color.unwrap_or_else(|| palette.color_for(function)),
    }
}

/// Segment for a function given by name ("sin", "cos", ...)
pub fn trig_segment_by_name(
    name: &str,
    theta: f32,
    unit_length: f32,
) -> Result<Segment, GeometryError> {
    let function: TrigFunction = name.parse()?;
    Ok(trig_segment(function, theta, unit_length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI, TAU};

    const R: f32 = 1.5;

    fn sample_angles() -> Vec<f32> {
        // Avoid exact multiples of π/2 so every function is finite
        (0..24).map(|i| 0.1 + i as f32 * TAU / 24.0).collect()
    }

    #[test]
    fn test_circle_point_on_circle() {
        for theta in sample_angles() {
            let p = circle_point(theta, R);
            let dist = (p.x * p.x + p.y * p.y).sqrt();
            assert!((dist - R).abs() < 0.001, "θ = {theta}: |p| = {dist}");
        }
    }

    #[test]
    fn test_circle_point_quarter_turn() {
        let p = circle_point(FRAC_PI_2, R);
        assert!(p.x.abs() < 0.001);
        assert!((p.y - R).abs() < 0.001);
    }

    #[test]
    fn test_sin_projects_onto_x_axis() {
        for theta in sample_angles() {
            let seg = trig_segment(TrigFunction::Sin, theta, R);
            assert_eq!(seg.end.y, 0.0);
            assert_eq!(seg.end.x, seg.start.x);
            assert!((seg.length() - (R * theta.sin()).abs()).abs() < 0.001);
        }
    }

    #[test]
    fn test_cos_projects_onto_y_axis() {
        for theta in sample_angles() {
            let seg = trig_segment(TrigFunction::Cos, theta, R);
            assert_eq!(seg.end.x, 0.0);
            assert_eq!(seg.end.y, seg.start.y);
            assert!((seg.length() - (R * theta.cos()).abs()).abs() < 0.001);
        }
    }

    #[test]
    fn test_tan_and_sec_share_endpoint() {
        for theta in sample_angles() {
            let tan = trig_segment(TrigFunction::Tan, theta, R);
            let sec = trig_segment(TrigFunction::Sec, theta, R);
            assert_eq!(tan.end, sec.end);
            assert!((tan.end.x - R / theta.cos()).abs() < 0.001);
            assert_eq!(tan.end.y, 0.0);
            assert_eq!(sec.start, Point2::origin());
        }
    }

    #[test]
    fn test_cot_and_csc_share_endpoint() {
        for theta in sample_angles() {
            let cot = trig_segment(TrigFunction::Cot, theta, R);
            let csc = trig_segment(TrigFunction::Csc, theta, R);
            assert_eq!(cot.end, csc.end);
            assert_eq!(cot.end.x, 0.0);
            assert!((cot.end.y - R / theta.sin()).abs() < 0.001);
            assert_eq!(csc.start, Point2::origin());
        }
    }

    #[test]
    fn test_segment_lengths_match_function_values() {
        let theta = FRAC_PI_3;
        for &function in TrigFunction::all() {
            let seg = trig_segment(function, theta, R);
            let expected = (R * function.value(theta)).abs();
            assert!(
                (seg.length() - expected).abs() < 0.001,
                "{function}: {} vs {expected}",
                seg.length()
            );
        }
    }

    #[test]
    fn test_unknown_name_is_invalid_argument() {
        for theta in [0.0, 1.0, PI] {
            for r in [0.5, R] {
                let err = trig_segment_by_name("xyz", theta, r).unwrap_err();
                assert_eq!(err, GeometryError::InvalidArgument("xyz".to_string()));
            }
        }
        assert!(trig_segment_by_name("Sin", 0.0, R).is_err());
        assert!(trig_segment_by_name("", 0.0, R).is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for &function in TrigFunction::all() {
            assert_eq!(function.name().parse::<TrigFunction>(), Ok(function));
            assert_eq!(function.to_string(), function.name());
        }
    }

    #[test]
    fn test_theta_zero() {
        let sin = trig_segment(TrigFunction::Sin, 0.0, R);
        assert!((sin.end.x - R).abs() < 0.001);
        assert!(sin.length() < 0.001);

        let cos = trig_segment(TrigFunction::Cos, 0.0, R);
        assert_eq!(cos.end, Point2::new(0.0, 0.0));
        assert!((cos.length() - R).abs() < 0.001);

        for function in [TrigFunction::Tan, TrigFunction::Sec] {
            let seg = trig_segment(function, 0.0, R);
            assert!((seg.end.x - R).abs() < 0.001);
            assert_eq!(seg.end.y, 0.0);
        }

        // cot and csc are singular at θ = 0
        let csc = trig_segment(TrigFunction::Csc, 0.0, R);
        assert!(!csc.is_finite());
    }

    #[test]
    fn test_theta_quarter_turn() {
        let cos = trig_segment(TrigFunction::Cos, FRAC_PI_2, R);
        assert!((cos.end.y - R).abs() < 0.001);
        assert!(cos.length() < 0.001);

        let sin = trig_segment(TrigFunction::Sin, FRAC_PI_2, R);
        assert!(sin.end.x.abs() < 0.001);
        assert!((sin.length() - R).abs() < 0.001);

        for function in [TrigFunction::Cot, TrigFunction::Csc] {
            let seg = trig_segment(function, FRAC_PI_2, R);
            assert_eq!(seg.end.x, 0.0);
            assert!((seg.end.y - R).abs() < 0.001);
        }

        // tan and sec diverge: either non-finite or far off screen
        for function in [TrigFunction::Tan, TrigFunction::Sec] {
            let seg = trig_segment(function, FRAC_PI_2, R);
            assert!(!seg.end.x.is_finite() || seg.end.x.abs() > 1.0e6);
        }
    }

    #[test]
    fn test_segment_is_pure() {
        for &function in TrigFunction::all() {
            let a = trig_segment(function, 2.3, R);
            let b = trig_segment(function, 2.3, R);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_default_colors_follow_anchor() {
        let palette = LinePalette::default();
        for &function in TrigFunction::all() {
            let seg = trig_segment(function, 1.0, R);
            let expected = match function.anchor() {
                Anchor::X => palette.x_line,
                Anchor::Y => palette.y_line,
            };
            assert_eq!(seg.color, expected);
        }
    }

    #[test]
    fn test_color_override() {
        let seg = trig_segment_colored(
            TrigFunction::Sin,
            1.0,
            R,
            Some(color::YELLOW),
            &LinePalette::default(),
        );
        assert_eq!(seg.color, color::YELLOW);
        assert_eq!(trig_segment(TrigFunction::Sin, 1.0, R).color, color::MAROON_B);
    }
}
