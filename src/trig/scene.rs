//! Building the scene from geometry
//!
//! The free functions here are pure: they take the config and θ and return
//! a fresh drawable. `TrigScene` adds the initial drawables to a `Scene`
//! and remembers their handles so a sweep can swap new geometry in.

use super::config::TrigConfig;
use super::sweep::{SweepRange, ThetaSweep};
use crate::animation::{AnimationDriver, RateFunc};
use crate::color::Rgb;
use crate::geometry::{angle_indicator, trig_segment_colored, TrigFunction};
use crate::shapes::{Arc, Axes, Circle, Dot, Drawable, DrawableId, Label, Line, Scene};

/// Text of the angle label
pub const THETA_LABEL: &str = "θ";

/// Radius line, arc, θ label and marker dot for angle `theta`
pub fn theta_group(config: &TrigConfig, theta: f32) -> Drawable {
    let ind = angle_indicator(
        theta,
        config.unit_length,
        config.arc_radius,
        config.theta_height,
    );

    Drawable::group([
        Drawable::line(Line::new(ind.radius_start, ind.radius_end), config.radius_color),
        Drawable::arc(Arc::new(ind.arc_sweep, ind.arc_radius), config.theta_color),
        Drawable::Label(Label::new(
            THETA_LABEL,
            ind.label_position,
            ind.label_height,
            config.theta_color,
        )),
        Drawable::dot(Dot::new(ind.marker, ind.marker_radius), config.radius_color),
    ])
}

/// The segment for one function as a line drawable
pub fn trig_line(
    config: &TrigConfig,
    function: TrigFunction,
    theta: f32,
    color: Option<Rgb>,
) -> Drawable {
    let seg = trig_segment_colored(function, theta, config.unit_length, color, &config.lines);
    Drawable::line(Line::new(seg.start, seg.end), seg.color)
}

/// All requested segments as one group
pub fn trig_lines(config: &TrigConfig, functions: &[TrigFunction], theta: f32) -> Drawable {
    Drawable::group(
        functions
            .iter()
            .map(|&function| trig_line(config, function, theta, None)),
    )
}

/// Handles to the drawables of a set-up trig scene
pub struct TrigScene {
    config: TrigConfig,
    axes: DrawableId,
    circle: DrawableId,
    theta_group: DrawableId,
    trig_lines: Option<DrawableId>,
}

impl TrigScene {
    /// Add axes, circle and the θ group (at `config.theta_value`)
    pub fn setup(scene: &mut Scene, config: TrigConfig) -> Self {
        let axes = scene.add(
            "axes",
            Axes::new(config.unit_length).to_drawable(config.axes_color),
        );
        let circle = scene.add(
            "circle",
            Drawable::circle(Circle::new(config.unit_length), config.circle_color),
        );
        let theta_group = scene.add("theta", theta_group(&config, config.theta_value));

        Self {
            config,
            axes,
            circle,
            theta_group,
            trig_lines: None,
        }
    }

    pub fn axes(&self) -> DrawableId {
        self.axes
    }

    pub fn circle(&self) -> DrawableId {
        self.circle
    }

    pub fn theta_group(&self) -> DrawableId {
        self.theta_group
    }

    pub fn trig_lines(&self) -> Option<DrawableId> {
        self.trig_lines
    }

    /// Add (or replace) the trig line group, drawn at `config.theta_value`
    pub fn add_trig_lines(&mut self, scene: &mut Scene, functions: &[TrigFunction]) -> DrawableId {
        let lines = trig_lines(&self.config, functions, self.config.theta_value);
        match self.trig_lines {
            Some(id) if scene.become_drawable(id, lines.clone()) => id,
            _ => {
                let id = scene.add("trig lines", lines);
                self.trig_lines = Some(id);
                id
            }
        }
    }

    /// Build a driver that sweeps θ over `range` in `run_time` seconds
    ///
    /// Adds the trig lines first if they aren't in the scene yet.
    pub fn animate_theta(
        &mut self,
        scene: &mut Scene,
        range: SweepRange,
        functions: &[TrigFunction],
        run_time: f32,
        rate: RateFunc,
    ) -> AnimationDriver {
        let lines = self.add_trig_lines(scene, functions);
        let sweep = ThetaSweep::new(
            self.config.clone(),
            range,
            functions.to_vec(),
            self.theta_group,
            lines,
        );

        log::info!(
            "Sweeping θ from {:.3} to {:.3} over {:.1}s ({} lines)",
            range.start,
            range.end,
            run_time,
            functions.len()
        );

        let mut driver = AnimationDriver::new(run_time).with_rate(rate);
        driver.add(sweep);
        driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn line_endpoints(drawable: &Drawable) -> Vec<(f32, f32, f32, f32)> {
        drawable
            .leaves()
            .iter()
            .filter_map(|d| match d {
                Drawable::Line { line, .. } => Some((line.start.x, line.start.y, line.end.x, line.end.y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_setup_adds_base_drawables() {
        let mut scene = Scene::new();
        let trig = TrigScene::setup(&mut scene, TrigConfig::default());
        assert_eq!(scene.len(), 3);
        assert!(scene.get(trig.axes()).is_some());
        assert!(scene.get(trig.circle()).is_some());
        assert!(trig.trig_lines().is_none());
    }

    #[test]
    fn test_theta_group_contents() {
        let config = TrigConfig::default();
        let group = theta_group(&config, FRAC_PI_2);
        let leaves = group.leaves();
        assert_eq!(leaves.len(), 4);

        match leaves[2] {
            Drawable::Label(label) => {
                assert_eq!(label.text, THETA_LABEL);
                assert_eq!(label.color, config.theta_color);
            }
            other => panic!("expected label, got {other:?}"),
        }
        match leaves[3] {
            Drawable::Dot { dot, .. } => {
                assert!(dot.center.x.abs() < 0.001);
                assert!((dot.center.y - 1.5).abs() < 0.001);
            }
            other => panic!("expected dot, got {other:?}"),
        }
    }

    #[test]
    fn test_axes_color_leaves_radius_alone() {
        let config = TrigConfig {
            axes_color: crate::color::BLUE,
            ..TrigConfig::default()
        };
        let group = theta_group(&config, 1.0);
        let leaves = group.leaves();
        assert_eq!(leaves[0].color(), Some(crate::color::WHITE));
        assert_eq!(leaves[3].color(), Some(crate::color::WHITE));

        let config = TrigConfig {
            radius_color: crate::color::RED,
            ..TrigConfig::default()
        };
        let group = theta_group(&config, 1.0);
        assert_eq!(group.leaves()[0].color(), Some(crate::color::RED));
        assert_eq!(group.leaves()[3].color(), Some(crate::color::RED));
    }

    #[test]
    fn test_trig_lines_one_per_function() {
        let config = TrigConfig::default();
        let lines = trig_lines(&config, TrigFunction::all(), 1.0);
        assert_eq!(lines.leaves().len(), 6);
    }

    #[test]
    fn test_trig_line_color_override() {
        let config = TrigConfig::default();
        let line = trig_line(&config, TrigFunction::Cos, 1.0, Some(crate::color::WHITE));
        assert_eq!(line.color(), Some(crate::color::WHITE));

        let line = trig_line(&config, TrigFunction::Cos, 1.0, None);
        assert_eq!(line.color(), Some(config.lines.y_line));
    }

    #[test]
    fn test_add_trig_lines_reuses_handle() {
        let mut scene = Scene::new();
        let mut trig = TrigScene::setup(&mut scene, TrigConfig::default());
        let first = trig.add_trig_lines(&mut scene, &[TrigFunction::Sin]);
        let second = trig.add_trig_lines(&mut scene, TrigFunction::all());
        assert_eq!(first, second);
        assert_eq!(scene.len(), 4);
        assert_eq!(scene.get(first).map(|d| d.leaves().len()), Some(6));
    }

    #[test]
    fn test_animate_theta_updates_scene() {
        let mut scene = Scene::new();
        let mut trig = TrigScene::setup(&mut scene, TrigConfig::default());
        let mut driver = trig.animate_theta(
            &mut scene,
            SweepRange::full_turn(),
            &[TrigFunction::Sin],
            4.0,
            RateFunc::Linear,
        );

        // A quarter of the run is a quarter turn
        driver.tick(&mut scene, 1.0);

        let lines = trig.trig_lines().and_then(|id| scene.get(id)).map(line_endpoints);
        let (sx, sy, ex, ey) = lines.unwrap()[0];
        assert!(sx.abs() < 0.001);
        assert!((sy - 1.5).abs() < 0.001);
        assert!(ex.abs() < 0.001);
        assert_eq!(ey, 0.0);
    }
}
