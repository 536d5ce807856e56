//! Scene canvas widget
//!
//! Paints a `Scene` into an egui `Ui`:
//! - Lines are clipped to the view (singular frames shoot off screen
//!   instead of producing garbage coordinates)
//! - Circles and arcs are sampled into polylines
//! - Dots are filled discs, labels use egui's text rendering

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Stroke, Vec2};
use nalgebra::Point2;

use super::view::Viewport;
use crate::color::{self, Rgb};
use crate::shapes::{shape_to_points, Drawable, Scene, Shape};

/// Screen pixels per polyline sample on curves
const PIXELS_PER_SAMPLE: f32 = 3.0;
const MIN_CURVE_SAMPLES: usize = 16;
const MAX_CURVE_SAMPLES: usize = 720;

/// Display settings for the canvas
#[derive(Clone, Debug)]
pub struct CanvasSettings {
    pub background: Rgb,
    /// Line thickness in pixels
    pub line_width: f32,
    /// Zoom factor (1.0 = `world_half_height` units above and below center)
    pub zoom: f32,
    /// World units visible above and below the center at zoom 1.0
    pub world_half_height: f32,
    /// Whether to show a background grid
    pub show_grid: bool,
    /// Grid spacing in world units
    pub grid_spacing: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            background: color::BLACK,
            line_width: 2.0,
            zoom: 1.0,
            world_half_height: 4.0,
            show_grid: false,
            grid_spacing: 1.5,
        }
    }
}

impl CanvasSettings {
    /// Viewport for a screen rectangle with these settings applied
    pub fn viewport(&self, origin: Point2<f32>, width: f32, height: f32) -> Viewport {
        let half_height = self.world_half_height / self.zoom.max(0.01);
        Viewport::fit(origin, width, height, half_height)
    }
}

/// Number of polyline samples for a shape at a given scale
pub fn curve_samples(shape: &dyn Shape, pixels_per_unit: f32) -> usize {
    let pixels = shape.length() * pixels_per_unit;
    ((pixels / PIXELS_PER_SAMPLE) as usize).clamp(MIN_CURVE_SAMPLES, MAX_CURVE_SAMPLES)
}

/// egui widget that paints a scene
#[derive(Default)]
pub struct SceneCanvas {
    pub settings: CanvasSettings,
}

impl SceneCanvas {
    pub fn new(settings: CanvasSettings) -> Self {
        Self { settings }
    }

    /// Draw the scene
    ///
    /// # Arguments
    /// * `ui` - The egui UI context
    /// * `scene` - Scene to draw
    /// * `size` - Desired widget size (or None for all available space)
    pub fn show(&self, ui: &mut egui::Ui, scene: &Scene, size: Option<Vec2>) -> egui::Response {
        let size = size.unwrap_or_else(|| ui.available_size());
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 4.0, self.settings.background.to_color32());

        let viewport = self.settings.viewport(
            Point2::new(rect.left(), rect.top()),
            rect.width(),
            rect.height(),
        );

        if self.settings.show_grid {
            self.draw_grid(&painter, &viewport);
        }

        let painter = painter.with_clip_rect(rect);
        for drawable in scene.visible() {
            for leaf in drawable.leaves() {
                self.draw_leaf(&painter, &viewport, leaf);
            }
        }

        response
    }

    /// Faint lines at every grid step
    fn draw_grid(&self, painter: &egui::Painter, viewport: &Viewport) {
        let spacing = self.settings.grid_spacing;
        if spacing <= 0.0 {
            return;
        }
        let stroke = Stroke::new(0.5, Color32::from_rgba_unmultiplied(80, 80, 80, 100));
        let (min, max) = viewport.world_bounds();

        let mut x = (min.x / spacing).ceil() * spacing;
        while x <= max.x {
            if let Some((a, b)) =
                viewport.clip_segment(Point2::new(x, min.y), Point2::new(x, max.y))
            {
                painter.line_segment([to_pos(a), to_pos(b)], stroke);
            }
            x += spacing;
        }

        let mut y = (min.y / spacing).ceil() * spacing;
        while y <= max.y {
            if let Some((a, b)) =
                viewport.clip_segment(Point2::new(min.x, y), Point2::new(max.x, y))
            {
                painter.line_segment([to_pos(a), to_pos(b)], stroke);
            }
            y += spacing;
        }
    }

    fn draw_leaf(&self, painter: &egui::Painter, viewport: &Viewport, leaf: &Drawable) {
        let ppu = viewport.pixels_per_unit;
        match leaf {
            Drawable::Line { line, color } => {
                let stroke = Stroke::new(self.settings.line_width, color.to_color32());
                if let Some((a, b)) = viewport.clip_segment(line.start, line.end) {
                    painter.line_segment([to_pos(a), to_pos(b)], stroke);
                }
            }
            Drawable::Circle { circle, color } => {
                self.draw_curve(painter, viewport, circle, *color);
            }
            Drawable::Arc { arc, color } => {
                self.draw_curve(painter, viewport, arc, *color);
            }
            Drawable::Dot { dot, color } => {
                if dot.center.iter().all(|c| c.is_finite()) {
                    let center = to_pos(viewport.to_screen(dot.center));
                    painter.circle_filled(center, dot.radius * ppu, color.to_color32());
                }
            }
            Drawable::Label(label) => {
                if label.position.iter().all(|c| c.is_finite()) {
                    let pos = to_pos(viewport.to_screen(label.position));
                    painter.text(
                        pos,
                        Align2::CENTER_CENTER,
                        &label.text,
                        FontId::proportional(label.height * ppu),
                        label.color.to_color32(),
                    );
                }
            }
            Drawable::Group(_) => {}
        }
    }

    fn draw_curve(&self, painter: &egui::Painter, viewport: &Viewport, shape: &dyn Shape, color: Rgb) {
        let stroke = Stroke::new(self.settings.line_width, color.to_color32());
        let samples = curve_samples(shape, viewport.pixels_per_unit);
        let points = shape_to_points(shape, samples);
        for (a, b) in viewport.clip_polyline(&points) {
            painter.line_segment([to_pos(a), to_pos(b)], stroke);
        }
    }
}

fn to_pos(p: Point2<f32>) -> Pos2 {
    Pos2::new(p.x, p.y)
}
