//! Raster renderer - scenes to RGBA images without a window
//!
//! Mirrors what the egui canvas draws, using only the `image` crate:
//! - Lines and sampled curves are stroked by stamping discs along them
//! - Dots are filled discs
//! - Labels are glyph outlines, filled even-odd or stroked

use image::{Rgba, RgbaImage};
use nalgebra::Point2;

use super::canvas::{curve_samples, CanvasSettings};
use super::view::Viewport;
use crate::color::Rgb;
use crate::shapes::{label_outline, shape_to_points, Drawable, GlyphFont, Scene, Shape};

/// Distance between stamped discs along a stroke, in pixels
const STAMP_STEP: f32 = 0.5;

/// Renders scenes to images of a fixed size
pub struct FrameRenderer {
    width: u32,
    height: u32,
    pub settings: CanvasSettings,
    font: Option<GlyphFont>,
}

impl FrameRenderer {
    pub fn new(width: u32, height: u32, settings: CanvasSettings) -> Self {
        Self {
            width,
            height,
            settings,
            font: None,
        }
    }

    /// Use a font for labels instead of the built-in θ outline
    pub fn with_font(mut self, font: GlyphFont) -> Self {
        self.font = Some(font);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn viewport(&self) -> Viewport {
        self.settings
            .viewport(Point2::origin(), self.width as f32, self.height as f32)
    }

    /// Render every visible drawable of `scene`
    pub fn render(&self, scene: &Scene) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(self.width, self.height, self.settings.background.to_rgba());
        let viewport = self.viewport();

        for drawable in scene.visible() {
            for leaf in drawable.leaves() {
                self.draw_leaf(&mut img, &viewport, leaf);
            }
        }

        img
    }

    fn draw_leaf(&self, img: &mut RgbaImage, viewport: &Viewport, leaf: &Drawable) {
        let half_width = self.settings.line_width / 2.0;
        match leaf {
            Drawable::Line { line, color } => {
                if let Some((a, b)) = viewport.clip_segment(line.start, line.end) {
                    stroke_segment(img, a, b, half_width, color.to_rgba());
                }
            }
            Drawable::Circle { circle, color } => {
                self.stroke_shape(img, viewport, circle, *color);
            }
            Drawable::Arc { arc, color } => {
                self.stroke_shape(img, viewport, arc, *color);
            }
            Drawable::Dot { dot, color } => {
                if dot.center.iter().all(|c| c.is_finite()) {
                    let center = viewport.to_screen(dot.center);
                    fill_disc(img, center, dot.radius * viewport.pixels_per_unit, color.to_rgba());
                }
            }
            Drawable::Label(label) => {
                if !label.position.iter().all(|c| c.is_finite()) {
                    return;
                }
                let outline = label_outline(self.font.as_ref(), label);
                let color = label.color.to_rgba();
                if outline.filled {
                    let contours: Vec<Vec<Point2<f32>>> = outline
                        .contours
                        .iter()
                        .map(|c| c.iter().map(|p| viewport.to_screen(*p)).collect())
                        .collect();
                    fill_even_odd(img, &contours, color);
                } else {
                    for contour in &outline.contours {
                        for (a, b) in viewport.clip_polyline(contour) {
                            stroke_segment(img, a, b, half_width * 0.75, color);
                        }
                    }
                }
            }
            Drawable::Group(_) => {}
        }
    }

    fn stroke_shape(&self, img: &mut RgbaImage, viewport: &Viewport, shape: &dyn Shape, color: Rgb) {
        let samples = curve_samples(shape, viewport.pixels_per_unit);
        let points = shape_to_points(shape, samples);
        for (a, b) in viewport.clip_polyline(&points) {
            stroke_segment(img, a, b, self.settings.line_width / 2.0, color.to_rgba());
        }
    }
}

/// Stamp discs of radius `half_width` along a screen-space segment
fn stroke_segment(img: &mut RgbaImage, a: Point2<f32>, b: Point2<f32>, half_width: f32, color: Rgba<u8>) {
    let length = nalgebra::distance(&a, &b);
    let steps = (length / STAMP_STEP).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let p = a + (b - a) * (i as f32 / steps as f32);
        fill_disc(img, p, half_width.max(0.5), color);
    }
}

/// Fill every pixel whose center lies within `radius` of `center`
fn fill_disc(img: &mut RgbaImage, center: Point2<f32>, radius: f32, color: Rgba<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    let min_x = ((center.x - radius).floor() as i64).max(0);
    let max_x = ((center.x + radius).ceil() as i64).min(w - 1);
    let min_y = ((center.y - radius).floor() as i64).max(0);
    let max_y = ((center.y + radius).ceil() as i64).min(h - 1);
    let r2 = radius * radius;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            if dx * dx + dy * dy <= r2 {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Scanline fill of closed contours with the even-odd rule
fn fill_even_odd(img: &mut RgbaImage, contours: &[Vec<Point2<f32>>], color: Rgba<u8>) {
    let points = contours.iter().flatten();
    let (min_y, max_y) = points.fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
    if min_y > max_y {
        return;
    }

    let first_row = (min_y.floor() as i64).max(0);
    let last_row = (max_y.ceil() as i64).min(img.height() as i64 - 1);
    let mut crossings = Vec::new();

    for row in first_row..=last_row {
        let y = row as f32 + 0.5;
        crossings.clear();

        for contour in contours {
            let n = contour.len();
            for i in 0..n {
                let a = contour[i];
                let b = contour[(i + 1) % n];
                if (a.y <= y) != (b.y <= y) {
                    crossings.push(a.x + (y - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
        }

        crossings.sort_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            let start = (pair[0] - 0.5).ceil().max(0.0) as u32;
            let end = (pair[1] - 0.5).floor().min(img.width() as f32 - 1.0);
            if end < 0.0 {
                continue;
            }
            for x in start..=end as u32 {
                img.put_pixel(x, row as u32, color);
            }
        }
    }
}
