//! Label outlines for the raster renderer
//!
//! The egui canvas draws labels with egui's own text rendering. Exported
//! frames have no text engine, so labels are turned into outlines here:
//! - With a font file, glyph outlines come from `ab_glyph` and are filled
//! - Without one, a built-in θ (an ellipse with a cross bar) is stroked
//!
//! Outlines are in world units, scaled to the label height and centered
//! on the label position.

use std::f32::consts::TAU;
use std::path::Path as FilePath;

use ab_glyph::{Font, FontVec, OutlineCurve};
use nalgebra::{Point2, Vector2};
use thiserror::Error;

use super::drawable::Label;

/// Errors that can occur while loading a font or outlining text
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Failed to read font file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse font: {0}")]
    FontError(String),

    #[error("Text is empty")]
    EmptyText,

    #[error("No glyphs could be rendered")]
    NoGlyphs,
}

/// Points per Bézier curve
const CURVE_SAMPLES: usize = 8;

/// Points on the fallback θ ellipse
const ELLIPSE_SAMPLES: usize = 32;

/// Closed contours for one label
#[derive(Clone, Debug)]
pub struct GlyphOutline {
    pub contours: Vec<Vec<Point2<f32>>>,
    /// Fill with the even-odd rule (font glyphs) or stroke (built-in θ)
    pub filled: bool,
}

/// A loaded font used to outline labels
pub struct GlyphFont {
    font: FontVec,
}

impl GlyphFont {
    pub fn from_file(path: impl AsRef<FilePath>) -> Result<Self, TextError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self, TextError> {
        let font = FontVec::try_from_vec(data).map_err(|e| TextError::FontError(e.to_string()))?;
        Ok(Self { font })
    }

    /// Outline `label.text` with this font
    pub fn outline(&self, label: &Label) -> Result<GlyphOutline, TextError> {
        if label.text.is_empty() {
            return Err(TextError::EmptyText);
        }

        let mut contours: Vec<Vec<Point2<f32>>> = Vec::new();
        let mut cursor_x = 0.0f32;

        for ch in label.text.chars() {
            let glyph_id = self.font.glyph_id(ch);
            if let Some(outline) = self.font.outline(glyph_id) {
                append_curves(&mut contours, &outline.curves, cursor_x);
            }
            cursor_x += self.font.h_advance_unscaled(glyph_id);
        }

        if contours.is_empty() {
            return Err(TextError::NoGlyphs);
        }

        Ok(GlyphOutline {
            contours: fit_to_label(contours, label),
            filled: true,
        })
    }
}

/// Outline for a label, falling back to the built-in θ if the font can't
/// render it
pub fn label_outline(font: Option<&GlyphFont>, label: &Label) -> GlyphOutline {
    if let Some(font) = font {
        match font.outline(label) {
            Ok(outline) => return outline,
            Err(e) => log::debug!("Falling back to built-in glyph for {:?}: {}", label.text, e),
        }
    }
    theta_outline(label)
}

/// A stroked θ: an upright ellipse crossed by a horizontal bar
pub fn theta_outline(label: &Label) -> GlyphOutline {
    let rx = label.height * 0.3;
    let ry = label.height * 0.5;
    let c = label.position;

    let ellipse = (0..=ELLIPSE_SAMPLES)
        .map(|i| {
            let a = i as f32 / ELLIPSE_SAMPLES as f32 * TAU;
            c + Vector2::new(rx * a.cos(), ry * a.sin())
        })
        .collect();
    let bar = vec![c - Vector2::new(rx, 0.0), c + Vector2::new(rx, 0.0)];

    GlyphOutline {
        contours: vec![ellipse, bar],
        filled: false,
    }
}

/// Turn outline curves into contours, starting a new contour whenever a
/// curve doesn't begin where the previous one ended
fn append_curves(contours: &mut Vec<Vec<Point2<f32>>>, curves: &[OutlineCurve], offset_x: f32) {
    let to_point = |p: &ab_glyph::Point| Point2::new(p.x + offset_x, p.y);

    for curve in curves {
        let (start, points): (Point2<f32>, Vec<Point2<f32>>) = match curve {
            OutlineCurve::Line(p0, p1) => (to_point(p0), vec![to_point(p1)]),
            OutlineCurve::Quad(p0, p1, p2) => {
                let (a, b, c) = (to_point(p0), to_point(p1), to_point(p2));
                let pts = (1..=CURVE_SAMPLES)
                    .map(|i| quadratic_bezier(a, b, c, i as f32 / CURVE_SAMPLES as f32))
                    .collect();
                (a, pts)
            }
            OutlineCurve::Cubic(p0, p1, p2, p3) => {
                let (a, b, c, d) = (to_point(p0), to_point(p1), to_point(p2), to_point(p3));
                let pts = (1..=CURVE_SAMPLES)
                    .map(|i| cubic_bezier(a, b, c, d, i as f32 / CURVE_SAMPLES as f32))
                    .collect();
                (a, pts)
            }
        };

        let continues = contours
            .last()
            .and_then(|c| c.last())
            .is_some_and(|last| (last - start).norm() < 1e-3);
        if !continues {
            contours.push(vec![start]);
        }
        if let Some(contour) = contours.last_mut() {
            contour.extend(points);
        }
    }
}

/// Evaluate a quadratic Bézier curve at parameter t
fn quadratic_bezier(p0: Point2<f32>, p1: Point2<f32>, p2: Point2<f32>, t: f32) -> Point2<f32> {
    let mt = 1.0 - t;
    Point2::from(p0.coords * (mt * mt) + p1.coords * (2.0 * mt * t) + p2.coords * (t * t))
}

/// Evaluate a cubic Bézier curve at parameter t
fn cubic_bezier(
    p0: Point2<f32>,
    p1: Point2<f32>,
    p2: Point2<f32>,
    p3: Point2<f32>,
    t: f32,
) -> Point2<f32> {
    let mt = 1.0 - t;
    Point2::from(
        p0.coords * (mt * mt * mt)
            + p1.coords * (3.0 * mt * mt * t)
            + p2.coords * (3.0 * mt * t * t)
            + p3.coords * (t * t * t),
    )
}

/// Scale contours to the label height and center them on its position
fn fit_to_label(contours: Vec<Vec<Point2<f32>>>, label: &Label) -> Vec<Vec<Point2<f32>>> {
    let mut min = Point2::new(f32::MAX, f32::MAX);
    let mut max = Point2::new(f32::MIN, f32::MIN);
    for p in contours.iter().flatten() {
        min = min.inf(p);
        max = max.sup(p);
    }

    let height = max.y - min.y;
    if height <= 0.0 {
        return contours;
    }
    let scale = label.height / height;
    let center = nalgebra::center(&min, &max);

    contours
        .into_iter()
        .map(|contour| {
            contour
                .into_iter()
                .map(|p| label.position + (p - center) * scale)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::YELLOW;

    fn label() -> Label {
        Label::new("θ", Point2::new(1.0, 0.5), 0.3, YELLOW)
    }

    #[test]
    fn test_quadratic_bezier() {
        let p0 = Point2::new(0.0, 0.0);
        let p1 = Point2::new(0.5, 1.0);
        let p2 = Point2::new(1.0, 0.0);

        assert!((quadratic_bezier(p0, p1, p2, 0.0) - p0).norm() < 0.001);
        assert!((quadratic_bezier(p0, p1, p2, 1.0) - p2).norm() < 0.001);
        let mid = quadratic_bezier(p0, p1, p2, 0.5);
        assert!((mid.y - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_cubic_bezier() {
        let p0 = Point2::new(0.0, 0.0);
        let p1 = Point2::new(0.33, 1.0);
        let p2 = Point2::new(0.66, 1.0);
        let p3 = Point2::new(1.0, 0.0);

        assert!((cubic_bezier(p0, p1, p2, p3, 0.0) - p0).norm() < 0.001);
        assert!((cubic_bezier(p0, p1, p2, p3, 1.0) - p3).norm() < 0.001);
    }

    #[test]
    fn test_theta_outline_fits_label() {
        let outline = theta_outline(&label());
        assert!(!outline.filled);
        assert_eq!(outline.contours.len(), 2);

        for p in outline.contours.iter().flatten() {
            assert!((p.y - 0.5).abs() <= 0.15 + 0.001);
            assert!((p.x - 1.0).abs() <= 0.09 + 0.001);
        }
    }

    #[test]
    fn test_fit_to_label_scales_height() {
        let contours = vec![vec![Point2::new(0.0, 0.0), Point2::new(10.0, 20.0)]];
        let fitted = fit_to_label(contours, &label());
        let ys: Vec<f32> = fitted[0].iter().map(|p| p.y).collect();
        assert!((ys[1] - ys[0] - 0.3).abs() < 0.001);
        assert!(((ys[0] + ys[1]) / 2.0 - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_append_curves_splits_contours() {
        let p = |x, y| ab_glyph::point(x, y);
        let curves = vec![
            OutlineCurve::Line(p(0.0, 0.0), p(1.0, 0.0)),
            OutlineCurve::Line(p(1.0, 0.0), p(1.0, 1.0)),
            OutlineCurve::Line(p(5.0, 5.0), p(6.0, 5.0)),
        ];
        let mut contours = Vec::new();
        append_curves(&mut contours, &curves, 0.0);
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0].len(), 3);
    }

    #[test]
    fn test_without_font_falls_back() {
        let outline = label_outline(None, &label());
        assert!(!outline.filled);
    }

    #[test]
    fn test_invalid_font_bytes() {
        assert!(matches!(
            GlyphFont::from_bytes(vec![0, 1, 2, 3]),
            Err(TextError::FontError(_))
        ));
    }
}
