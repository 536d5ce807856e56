//! Viewport - mapping world units to screen pixels
//!
//! ## Coordinate Systems
//!
//! - World: origin at the circle center, y up, one circle radius =
//!   `unit_length` world units
//! - Screen: pixels, origin at the top-left, y down
//!
//! Segments near a singularity of tan/cot/sec/csc have endpoints that are
//! huge or infinite. `clip_segment` clamps them to a finite range, drops
//! NaN segments and cuts whatever remains to the visible rectangle, so
//! renderers only ever see finite on-screen coordinates.

use nalgebra::{Affine2, Matrix3, Point2};

/// Coordinates are clamped to this many world units before clipping
pub const WORLD_LIMIT: f32 = 1.0e4;

/// A world-space window onto a screen rectangle
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    /// Top-left corner of the screen rectangle in pixels
    pub screen_origin: Point2<f32>,
    pub width: f32,
    pub height: f32,
    /// World point shown at the center of the rectangle
    pub center: Point2<f32>,
    pub pixels_per_unit: f32,
}

impl Viewport {
    /// Fit `world_half_height` world units above and below the center
    pub fn fit(screen_origin: Point2<f32>, width: f32, height: f32, world_half_height: f32) -> Self {
        let pixels_per_unit = if world_half_height > 0.0 {
            height / (2.0 * world_half_height)
        } else {
            1.0
        };
        Self {
            screen_origin,
            width,
            height,
            center: Point2::origin(),
            pixels_per_unit,
        }
    }

    /// World → screen affine transform (scales, flips y, then translates)
    pub fn transform(&self) -> Affine2<f32> {
        let s = self.pixels_per_unit;
        let tx = self.screen_origin.x + self.width / 2.0 - s * self.center.x;
        let ty = self.screen_origin.y + self.height / 2.0 + s * self.center.y;
        Affine2::from_matrix_unchecked(Matrix3::new(
            s, 0.0, tx, //
            0.0, -s, ty, //
            0.0, 0.0, 1.0,
        ))
    }

    pub fn to_screen(&self, p: Point2<f32>) -> Point2<f32> {
        self.transform() * p
    }

    /// Visible world rectangle as (min, max) corners
    pub fn world_bounds(&self) -> (Point2<f32>, Point2<f32>) {
        let half_w = self.width / (2.0 * self.pixels_per_unit);
        let half_h = self.height / (2.0 * self.pixels_per_unit);
        (
            Point2::new(self.center.x - half_w, self.center.y - half_h),
            Point2::new(self.center.x + half_w, self.center.y + half_h),
        )
    }

    /// Clip a world-space segment to the view and map it to screen space
    ///
    /// Returns None for NaN endpoints and for segments entirely off screen.
    pub fn clip_segment(&self, a: Point2<f32>, b: Point2<f32>) -> Option<(Point2<f32>, Point2<f32>)> {
        if a.iter().chain(b.iter()).any(|c| c.is_nan()) {
            return None;
        }
        let a = clamp_point(a);
        let b = clamp_point(b);

        let (min, max) = self.world_bounds();
        let (a, b) = liang_barsky(a, b, min, max)?;
        Some((self.to_screen(a), self.to_screen(b)))
    }

    /// Map a polyline, clipping each edge; edges off screen are dropped
    pub fn clip_polyline(&self, points: &[Point2<f32>]) -> Vec<(Point2<f32>, Point2<f32>)> {
        points
            .windows(2)
            .filter_map(|w| self.clip_segment(w[0], w[1]))
            .collect()
    }
}

fn clamp_point(p: Point2<f32>) -> Point2<f32> {
    Point2::new(
        p.x.clamp(-WORLD_LIMIT, WORLD_LIMIT),
        p.y.clamp(-WORLD_LIMIT, WORLD_LIMIT),
    )
}

/// Liang–Barsky line clipping against an axis-aligned rectangle
fn liang_barsky(
    a: Point2<f32>,
    b: Point2<f32>,
    min: Point2<f32>,
    max: Point2<f32>,
) -> Option<(Point2<f32>, Point2<f32>)> {
    let d = b - a;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;

    let edges = [
        (-d.x, a.x - min.x),
        (d.x, max.x - a.x),
        (-d.y, a.y - min.y),
        (d.y, max.y - a.y),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            // Parallel to this edge: either fully inside or fully outside
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }

    Some((a + d * t0, a + d * t1))
}
