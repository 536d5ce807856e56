//! Drawables - colored primitives and groups of them
//!
//! A `Drawable` is the payload a scene entry carries. Groups let one scene
//! handle stand for several primitives (all six trig lines, or the arc +
//! label + radius + marker of the angle indicator), so one swap replaces
//! the whole bundle.

use nalgebra::Point2;

use super::primitives::{Arc, Circle, Dot, Line};
use super::traits::Shape;
use crate::color::Rgb;

/// A text label centered on `position`, `height` world units tall
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point2<f32>,
    pub height: f32,
    pub color: Rgb,
}

impl Label {
    pub fn new(text: impl Into<String>, position: Point2<f32>, height: f32, color: Rgb) -> Self {
        Self {
            text: text.into(),
            position,
            height,
            color,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    Circle { circle: Circle, color: Rgb },
    Line { line: Line, color: Rgb },
    Arc { arc: Arc, color: Rgb },
    Dot { dot: Dot, color: Rgb },
    Label(Label),
    Group(Vec<Drawable>),
}

impl Drawable {
    pub fn circle(circle: Circle, color: Rgb) -> Self {
        Drawable::Circle { circle, color }
    }

    pub fn line(line: Line, color: Rgb) -> Self {
        Drawable::Line { line, color }
    }

    pub fn arc(arc: Arc, color: Rgb) -> Self {
        Drawable::Arc { arc, color }
    }

    pub fn dot(dot: Dot, color: Rgb) -> Self {
        Drawable::Dot { dot, color }
    }

    pub fn group(children: impl IntoIterator<Item = Drawable>) -> Self {
        Drawable::Group(children.into_iter().collect())
    }

    /// Recolor this drawable and every child
    pub fn set_color(&mut self, new_color: Rgb) {
        match self {
            Drawable::Circle { color, .. }
            | Drawable::Line { color, .. }
            | Drawable::Arc { color, .. }
            | Drawable::Dot { color, .. } => *color = new_color,
            Drawable::Label(label) => label.color = new_color,
            Drawable::Group(children) => {
                for child in children {
                    child.set_color(new_color);
                }
            }
        }
    }

    /// The stroked outline of a leaf, if it has one
    pub fn shape(&self) -> Option<&dyn Shape> {
        match self {
            Drawable::Circle { circle, .. } => Some(circle as &dyn Shape),
            Drawable::Line { line, .. } => Some(line),
            Drawable::Arc { arc, .. } => Some(arc),
            Drawable::Dot { dot, .. } => Some(dot),
            Drawable::Label(_) | Drawable::Group(_) => None,
        }
    }

    /// Color of a leaf (None for groups)
    pub fn color(&self) -> Option<Rgb> {
        match self {
            Drawable::Circle { color, .. }
            | Drawable::Line { color, .. }
            | Drawable::Arc { color, .. }
            | Drawable::Dot { color, .. } => Some(*color),
            Drawable::Label(label) => Some(label.color),
            Drawable::Group(_) => None,
        }
    }

    /// All non-group drawables, depth first
    pub fn leaves(&self) -> Vec<&Drawable> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Drawable>) {
        match self {
            Drawable::Group(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
            leaf => out.push(leaf),
        }
    }
}
