//! Geometry module - the pure math behind every frame
//!
//! This module provides:
//! - `circle_point` for the point at angle θ on the scaled unit circle
//! - `TrigFunction` and `trig_segment` for the six function segments
//! - `angle_indicator` for the arc, label and marker that visualize θ
//!
//! Nothing here holds state: every result is a function of θ and the
//! configuration values passed in.

mod error;
mod indicator;
mod trig;

pub use error::GeometryError;
pub use indicator::{angle_indicator, AngleIndicator, MARKER_RADIUS};
pub use trig::{
    circle_point, trig_segment, trig_segment_by_name, trig_segment_colored, Anchor, LinePalette,
    Segment, TrigFunction,
};
