//! Render module - turning scenes into pixels
//!
//! This module provides:
//! - `Viewport` for world → screen mapping and clipping
//! - `SceneCanvas`, the egui widget used by the window
//! - `FrameRenderer` and `export_sweep` for PNG frames without a window

mod canvas;
mod export;
mod raster;
mod view;

pub use canvas::{CanvasSettings, SceneCanvas};
pub use export::{export_sweep, frame_file_name, ExportError, MAX_FRAMES, MAX_FRAME_PIXELS};
pub use raster::FrameRenderer;
pub use view::{Viewport, WORLD_LIMIT};
