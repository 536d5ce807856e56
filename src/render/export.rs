//! PNG sequence export
//!
//! Runs an animation driver through every frame of one run and writes each
//! frame as `frame_00000.png`, `frame_00001.png`, ... into a directory.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::raster::FrameRenderer;
use crate::animation::AnimationDriver;
use crate::shapes::{Scene, TextError};

/// Largest frame allowed, in pixels (16384 x 16384)
pub const MAX_FRAME_PIXELS: u64 = 1 << 28;

/// Most frames one export may write
pub const MAX_FRAMES: u64 = 100_000;

/// Errors that can occur while exporting frames
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write frames: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to encode frame: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Failed to load label font: {0}")]
    FontError(#[from] TextError),

    #[error("Invalid frame size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Invalid frame rate {0} (must be positive and give at most 100000 frames per run)")]
    InvalidFps(f32),
}

/// File name of frame `index`
pub fn frame_file_name(index: usize) -> String {
    format!("frame_{index:05}.png")
}

/// Render one full run of `driver` into `dir`
///
/// Returns the paths written, in frame order. The driver is left at the
/// end of its run.
pub fn export_sweep(
    driver: &mut AnimationDriver,
    scene: &mut Scene,
    renderer: &FrameRenderer,
    dir: &Path,
    fps: f32,
) -> Result<Vec<PathBuf>, ExportError> {
    let pixels = renderer.width() as u64 * renderer.height() as u64;
    if pixels == 0 || pixels > MAX_FRAME_PIXELS {
        return Err(ExportError::InvalidSize {
            width: renderer.width(),
            height: renderer.height(),
        });
    }
    if !(fps > 0.0 && fps.is_finite()) {
        return Err(ExportError::InvalidFps(fps));
    }
    let frames = (driver.run_time() as f64 * fps as f64).ceil();
    if frames > MAX_FRAMES as f64 {
        return Err(ExportError::InvalidFps(fps));
    }

    std::fs::create_dir_all(dir)?;

    let progressions = driver.frame_progressions(fps);
    log::info!(
        "Exporting {} frames ({}x{} @ {} fps) to {}",
        progressions.len(),
        renderer.width(),
        renderer.height(),
        fps,
        dir.display()
    );

    let mut written = Vec::with_capacity(progressions.len());
    for (index, progress) in progressions.into_iter().enumerate() {
        driver.seek(scene, progress);
        let frame = renderer.render(scene);
        let path = dir.join(frame_file_name(index));
        frame.save(&path)?;
        log::debug!("Wrote {}", path.display());
        written.push(path);
    }

    log::info!("Export finished: {} frames", written.len());
    Ok(written)
}
