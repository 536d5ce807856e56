use thiserror::Error;

use crate::render::ExportError;

/// Errors that end the program
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Window error: {0}")]
    Window(#[from] eframe::Error),

    #[error(transparent)]
    Export(#[from] ExportError),
}
