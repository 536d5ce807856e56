//! trig-circle
//!
//! Runs as an egui window, or headless with `trig-circle export <DIR>` to
//! write one sweep as numbered PNG frames.

use clap::Parser;
use eframe::egui;

use trig_circle::app::{self, TrigApp};
use trig_circle::cli::{Cli, Command};
use trig_circle::error::AppError;

fn main() -> Result<(), AppError> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Export(args)) => {
            let settings = args.settings();
            let frames = app::export_frames(&settings, &args.dir, args.font.as_deref())?;
            println!("Wrote {} frames to {}", frames.len(), args.dir.display());
            Ok(())
        }
        None => run_window(),
    }
}

fn run_window() -> Result<(), AppError> {
    log::info!("Starting trig-circle");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_title("trig-circle"),
        ..Default::default()
    };

    eframe::run_native(
        "trig-circle",
        options,
        Box::new(|cc| Ok(Box::new(TrigApp::new(cc)))),
    )?;
    Ok(())
}
