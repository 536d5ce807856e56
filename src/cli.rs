//! Command line interface
//!
//! With no subcommand the window opens. `export` renders one sweep to a
//! PNG sequence without a window, starting from the saved settings.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::animation::RateFunc;
use crate::settings::AppSettings;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Animated unit circle showing sin, cos, tan, cot, sec and csc",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one θ sweep to numbered PNG frames
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Directory to write frame_00000.png, frame_00001.png, ... into
    pub dir: PathBuf,

    /// Frames per second
    #[arg(long)]
    pub fps: Option<f32>,

    /// Frame width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Frame height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Seconds for one sweep
    #[arg(long)]
    pub run_time: Option<f32>,

    /// Start angle in radians
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<f32>,

    /// End angle in radians
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<f32>,

    /// Ease in and out instead of sweeping at constant speed
    #[arg(long, action = ArgAction::SetTrue)]
    pub smooth: bool,

    /// TrueType/OpenType font for the θ label
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Ignore the saved settings file
    #[arg(long, action = ArgAction::SetTrue)]
    pub defaults: bool,
}

impl ExportArgs {
    /// Settings for this export: saved (or default) settings with the
    /// command line overrides applied
    pub fn settings(&self) -> AppSettings {
        let mut settings = if self.defaults {
            AppSettings::default()
        } else {
            AppSettings::load()
        };
        self.apply(&mut settings);
        settings
    }

    fn apply(&self, settings: &mut AppSettings) {
        if let Some(fps) = self.fps {
            settings.export_fps = fps;
        }
        if let Some(width) = self.width {
            settings.export_width = width;
        }
        if let Some(height) = self.height {
            settings.export_height = height;
        }
        if let Some(run_time) = self.run_time {
            settings.run_time = run_time;
        }
        if let Some(start) = self.start {
            settings.sweep.start = start;
        }
        if let Some(end) = self.end {
            settings.sweep.end = end;
        }
        if self.smooth {
            settings.rate = RateFunc::Smooth;
        }
        // An export is always exactly one run
        settings.looping = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("trig-circle").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_subcommand_opens_window() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn test_export_overrides() {
        let cli = parse(&[
            "export", "out", "--fps", "60", "--width", "640", "--height", "480", "--start", "-1.5",
            "--end", "3", "--smooth", "--defaults",
        ]);
        let Some(Command::Export(args)) = cli.command else {
            panic!("expected export subcommand");
        };
        assert_eq!(args.dir, PathBuf::from("out"));

        let settings = args.settings();
        assert_eq!(settings.export_fps, 60.0);
        assert_eq!((settings.export_width, settings.export_height), (640, 480));
        assert!((settings.sweep.start + 1.5).abs() < 0.001);
        assert!((settings.sweep.end - 3.0).abs() < 0.001);
        assert_eq!(settings.rate, RateFunc::Smooth);
        assert!(!settings.looping);
    }

    #[test]
    fn test_export_keeps_unset_values() {
        let cli = parse(&["export", "out", "--defaults"]);
        let Some(Command::Export(args)) = cli.command else {
            panic!("expected export subcommand");
        };
        let settings = args.settings();
        let defaults = AppSettings::default();
        assert_eq!(settings.export_fps, defaults.export_fps);
        assert_eq!(settings.sweep, defaults.sweep);
        assert_eq!(settings.rate, RateFunc::Linear);
    }

    #[test]
    fn test_export_requires_dir() {
        assert!(Cli::try_parse_from(["trig-circle", "export"]).is_err());
    }
}
