use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::animation::{RateFunc, DEFAULT_RUN_TIME};
use crate::color::{self, Rgb};
use crate::geometry::TrigFunction;
use crate::render::CanvasSettings;
use crate::trig::{SweepRange, TrigConfig};

/// Returns the path to the settings file: `~/.config/trig-circle/settings.json`
pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("trig-circle");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Scene
    pub trig: TrigConfig,
    pub functions: Vec<TrigFunction>,

    // Sweep
    pub sweep: SweepRange,
    pub run_time: f32,
    pub rate: RateFunc,
    pub looping: bool,

    // Display
    pub show_settings: bool,
    pub line_width: f32,
    pub zoom: f32,
    pub show_grid: bool,
    pub background: Rgb,

    // Export
    pub export_width: u32,
    pub export_height: u32,
    pub export_fps: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            trig: TrigConfig::default(),
            functions: TrigFunction::all().to_vec(),

            sweep: SweepRange::full_turn(),
            run_time: DEFAULT_RUN_TIME,
            rate: RateFunc::Linear,
            looping: false,

            show_settings: true,
            line_width: 2.0,
            zoom: 1.0,
            show_grid: false,
            background: color::BLACK,

            export_width: 1280,
            export_height: 720,
            export_fps: 30.0,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Load settings from disk, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) {
        self.save_to(&settings_path());
    }

    /// Save settings to disk as pretty JSON.
    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to write settings: {}", e);
                } else {
                    log::debug!("Saved settings to {}", path.display());
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Display settings for the canvas and the frame renderer
    pub fn canvas_settings(&self) -> CanvasSettings {
        CanvasSettings {
            background: self.background,
            line_width: self.line_width,
            zoom: self.zoom,
            show_grid: self.show_grid,
            grid_spacing: self.trig.unit_length,
            ..CanvasSettings::default()
        }
    }

    /// Enable or disable one function, keeping the drawing order stable
    pub fn set_function(&mut self, function: TrigFunction, enabled: bool) {
        self.functions.retain(|&f| f != function);
        if enabled {
            self.functions.push(function);
            let order = TrigFunction::all();
            self.functions
                .sort_by_key(|f| order.iter().position(|o| o == f).unwrap_or(order.len()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load_from(&dir.path().join("nope.json"));
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = AppSettings::default();
        settings.run_time = 12.0;
        settings.rate = RateFunc::Smooth;
        settings.functions = vec![TrigFunction::Tan, TrigFunction::Cot];
        settings.trig.lines.x_line = color::YELLOW;
        settings.save_to(&path);

        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "run_time": 3.0, "functions": ["sin", "csc"] }"#).unwrap();

        let settings = AppSettings::load_from(&path);
        assert_eq!(settings.run_time, 3.0);
        assert_eq!(settings.functions, vec![TrigFunction::Sin, TrigFunction::Csc]);
        assert_eq!(settings.trig, TrigConfig::default());
    }

    #[test]
    fn test_default_plays_once() {
        assert!(!AppSettings::default().looping);
    }

    #[test]
    fn test_set_function_keeps_order() {
        let mut settings = AppSettings::default();
        settings.set_function(TrigFunction::Sin, false);
        assert!(!settings.functions.contains(&TrigFunction::Sin));

        settings.set_function(TrigFunction::Sin, true);
        assert_eq!(settings.functions, TrigFunction::all().to_vec());

        // Enabling twice doesn't duplicate
        settings.set_function(TrigFunction::Cos, true);
        assert_eq!(settings.functions.len(), 6);
    }

    #[test]
    fn test_canvas_settings_follow_unit_length() {
        let mut settings = AppSettings::default();
        settings.trig.unit_length = 2.0;
        settings.zoom = 1.5;
        let canvas = settings.canvas_settings();
        assert_eq!(canvas.grid_spacing, 2.0);
        assert_eq!(canvas.zoom, 1.5);
    }
}
