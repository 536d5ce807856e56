//! The interactive window
//!
//! Top bar: playback controls and a scrub slider. Side panel: everything in
//! `AppSettings`. Central panel: the scene canvas with a θ readout below it.

use std::path::{Path, PathBuf};

use eframe::egui;

use crate::animation::{AnimationDriver, DriverState, RateFunc};
use crate::color::Rgb;
use crate::geometry::TrigFunction;
use crate::render::{export_sweep, ExportError, FrameRenderer, SceneCanvas};
use crate::settings::AppSettings;
use crate::shapes::{GlyphFont, Scene};
use crate::trig::{SweepRange, TrigScene};

/// Frame times above this are treated as a stall, not as elapsed time
const MAX_FRAME_DT: f32 = 0.1;

/// Build a scene and a driver from the settings
pub fn build_scene(settings: &AppSettings) -> (Scene, AnimationDriver) {
    let mut scene = Scene::new();
    let mut trig = TrigScene::setup(&mut scene, settings.trig.clone());
    let driver = trig
        .animate_theta(
            &mut scene,
            settings.sweep,
            &settings.functions,
            settings.run_time,
            settings.rate,
        )
        .with_looping(settings.looping);
    (scene, driver)
}

/// Render one full sweep described by `settings` as PNG frames in `dir`
pub fn export_frames(
    settings: &AppSettings,
    dir: &Path,
    font: Option<&Path>,
) -> Result<Vec<PathBuf>, ExportError> {
    let (mut scene, mut driver) = build_scene(settings);
    let mut renderer = FrameRenderer::new(
        settings.export_width,
        settings.export_height,
        settings.canvas_settings(),
    );
    if let Some(path) = font {
        renderer = renderer.with_font(GlyphFont::from_file(path)?);
        log::info!("Using label font {}", path.display());
    }
    export_sweep(&mut driver, &mut scene, &renderer, dir, settings.export_fps)
}

/// Main application state
pub struct TrigApp {
    settings: AppSettings,
    scene: Scene,
    driver: AnimationDriver,
    canvas: SceneCanvas,

    scene_needs_rebuild: bool,
    settings_dirty: bool,
    status: String,
}

impl TrigApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_settings(AppSettings::load())
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        let (scene, driver) = build_scene(&settings);
        let canvas = SceneCanvas::new(settings.canvas_settings());
        Self {
            settings,
            scene,
            driver,
            canvas,
            scene_needs_rebuild: false,
            settings_dirty: false,
            status: String::from("Ready"),
        }
    }

    /// Rebuild scene and driver after a settings change, keeping the
    /// playback position and pause state
    fn rebuild_scene(&mut self) {
        let progress = self.driver.progress();
        let paused = self.driver.is_paused();

        let (scene, mut driver) = build_scene(&self.settings);
        self.scene = scene;
        driver.seek(&mut self.scene, progress);
        if paused {
            driver.pause();
        }
        self.driver = driver;
        self.canvas.settings = self.settings.canvas_settings();
        self.scene_needs_rebuild = false;
    }

    /// θ at the current playback position
    fn theta(&self) -> f32 {
        self.settings.sweep.theta_at(self.driver.alpha())
    }

    fn export(&mut self) {
        let Some(dir) = rfd::FileDialog::new()
            .set_title("Export frames to")
            .pick_folder()
        else {
            return;
        };

        match export_frames(&self.settings, &dir, None) {
            Ok(frames) => {
                self.status = format!("Exported {} frames to {}", frames.len(), dir.display());
            }
            Err(e) => {
                log::error!("Export failed: {}", e);
                self.status = format!("Export failed: {}", e);
            }
        }
    }

    /// Play/pause button: a finished run starts over and plays
    fn toggle_playback(&mut self) {
        if self.driver.is_finished() {
            self.driver.restart(&mut self.scene);
            self.driver.resume();
        } else {
            self.driver.toggle_pause();
        }
    }

    /// Scrub slider: jump to `progress` and hold there
    fn scrub(&mut self, progress: f32) {
        self.driver.pause();
        self.driver.seek(&mut self.scene, progress);
    }

    /// Switch the rate and redraw the current frame with it
    fn set_rate(&mut self, rate: RateFunc) {
        self.settings.rate = rate;
        self.driver.set_rate(rate);
        let progress = self.driver.progress();
        self.driver.seek(&mut self.scene, progress);
        self.settings_dirty = true;
    }

    fn mark_changed(&mut self) {
        self.scene_needs_rebuild = true;
        self.settings_dirty = true;
    }

    fn settings_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Functions");
        ui.separator();

        for &function in TrigFunction::all() {
            let mut enabled = self.settings.functions.contains(&function);
            if ui.checkbox(&mut enabled, function.name()).changed() {
                self.settings.set_function(function, enabled);
                self.mark_changed();
            }
        }

        ui.separator();

        ui.collapsing("Sweep", |ui| {
            let tau = std::f32::consts::TAU;
            let mut range_changed = false;
            range_changed |= ui
                .add(egui::Slider::new(&mut self.settings.sweep.start, -tau..=2.0 * tau).text("Start θ"))
                .changed();
            range_changed |= ui
                .add(egui::Slider::new(&mut self.settings.sweep.end, -tau..=2.0 * tau).text("End θ"))
                .changed();
            if ui.button("Full turn").clicked() {
                self.settings.sweep = SweepRange::full_turn();
                range_changed = true;
            }
            if range_changed {
                self.mark_changed();
            }

            // Run time and rate only change the clock, not the scene
            if ui
                .add(
                    egui::Slider::new(&mut self.settings.run_time, 0.5..=30.0)
                        .text("Run time (s)")
                        .logarithmic(true),
                )
                .changed()
            {
                self.driver.set_run_time(self.settings.run_time);
                self.settings_dirty = true;
            }

            let mut rate = self.settings.rate;
            egui::ComboBox::from_label("Rate")
                .selected_text(rate.name())
                .show_ui(ui, |ui| {
                    for option in RateFunc::all() {
                        ui.selectable_value(&mut rate, *option, option.name());
                    }
                });
            if rate != self.settings.rate {
                self.set_rate(rate);
            }
        });

        ui.separator();

        ui.collapsing("Circle", |ui| {
            let trig = &mut self.settings.trig;
            let mut changed = false;
            changed |= ui
                .add(egui::Slider::new(&mut trig.unit_length, 0.5..=3.5).text("Radius"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut trig.arc_radius, 0.1..=1.5).text("Arc radius"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut trig.theta_height, 0.1..=1.0).text("θ size"))
                .changed();
            if changed {
                self.mark_changed();
            }
        });

        ui.separator();

        ui.collapsing("Display", |ui| {
            let mut changed = false;
            changed |= ui
                .add(egui::Slider::new(&mut self.settings.zoom, 0.25..=4.0).text("Zoom"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.settings.line_width, 0.5..=6.0).text("Line width"))
                .changed();
            changed |= ui.checkbox(&mut self.settings.show_grid, "Show grid").changed();
            if changed {
                self.canvas.settings = self.settings.canvas_settings();
                self.settings_dirty = true;
            }
        });

        ui.separator();

        ui.collapsing("Colors", |ui| {
            let trig = &mut self.settings.trig;
            let mut changed = false;
            changed |= color_row(ui, "x-anchored (sin, tan, sec)", &mut trig.lines.x_line);
            changed |= color_row(ui, "y-anchored (cos, cot, csc)", &mut trig.lines.y_line);
            changed |= color_row(ui, "Circle", &mut trig.circle_color);
            changed |= color_row(ui, "θ", &mut trig.theta_color);
            changed |= color_row(ui, "Axes", &mut trig.axes_color);
            changed |= color_row(ui, "Radius and marker", &mut trig.radius_color);
            if changed {
                self.mark_changed();
            }
            if color_row(ui, "Background", &mut self.settings.background) {
                self.canvas.settings = self.settings.canvas_settings();
                self.settings_dirty = true;
            }

            if ui.button("Reset colors").clicked() {
                let defaults = AppSettings::default();
                self.settings.trig.lines = defaults.trig.lines;
                self.settings.trig.circle_color = defaults.trig.circle_color;
                self.settings.trig.theta_color = defaults.trig.theta_color;
                self.settings.trig.axes_color = defaults.trig.axes_color;
                self.settings.trig.radius_color = defaults.trig.radius_color;
                self.settings.background = defaults.background;
                self.canvas.settings = self.settings.canvas_settings();
                self.mark_changed();
            }
        });

        ui.separator();

        ui.collapsing("Export", |ui| {
            let mut changed = false;
            changed |= ui
                .add(egui::Slider::new(&mut self.settings.export_width, 64..=3840).text("Width"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.settings.export_height, 64..=2160).text("Height"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.settings.export_fps, 1.0..=120.0).text("FPS"))
                .changed();
            if changed {
                self.settings_dirty = true;
            }

            if ui.button("💾 Export frames…").clicked() {
                self.export();
            }
        });
    }
}

/// Color picker with a label; returns true if the color changed
fn color_row(ui: &mut egui::Ui, label: &str, color: &mut Rgb) -> bool {
    ui.horizontal(|ui| {
        let mut srgb = color.to_array();
        let changed = ui.color_edit_button_srgb(&mut srgb).changed();
        ui.label(label);
        if changed {
            *color = Rgb::from_array(srgb);
        }
        changed
    })
    .inner
}

impl eframe::App for TrigApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.scene_needs_rebuild {
            self.rebuild_scene();
        }

        let dt = ctx.input(|i| i.stable_dt).min(MAX_FRAME_DT);
        if self.driver.tick(&mut self.scene, dt) == DriverState::Running {
            ctx.request_repaint();
        }

        // Persist once the user lets go of a slider
        if self.settings_dirty && !ctx.input(|i| i.pointer.any_down()) {
            self.settings.save();
            self.settings_dirty = false;
        }

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("trig-circle");
                ui.separator();

                let button_text = if self.driver.is_paused() || self.driver.is_finished() {
                    "▶ Play"
                } else {
                    "⏸ Pause"
                };
                if ui.button(button_text).clicked() {
                    self.toggle_playback();
                }
                if ui.button("⏮ Restart").clicked() {
                    self.driver.restart(&mut self.scene);
                }

                let mut looping = self.driver.is_looping();
                if ui.checkbox(&mut looping, "Loop").changed() {
                    self.driver.set_looping(looping);
                    self.settings.looping = looping;
                    self.settings_dirty = true;
                }

                let mut progress = self.driver.progress();
                if ui
                    .add(egui::Slider::new(&mut progress, 0.0..=1.0).show_value(false))
                    .changed()
                {
                    self.scrub(progress);
                }

                ui.separator();
                if ui
                    .toggle_value(&mut self.settings.show_settings, "⚙ Settings")
                    .changed()
                {
                    self.settings_dirty = true;
                }
                ui.separator();
                ui.label(&self.status);
            });
        });

        // Settings panel
        if self.settings.show_settings {
            egui::SidePanel::left("settings_panel")
                .min_width(240.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        self.settings_panel(ui);
                    });
                });
        }

        // Scene display
        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas.show(ui, &self.scene, None);

            let theta = self.theta();
            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.horizontal(|ui| {
                    ui.small(format!("θ = {:.3} rad ({:.1}°)", theta, theta.to_degrees()));
                    for function in &self.settings.functions {
                        ui.separator();
                        ui.small(format!("{} = {:.3}", function, function.value(theta)));
                    }
                });
            });
        });
    }
}
