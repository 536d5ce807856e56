//! The animation driver - run clock and per-frame dispatch
//!
//! The driver owns a set of animations and a clock. Each frame the caller
//! passes in the elapsed wall-clock time (`tick`) or jumps straight to a
//! point in the run (`seek`); the driver turns that into an alpha and calls
//! every animation with it. At the end of the run alpha is exactly 1.0.

use super::rate::RateFunc;
use super::traits::Animation;
use crate::shapes::Scene;

/// Default length of one run in seconds
pub const DEFAULT_RUN_TIME: f32 = 5.0;

/// Shortest allowed run; keeps the progress division finite
const MIN_RUN_TIME: f32 = 1.0e-3;

/// What the driver did on the last tick
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DriverState {
    Running,
    Paused,
    Finished,
}

pub struct AnimationDriver {
    animations: Vec<Box<dyn Animation>>,
    run_time: f32,
    rate: RateFunc,
    elapsed: f32,
    looping: bool,
    paused: bool,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(DEFAULT_RUN_TIME)
    }
}

impl AnimationDriver {
    pub fn new(run_time: f32) -> Self {
        Self {
            animations: Vec::new(),
            run_time: run_time.max(MIN_RUN_TIME),
            rate: RateFunc::default(),
            elapsed: 0.0,
            looping: false,
            paused: false,
        }
    }

    pub fn with_rate(mut self, rate: RateFunc) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Add an animation to be driven
    pub fn add<A: Animation + 'static>(&mut self, animation: A) -> &mut Self {
        log::debug!("Driving animation '{}'", animation.name());
        self.animations.push(Box::new(animation));
        self
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn run_time(&self) -> f32 {
        self.run_time
    }

    /// Change the run length, keeping the current progress
    pub fn set_run_time(&mut self, run_time: f32) {
        let progress = self.progress();
        self.run_time = run_time.max(MIN_RUN_TIME);
        self.elapsed = progress * self.run_time;
    }

    pub fn rate(&self) -> RateFunc {
        self.rate
    }

    pub fn set_rate(&mut self, rate: RateFunc) {
        self.rate = rate;
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Seconds into the current run
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Fraction of the run completed, in [0, 1]
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.run_time).clamp(0.0, 1.0)
    }

    /// Current interpolation fraction after the rate function
    pub fn alpha(&self) -> f32 {
        self.rate.apply(self.progress())
    }

    /// True once a non-looping run has reached its end
    pub fn is_finished(&self) -> bool {
        !self.looping && self.elapsed >= self.run_time
    }

    /// Advance the clock by `dt` seconds and update the scene
    pub fn tick(&mut self, scene: &mut Scene, dt: f32) -> DriverState {
        if self.paused {
            return DriverState::Paused;
        }
        if self.is_finished() {
            return DriverState::Finished;
        }

        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.run_time {
            if self.looping {
                self.elapsed %= self.run_time;
                log::debug!("Animation run wrapped around");
            } else {
                self.elapsed = self.run_time;
                log::debug!("Animation run finished after {:.2}s", self.run_time);
            }
        }

        self.apply(scene);

        if self.is_finished() {
            DriverState::Finished
        } else {
            DriverState::Running
        }
    }

    /// Jump to `progress` (0..=1) and update the scene
    pub fn seek(&mut self, scene: &mut Scene, progress: f32) {
        self.elapsed = progress.clamp(0.0, 1.0) * self.run_time;
        self.apply(scene);
    }

    /// Go back to the start of the run
    pub fn restart(&mut self, scene: &mut Scene) {
        self.seek(scene, 0.0);
    }

    /// Evenly spaced progress values for rendering the run at `fps`,
    /// including both the first and the last frame
    pub fn frame_progressions(&self, fps: f32) -> Vec<f32> {
        let frames = (self.run_time * fps.max(0.0)).ceil().max(1.0) as usize;
        (0..=frames).map(|i| i as f32 / frames as f32).collect()
    }

    fn apply(&mut self, scene: &mut Scene) {
        let alpha = self.alpha();
        for animation in &mut self.animations {
            animation.interpolate(scene, alpha);
        }
    }
}
