use std::path::PathBuf;

use clap::Args;

use crate::animation::{AnimationDriver, DriverParams, EndBehavior};
use crate::consts;
use crate::error::ConfigError;
use crate::file::read_file;
use crate::model::orrery::Orrery;

/// Options shared by everything that plays the animation.
#[derive(Debug, Clone, Args)]
pub struct AnimationArgs {
    /// Body file to load. The built-in solar system is used when not provided.
    #[arg(long)]
    pub bodies: Option<PathBuf>,

    /// Simulated time of the first frame
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub start: f64,

    /// Simulated time at which the animation ends (exclusive).
    ///
    /// Defaults to one revolution of the slowest body past the start.
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<f64>,

    /// Simulated time advanced per frame
    #[arg(long, default_value_t = consts::DEFAULT_STEP)]
    pub step: f64,

    /// Real time between frames, in milliseconds
    #[arg(long, default_value_t = consts::DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Start over from the beginning instead of stopping at the end
    #[arg(long)]
    pub repeat: bool,
}

impl AnimationArgs {
    pub fn load_orrery(&self) -> Result<Orrery, Box<dyn std::error::Error>> {
        Ok(match &self.bodies {
            Some(path) => read_file(path)?,
            None => consts::solar_system()?,
        })
    }

    pub fn driver_params(&self, orrery: &Orrery) -> DriverParams {
        // An empty orrery has no natural length; fall back to a single frame
        let end = self.end.unwrap_or_else(|| {
            self.start + orrery.longest_period().unwrap_or(self.step)
        });
        let end_behavior = if self.repeat {
            EndBehavior::Repeat
        } else {
            EndBehavior::Stop
        };
        DriverParams::new(self.start, end, self.step).with_end_behavior(end_behavior)
    }

    pub fn build_driver(&self, orrery: Orrery) -> Result<AnimationDriver, ConfigError> {
        let params = self.driver_params(&orrery);
        AnimationDriver::new(orrery, params)
    }

    /// Frame rate matching `interval_ms`, at least one frame per second.
    pub fn frames_per_second(&self) -> u64 {
        (1000 / self.interval_ms.max(1)).max(1)
    }
}
