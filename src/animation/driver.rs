use tracing::{debug, error};

use super::sink::RenderSink;
use crate::error::{AnimationError, BodyError, ConfigError};
use crate::model::orrery::{Orrery, Snapshot};

// Past 2^53, `start + k * step` can no longer tell neighbouring frames apart
const MAX_FRAMES: f64 = 9_007_199_254_740_992.0;

/// What to do once simulated time reaches the end of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndBehavior {
    /// Produce no more frames.
    Stop,
    /// Jump back to the start time and go around again.
    Repeat,
}

/// Frames are produced at `start_time + k * step` for every `k` with that
/// time strictly less than `end_time`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverParams {
    pub start_time: f64,
    pub end_time: f64,
    pub step: f64,
    pub end_behavior: EndBehavior,
}

impl DriverParams {
    pub fn new(start_time: f64, end_time: f64, step: f64) -> Self {
        DriverParams {
            start_time,
            end_time,
            step,
            end_behavior: EndBehavior::Stop,
        }
    }

    pub fn with_end_behavior(self, end_behavior: EndBehavior) -> Self {
        DriverParams {
            end_behavior,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(ConfigError::InvalidStep(self.step));
        }
        let (start, end) = (self.start_time, self.end_time);
        if !(start.is_finite() && end.is_finite() && end > start) {
            return Err(ConfigError::InvalidTimeRange { start, end });
        }
        let steps = (end - start) / self.step;
        if !(steps.is_finite() && steps <= MAX_FRAMES) {
            return Err(ConfigError::TooManyFrames {
                start,
                end,
                step: self.step,
            });
        }
        Ok(())
    }

    /// Number of frames in one pass over [start, end).
    ///
    /// Roughly `ceil((end - start) / step)`, but the quotient can round to
    /// either side of an integer, so the estimate is nudged until it counts
    /// exactly the frame times below `end`. Zero if the parameters don't
    /// pass `validate`.
    pub fn frame_count(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let (start, end, step) = (self.start_time, self.end_time, self.step);
        let frame_time = |k: usize| start + k as f64 * step;

        let mut n = ((end - start) / step).ceil() as usize;
        while n > 0 && frame_time(n - 1) >= end {
            n -= 1;
        }
        while frame_time(n) < end {
            n += 1;
        }
        n
    }
}

pub struct AnimationDriver {
    orrery: Orrery,
    params: DriverParams,
    frame_count: usize,
    // Invariant: frame_index <= frame_count
    frame_index: usize,
    cycles: usize,
}

impl AnimationDriver {
    pub fn new(orrery: Orrery, params: DriverParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(AnimationDriver {
            orrery,
            params,
            frame_count: params.frame_count(),
            frame_index: 0,
            cycles: 0,
        })
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    pub fn params(&self) -> &DriverParams {
        &self.params
    }

    /// The time the next tick will compute positions for.
    pub fn current_time(&self) -> f64 {
        // Not accumulated; repeated addition of `step` drifts
        self.params.start_time + self.frame_index as f64 * self.params.step
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// How many times a repeating animation has wrapped around.
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// True when the current pass has no frames left. A repeating driver
    /// will still produce more on the next tick.
    pub fn is_finished(&self) -> bool {
        self.frame_index >= self.frame_count
    }

    pub fn reset(&mut self) {
        if self.frame_index != 0 || self.cycles != 0 {
            debug!("Resetting animation to t = {}", self.params.start_time);
        }
        self.frame_index = 0;
        self.cycles = 0;
    }

    /// Reset, and put the sink back in its initial state.
    pub fn start(&mut self, sink: &mut dyn RenderSink) -> Result<(), AnimationError> {
        self.reset();
        sink.clear().map_err(AnimationError::Sink)?;
        let central = self.orrery.central_body();
        sink.draw_central_body(central).map_err(AnimationError::Sink)
    }

    /// Computes the positions at the current time, then advances time by one
    /// step. Returns `None` once a stopping animation has run out of frames.
    ///
    /// If a body can't be placed, the error is returned and time does not
    /// advance: ticking again will fail the same way.
    pub fn tick(&mut self) -> Result<Option<Snapshot>, BodyError> {
        if self.is_finished() {
            match self.params.end_behavior {
                EndBehavior::Stop => return Ok(None),
                EndBehavior::Repeat => {
                    self.frame_index = 0;
                    self.cycles += 1;
                    debug!("Animation wrapped around ({} cycles)", self.cycles);
                }
            }
        }

        let time = self.current_time();
        let snapshot = self.orrery.snapshot_at(time).map_err(|e| {
            error!("Halting animation: {}: {}", e, e.source);
            e
        })?;
        self.frame_index += 1;
        Ok(Some(snapshot))
    }

    /// Ticks once and hands the frame to the sink. Returns whether there was
    /// a frame to draw.
    pub fn step(&mut self, sink: &mut dyn RenderSink) -> Result<bool, AnimationError> {
        match self.tick()? {
            None => Ok(false),
            Some(snapshot) => {
                sink.draw_frame(&self.orrery, &snapshot).map_err(AnimationError::Sink)?;
                Ok(true)
            }
        }
    }

    /// Restarts and plays exactly one pass into the sink, even if the
    /// animation is set to repeat. Returns the number of frames drawn.
    pub fn run(&mut self, sink: &mut dyn RenderSink) -> Result<usize, AnimationError> {
        self.start(sink)?;
        let mut drawn = 0;
        while !self.is_finished() {
            self.step(sink)?;
            drawn += 1;
        }
        Ok(drawn)
    }
}
