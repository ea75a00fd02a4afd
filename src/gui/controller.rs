use std::time::{Duration, Instant};

use kiss3d::event::{Action, Event, Key, WindowEvent};
use tracing::info;

// Key config, all in one place
const KEY_SPEED_UP: Key = Key::Period;
const KEY_SLOW_DOWN: Key = Key::Comma;
const KEY_RESTART: Key = Key::R;
const KEY_TOGGLE_PAUSE: Key = Key::Space;

const MAX_TICKS_PER_FRAME: usize = 64;

/// Something the simulation has to do on the controller's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Restart,
}

pub struct Controller {
    // Driver ticks per rendered frame
    ticks_per_frame: usize,
    paused: bool,
    frame_rate: FrameRate,
}

/// Frames per second, averaged over fixed windows of wall-clock time.
pub struct FrameRate {
    window: Duration,
    window_start: Instant,
    frames_in_window: u32,
    last_rate: f64,
}

impl FrameRate {
    pub fn new(window: Duration) -> Self {
        FrameRate {
            window,
            window_start: Instant::now(),
            frames_in_window: 0,
            last_rate: 0.0,
        }
    }

    /// Rate over the last complete window; zero until one has completed.
    pub fn per_second(&self) -> f64 {
        self.last_rate
    }

    pub fn record_frame(&mut self) {
        self.record_frame_at(Instant::now())
    }

    fn record_frame_at(&mut self, now: Instant) {
        self.frames_in_window += 1;

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed > self.window {
            self.last_rate = f64::from(self.frames_in_window) / elapsed.as_secs_f64();
            self.window_start = now;
            self.frames_in_window = 0;
        }
    }
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            ticks_per_frame: 1,
            paused: false,
            frame_rate: FrameRate::new(Duration::from_secs(1)),
        }
    }

    pub fn process_event(&mut self, event: Event) -> Option<Request> {
        match event.value {
            WindowEvent::Key(key, Action::Press, _) => self.process_key(key),
            _ => None,
        }
    }

    fn process_key(&mut self, key: Key) -> Option<Request> {
        match key {
            KEY_SPEED_UP => {
                self.ticks_per_frame = (self.ticks_per_frame * 2).min(MAX_TICKS_PER_FRAME);
                info!("Speed is {} ticks / frame", self.ticks_per_frame);
            }
            KEY_SLOW_DOWN => {
                self.ticks_per_frame = (self.ticks_per_frame / 2).max(1);
                info!("Speed is {} ticks / frame", self.ticks_per_frame);
            }
            KEY_TOGGLE_PAUSE => {
                self.paused = !self.paused;
                info!("{}", if self.paused { "Paused" } else { "Resumed" });
            }
            KEY_RESTART => return Some(Request::Restart),
            _ => {}
        }
        None
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn ticks_per_frame(&self) -> usize {
        self.ticks_per_frame
    }

    pub fn fps(&self) -> f64 {
        self.frame_rate.per_second()
    }

    pub fn increment_frame_counter(&mut self) {
        self.frame_rate.record_frame()
    }
}
