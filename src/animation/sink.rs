use tracing::debug;

use crate::error::SinkError;
use crate::model::orrery::{BodyInfo, Orrery, Snapshot};

/// Whatever is on the other end of the animation: a window, a file, or
/// nothing at all.
pub trait RenderSink {
    /// Wipe everything, leaving every body undrawn.
    fn clear(&mut self) -> Result<(), SinkError>;

    /// Called once per (re)start, after `clear`. The central body always
    /// sits at the origin.
    fn draw_central_body(&mut self, central: &BodyInfo) -> Result<(), SinkError>;

    /// Called once per tick with every body's position.
    fn draw_frame(&mut self, orrery: &Orrery, snapshot: &Snapshot) -> Result<(), SinkError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn clear(&mut self) -> Result<(), SinkError> {
        Ok(())
    }

    fn draw_central_body(&mut self, _: &BodyInfo) -> Result<(), SinkError> {
        Ok(())
    }

    fn draw_frame(&mut self, _: &Orrery, _: &Snapshot) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Reports every frame through `tracing`, at debug level.
#[derive(Debug, Default)]
pub struct TraceSink {
    frames: usize,
}

impl TraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_seen(&self) -> usize {
        self.frames
    }
}

impl RenderSink for TraceSink {
    fn clear(&mut self) -> Result<(), SinkError> {
        self.frames = 0;
        Ok(())
    }

    fn draw_central_body(&mut self, central: &BodyInfo) -> Result<(), SinkError> {
        debug!(name = %central.name, "central body at origin");
        Ok(())
    }

    fn draw_frame(&mut self, orrery: &Orrery, snapshot: &Snapshot) -> Result<(), SinkError> {
        self.frames += 1;
        for (id, pt) in snapshot.iter() {
            debug!(
                time = snapshot.time(),
                body = %orrery.get_body(id).info.name,
                x = pt.x,
                y = pt.y,
                "position"
            );
        }
        Ok(())
    }
}
