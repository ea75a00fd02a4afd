mod driver;
mod sink;

pub use driver::{AnimationDriver, DriverParams, EndBehavior};
pub use sink::{NullSink, RenderSink, TraceSink};
