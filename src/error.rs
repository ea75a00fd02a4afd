use thiserror::Error;

use crate::model::orrery::BodyID;

/// Anything a render sink can fail with. Sinks own their backends, so we
/// don't try to be more specific than this.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Bad setup: caught before any frame is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("body '{name}' has invalid orbital radius {radius} (must be positive and finite)")]
    InvalidRadius { name: String, radius: f64 },
    #[error("body '{name}' has invalid orbital period {period} (must be positive and finite)")]
    InvalidPeriod { name: String, period: f64 },
    #[error("body '{0}' is registered more than once")]
    DuplicateBody(String),
    #[error("central body is declared more than once")]
    DuplicateCentralBody,
    #[error("time step {0} must be positive and finite")]
    InvalidStep(f64),
    #[error("time range [{start}, {end}) is empty or not finite")]
    InvalidTimeRange { start: f64, end: f64 },
    #[error("time range [{start}, {end}) holds too many steps of {step}")]
    TooManyFrames { start: f64, end: f64, step: f64 },
}

/// The orbital model was asked for a position it can't produce.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("orbital period is zero")]
    ZeroPeriod,
    #[error("non-finite position (radius = {radius}, period = {period}, time = {time})")]
    NonFinite { radius: f64, period: f64, time: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot place body '{name}' at time {time}")]
pub struct BodyError {
    pub id: BodyID,
    pub name: String,
    pub time: f64,
    #[source]
    pub source: DomainError,
}

#[derive(Debug, Error)]
pub enum AnimationError {
    #[error(transparent)]
    Body(#[from] BodyError),
    #[error("render sink failed")]
    Sink(#[source] SinkError),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read body file")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("line {line}: invalid body")]
    Config {
        line: usize,
        #[source]
        source: ConfigError,
    },
}
