pub mod orbit;
pub mod orrery;

pub use orbit::{position, CircularOrbit};
pub use orrery::{Body, BodyID, BodyInfo, Orrery, Snapshot};
