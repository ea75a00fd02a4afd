use nalgebra::Point3;

use crate::error::ConfigError;
use crate::model::orrery::{BodyInfo, Orrery};

/// (name, orbital radius in AU, orbital period in days, color)
///
/// These values are approximate. Colors follow the usual ten-color plotting
/// palette so that neighboring planets are easy to tell apart.
pub const PLANETS: [(&str, f64, f64, u32); 8] = [
    ("Mercury", 0.387, 88.0, 0x1f77b4),
    ("Venus", 0.723, 225.0, 0xff7f0e),
    ("Earth", 1.000, 365.0, 0x2ca02c),
    ("Mars", 1.524, 687.0, 0xd62728),
    ("Jupiter", 5.204, 4331.0, 0x9467bd),
    ("Saturn", 9.582, 10747.0, 0x8c564b),
    ("Uranus", 19.201, 30589.0, 0xe377c2),
    ("Neptune", 30.047, 59800.0, 0x7f7f7f),
];

pub const SUN_COLOR: u32 = 0xffff00;

// Days advanced per frame, and real milliseconds between frames
pub const DEFAULT_STEP: f64 = 10.0;
pub const DEFAULT_INTERVAL_MS: u64 = 50;

pub fn rgb(hex: u32) -> Point3<f32> {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    Point3::new(channel(16), channel(8), channel(0))
}

pub fn sun() -> BodyInfo {
    BodyInfo::new("Sun", rgb(SUN_COLOR))
}

/// The eight planets, on circular orbits around the Sun.
pub fn solar_system() -> Result<Orrery, ConfigError> {
    let mut orrery = Orrery::new(sun());
    for &(name, radius, period, color) in PLANETS.iter() {
        orrery.add_body(BodyInfo::new(name, rgb(color)), radius, period)?;
    }
    Ok(orrery)
}
