use nalgebra::Point3;

use crate::model::orbit::CircularOrbit;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

// All the cosmetic info about a body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyInfo {
    pub name: String,
    pub color: Point3<f32>,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyID,
    pub info: BodyInfo,
    pub orbit: CircularOrbit,
}

impl BodyInfo {
    pub fn new(name: impl Into<String>, color: Point3<f32>) -> Self {
        BodyInfo {
            name: name.into(),
            color,
        }
    }
}
