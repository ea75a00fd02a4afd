use nalgebra::Point2;

use crate::error::{BodyError, ConfigError};
use crate::model::orbit::CircularOrbit;

mod body;

pub use body::{Body, BodyID, BodyInfo};

/// The set of bodies circling a fixed central body at the origin.
///
/// Bodies are never removed, and their IDs are indices into `bodies`, so
/// iteration order is registration order.
#[derive(Debug, Clone)]
pub struct Orrery {
    central: BodyInfo,
    bodies: Vec<Body>,
}

/// Where every body is at one instant. Built fresh for each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    time: f64,
    // Indexed by BodyID
    positions: Vec<Point2<f64>>,
}

impl Orrery {
    pub fn new(central: BodyInfo) -> Self {
        Orrery {
            central,
            bodies: vec![],
        }
    }

    pub fn central_body(&self) -> &BodyInfo {
        &self.central
    }

    pub fn add_body(
        &mut self,
        info: BodyInfo,
        radius: f64,
        period: f64,
    ) -> Result<BodyID, ConfigError> {
        if self.name_taken(&info.name) {
            return Err(ConfigError::DuplicateBody(info.name));
        }
        let orbit = CircularOrbit::new(&info.name, radius, period)?;
        Ok(self.insert_new_body(info, orbit))
    }

    /// Skips validation, so that tests can smuggle a broken body past it.
    #[cfg(test)]
    pub(crate) fn add_body_unchecked(
        &mut self,
        info: BodyInfo,
        radius: f64,
        period: f64,
    ) -> BodyID {
        self.insert_new_body(info, CircularOrbit::new_unchecked(radius, period))
    }

    fn insert_new_body(&mut self, info: BodyInfo, orbit: CircularOrbit) -> BodyID {
        let id = BodyID(self.bodies.len());
        self.bodies.push(Body { id, info, orbit });
        id
    }

    fn name_taken(&self, name: &str) -> bool {
        self.central.name.eq_ignore_ascii_case(name)
            || self
                .bodies
                .iter()
                .any(|b| b.info.name.eq_ignore_ascii_case(name))
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    /// IDs are only valid for the orrery that handed them out. Panics on an
    /// ID from any other.
    pub fn get_body(&self, id: BodyID) -> &Body {
        &self.bodies[id.0]
    }

    pub fn find_body(&self, name: &str) -> Option<&Body> {
        self.bodies
            .iter()
            .find(|b| b.info.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Time for the slowest body to go all the way around; after this long,
    /// every body has completed at least one revolution.
    pub fn longest_period(&self) -> Option<f64> {
        self.bodies
            .iter()
            .map(|b| b.orbit.period())
            .fold(None, |acc, p| Some(acc.map_or(p, |q: f64| q.max(p))))
    }

    pub fn max_radius(&self) -> Option<f64> {
        self.bodies
            .iter()
            .map(|b| b.orbit.radius())
            .fold(None, |acc, r| Some(acc.map_or(r, |q: f64| q.max(r))))
    }

    pub fn snapshot_at(&self, time: f64) -> Result<Snapshot, BodyError> {
        let positions = self
            .bodies
            .iter()
            .map(|body| {
                body.orbit.position_at(time).map_err(|source| BodyError {
                    id: body.id,
                    name: body.info.name.clone(),
                    time,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Snapshot { time, positions })
    }
}

impl Snapshot {
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn get(&self, id: BodyID) -> Option<Point2<f64>> {
        self.positions.get(id.0).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyID, Point2<f64>)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, p)| (BodyID(i), *p))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
