use nalgebra::Vector2;

use super::error::ConstructionError;
use super::snapshot::{BodySnapshot, Snapshot};

mod body;

pub use body::{Body, BodyID, BodyInfo};

/// The set of simulated bodies, in registration order.
///
/// A [BodyID] is just an index into this list, so per-body scratch data (like
/// the integrator's force buffer) can be kept in plain vectors.
#[derive(Debug, Clone, Default)]
pub struct Orrery {
    bodies: Vec<Body>,
    anchor: Option<BodyID>,
}

impl Orrery {
    pub fn new() -> Self {
        Orrery {
            bodies: Vec::new(),
            anchor: None,
        }
    }

    pub fn add_body(
        &mut self,
        info: BodyInfo,
        mass: f64,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
    ) -> Result<BodyID, ConstructionError> {
        self.insert_new_body(info, mass, false, position, velocity)
    }

    /// Adds the anchor: a body whose velocity is integrated like any other, but
    /// whose position stays put.
    pub fn add_fixed_body(
        &mut self,
        info: BodyInfo,
        mass: f64,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
    ) -> Result<BodyID, ConstructionError> {
        if let Some(existing) = self.anchor {
            return Err(ConstructionError::SecondAnchor {
                name: info.name,
                existing: self.get_body(existing).info.name.clone(),
            });
        }

        let id = self.insert_new_body(info, mass, true, position, velocity)?;
        self.anchor = Some(id);
        Ok(id)
    }

    fn insert_new_body(
        &mut self,
        info: BodyInfo,
        mass: f64,
        fixed: bool,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
    ) -> Result<BodyID, ConstructionError> {
        // Written this way so that NaN is rejected too
        if !(mass > 0.0) {
            return Err(ConstructionError::NonPositiveMass {
                name: info.name,
                mass,
            });
        }

        let id = BodyID(self.bodies.len());
        self.bodies
            .push(Body::new(id, info, mass, fixed, position, velocity));
        Ok(id)
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn get_body(&self, id: BodyID) -> &Body {
        &self.bodies[id.0]
    }

    pub fn anchor(&self) -> Option<BodyID> {
        self.anchor
    }

    pub fn find_body(&self, name: &str) -> Option<BodyID> {
        self.bodies
            .iter()
            .find(|body| body.info.name.eq_ignore_ascii_case(name))
            .map(|body| body.id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Sum of mass times velocity over every body, in kg m / s.
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn snapshot(&self, step: usize, time: f64) -> Snapshot {
        let bodies = self
            .bodies
            .iter()
            .map(|body| BodySnapshot {
                id: body.id,
                name: body.info.name.clone(),
                fixed: body.is_fixed(),
                position: body.position(),
                velocity: body.velocity(),
            })
            .collect();

        Snapshot { step, time, bodies }
    }
}
