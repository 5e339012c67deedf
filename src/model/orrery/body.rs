use nalgebra::{Point3, Vector2};

use crate::astro::HasMass;

/// A body's slot in its [Orrery](super::Orrery). Slots are handed out in
/// registration order and never reused.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

// All the immutable info about a body. Only the renderers care about
// anything besides the name.
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub name: String,
    pub radius: f32,
    pub color: Point3<f32>,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyID,
    pub info: BodyInfo,
    mass: f64,
    fixed: bool,
    pub(crate) position: Vector2<f64>,
    pub(crate) velocity: Vector2<f64>,
}

impl BodyInfo {
    /// A white, 5-pixel body.
    pub fn named(name: &str) -> Self {
        BodyInfo {
            name: name.to_owned(),
            radius: 5.0,
            color: Point3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Body {
    pub(super) fn new(
        id: BodyID,
        info: BodyInfo,
        mass: f64,
        fixed: bool,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
    ) -> Self {
        Body {
            id,
            info,
            mass,
            fixed,
            position,
            velocity,
        }
    }

    /// Whether this is the anchor, whose position is never advanced.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Position in meters
    pub fn position(&self) -> Vector2<f64> {
        self.position
    }

    /// Velocity in meters per second
    pub fn velocity(&self) -> Vector2<f64> {
        self.velocity
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.mass * self.velocity
    }
}

impl HasMass for Body {
    fn mass(&self) -> f64 {
        self.mass
    }
}
