//! Built-in starting conditions.

use nalgebra::{Point3, Vector2};

use crate::astro::AU;
use crate::model::error::ConstructionError;
use crate::model::orrery::{BodyInfo, Orrery};

struct Planet {
    name: &'static str,
    mass: f64,
    // AU
    distance: f64,
    // m/s
    speed: f64,
    color: [f32; 3],
    radius: f32,
}

// Each planet starts on the positive x-axis, moving counter-clockwise
const PLANETS: [Planet; 4] = [
    Planet {
        name: "Venus",
        mass: 4.8685e24,
        distance: 0.723,
        speed: 35.02e3,
        color: [0.5, 0.0, 0.5],
        radius: 3.5,
    },
    Planet {
        name: "Earth",
        mass: 5.9742e24,
        distance: 1.0,
        speed: 29.783e3,
        color: [0.0, 0.0, 1.0],
        radius: 3.5,
    },
    Planet {
        name: "Mars",
        mass: 6.39e23,
        distance: 1.524,
        speed: 24.1e3,
        color: [1.0, 0.0, 0.0],
        radius: 2.5,
    },
    Planet {
        name: "Jupiter",
        mass: 1.898e27,
        distance: 5.203,
        speed: 13.06e3,
        color: [0.0, 0.5, 0.0],
        radius: 5.0,
    },
];

pub const SUN_MASS: f64 = 1.98892e30;

/// The Sun, held in place at the origin, with Venus, Earth, Mars and Jupiter.
/// 620 weekly steps is enough for Jupiter to go around once.
pub fn inner_solar_system() -> Result<Orrery, ConstructionError> {
    let mut orrery = Orrery::new();

    orrery.add_fixed_body(
        BodyInfo {
            name: "Sun".to_owned(),
            radius: 10.0,
            color: Point3::new(1.0, 1.0, 0.0),
        },
        SUN_MASS,
        Vector2::zeros(),
        Vector2::zeros(),
    )?;

    for planet in PLANETS.iter() {
        let [r, g, b] = planet.color;
        orrery.add_body(
            BodyInfo {
                name: planet.name.to_owned(),
                radius: planet.radius,
                color: Point3::new(r, g, b),
            },
            planet.mass,
            Vector2::new(planet.distance * AU, 0.0),
            Vector2::new(0.0, planet.speed),
        )?;
    }

    Ok(orrery)
}
