use nalgebra::Vector2;

use super::{HasMass, NEWTON_G};
use crate::model::error::GravityError;
use crate::model::orrery::Body;

/// Returns the gravitational force exerted on `body` by `other`. The force points
/// from `body` towards `other`.
///
/// Fails if both arguments are the same body, or if two distinct bodies sit at
/// exactly the same position.
#[allow(clippy::float_cmp)]
pub fn attraction(body: &Body, other: &Body) -> Result<Vector2<f64>, GravityError> {
    if body.id == other.id {
        return Err(GravityError::SelfInteraction {
            body: body.info.name.clone(),
        });
    }

    let delta = other.position() - body.position();
    let distance = (delta.x * delta.x + delta.y * delta.y).sqrt();

    // Exact comparison; no attempt is made to model a physical collision radius
    if distance == 0.0 {
        return Err(GravityError::Collision {
            first: body.info.name.clone(),
            second: other.info.name.clone(),
        });
    }

    let magnitude = NEWTON_G * body.mass() * other.mass() / (distance * distance);

    let theta = delta.y.atan2(delta.x);
    Ok(Vector2::new(magnitude * theta.cos(), magnitude * theta.sin()))
}
