use nalgebra::Vector2;

use super::orrery::BodyID;

/// The state of every body right after one integration step, in registration
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Index of the step that produced this state, starting at 0
    pub step: usize,
    /// Simulated seconds since the start of the run
    pub time: f64,
    pub bodies: Vec<BodySnapshot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub id: BodyID,
    pub name: String,
    pub fixed: bool,
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
}

impl Snapshot {
    pub fn get(&self, id: BodyID) -> Option<&BodySnapshot> {
        self.bodies.get(id.0)
    }
}

/// Positions of one body over a run.
pub fn trajectory(history: &[Snapshot], id: BodyID) -> impl Iterator<Item = Vector2<f64>> + '_ {
    history
        .iter()
        .filter_map(move |snapshot| snapshot.get(id))
        .map(|body| body.position)
}
