//! Counting completed orbits.
//!
//! This is a heuristic, not an exact orbit-completion detector: a revolution is
//! counted whenever the body lands inside a small window just short of its
//! starting point on the positive x-axis. A body moving fast enough can step
//! straight over the window and the revolution goes unnoticed, and a body
//! whose orbit has drifted outwards can miss it entirely.

use nalgebra::Vector2;

use std::f64::consts::PI;

use super::orrery::{BodyID, Orrery};
use super::snapshot::Snapshot;
use crate::math::geometry::polar_angle;

// Window bounds, as fractions of the starting orbital radius
const WINDOW_X_MIN: f64 = 0.98;
const WINDOW_X_MAX: f64 = 1.00;
const WINDOW_Y_HALF_HEIGHT: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct RevolutionCounter {
    body: BodyID,
    reference_radius: f64,
    hits: usize,
    last_position: Vector2<f64>,
    last_in_window: bool,
}

impl RevolutionCounter {
    pub fn new(orrery: &Orrery, body: BodyID) -> Self {
        let position = orrery.get_body(body).position();
        RevolutionCounter {
            body,
            reference_radius: position.norm(),
            hits: 0,
            last_position: position,
            last_in_window: false,
        }
    }

    pub fn body(&self) -> BodyID {
        self.body
    }

    pub fn observe(&mut self, snapshot: &Snapshot) {
        let position = match snapshot.get(self.body) {
            Some(state) => state.position,
            None => return,
        };

        self.last_in_window = self.in_window(&position);
        if self.last_in_window {
            self.hits += 1;
        }
        self.last_position = position;
    }

    fn in_window(&self, position: &Vector2<f64>) -> bool {
        if self.reference_radius == 0.0 {
            return false;
        }

        let x = position.x / self.reference_radius;
        let y = position.y / self.reference_radius;
        (WINDOW_X_MIN..=WINDOW_X_MAX).contains(&x) && y.abs() <= WINDOW_Y_HALF_HEIGHT
    }

    /// Number of times the window was hit.
    pub fn completed(&self) -> usize {
        self.hits
    }

    /// Completed revolutions plus the fraction of the current one, judged by the
    /// last observed position.
    pub fn revolutions(&self) -> f64 {
        let fraction = polar_angle(&self.last_position) / (2.0 * PI);

        // Landing in the window just below the x-axis already counted this
        // revolution as complete.
        if self.last_in_window && fraction > 0.5 {
            (self.hits - 1) as f64 + fraction
        } else {
            self.hits as f64 + fraction
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::orrery::BodyInfo;

    fn counter() -> (RevolutionCounter, Orrery) {
        let mut orrery = Orrery::new();
        let id = orrery
            .add_body(
                BodyInfo::named("Earth"),
                1.0,
                Vector2::new(100.0, 0.0),
                Vector2::zeros(),
            )
            .unwrap();
        (RevolutionCounter::new(&orrery, id), orrery)
    }

    fn snapshot_at(orrery: &Orrery, step: usize, x: f64, y: f64) -> Snapshot {
        let mut snapshot = orrery.snapshot(step, 0.0);
        snapshot.bodies[0].position = Vector2::new(x, y);
        snapshot
    }

    #[test]
    fn test_counts_window_hits() {
        let (mut counter, orrery) = counter();

        counter.observe(&snapshot_at(&orrery, 0, 0.0, 100.0));
        counter.observe(&snapshot_at(&orrery, 1, -100.0, 0.0));
        counter.observe(&snapshot_at(&orrery, 2, 0.0, -100.0));
        assert_eq!(counter.completed(), 0);
        approx::assert_relative_eq!(counter.revolutions(), 0.75);

        counter.observe(&snapshot_at(&orrery, 3, 99.0, 2.0));
        assert_eq!(counter.completed(), 1);
        approx::assert_relative_eq!(counter.revolutions(), 1.0, epsilon = 0.01);

        counter.observe(&snapshot_at(&orrery, 4, 0.0, 100.0));
        approx::assert_relative_eq!(counter.revolutions(), 1.25);
    }

    #[test]
    fn test_hit_below_axis_not_double_counted() {
        let (mut counter, orrery) = counter();
        counter.observe(&snapshot_at(&orrery, 0, -100.0, 0.0));
        counter.observe(&snapshot_at(&orrery, 1, 99.0, -3.0));

        assert_eq!(counter.completed(), 1);
        approx::assert_relative_eq!(counter.revolutions(), 1.0, epsilon = 0.01);
    }

    #[test]
    fn test_misses_outside_window() {
        let (mut counter, orrery) = counter();
        // Just past the starting radius, and too far off the axis
        counter.observe(&snapshot_at(&orrery, 0, 100.5, 0.0));
        counter.observe(&snapshot_at(&orrery, 1, 99.0, 6.0));
        assert_eq!(counter.completed(), 0);
    }
}
