//! Fixed-step semi-implicit Euler integration.
//!
//! One call to [Integrator::step] does, in order:
//! 1. compute the net force on every body from the current positions
//! 2. kick every velocity: `v += F / m * dt`
//! 3. drift every non-anchor position with the *new* velocity: `x += v * dt`
//!
//! Forces are fully computed before anything is mutated, so a failing step
//! leaves the [Orrery] untouched.

use nalgebra::Vector2;

use super::error::{ConstructionError, GravityError, SimulationError};
use super::orrery::Orrery;
use crate::astro::{attraction, HasMass};

/// How net forces are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Summation {
    /// Every body sums the attraction from every other body on its own.
    /// Evaluates each pair twice.
    #[default]
    Pairwise,
    /// Each unordered pair is evaluated once, and the opposite force is
    /// applied to the partner. Same physics, different rounding.
    Symmetric,
}

#[derive(Debug, Clone)]
pub struct Integrator {
    timestep: f64,
    summation: Summation,
    steps_taken: usize,
    // Indexed by BodyID; only meaningful for the most recent step
    forces: Vec<Vector2<f64>>,
}

impl Integrator {
    pub fn new(timestep: f64) -> Result<Self, ConstructionError> {
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(ConstructionError::InvalidTimestep(timestep));
        }

        Ok(Integrator {
            timestep,
            summation: Summation::default(),
            steps_taken: 0,
            forces: Vec::new(),
        })
    }

    pub fn with_summation(mut self, summation: Summation) -> Self {
        self.summation = summation;
        self
    }

    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    pub fn summation(&self) -> Summation {
        self.summation
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Simulated seconds elapsed.
    pub fn time(&self) -> f64 {
        self.steps_taken as f64 * self.timestep
    }

    /// Net forces from the last step, indexed by body slot.
    pub fn net_forces(&self) -> &[Vector2<f64>] {
        &self.forces
    }

    /// Advances the orrery by one timestep and returns the index of the step
    /// that was just taken.
    pub fn step(&mut self, orrery: &mut Orrery) -> Result<usize, SimulationError> {
        let step = self.steps_taken;
        self.accumulate_forces(orrery)
            .map_err(|source| SimulationError::Step { step, source })?;

        let dt = self.timestep;
        let bodies = orrery.bodies_mut();

        // Kick all velocities first, using forces from the old positions...
        for (body, force) in bodies.iter_mut().zip(self.forces.iter()) {
            body.velocity += force / body.mass() * dt;
        }

        // ...then drift with the updated velocities.
        for body in bodies.iter_mut().filter(|body| !body.is_fixed()) {
            body.position += body.velocity * dt;
        }

        self.steps_taken += 1;
        log::trace!("Finished step {} at t = {} s", step, self.time());
        Ok(step)
    }

    fn accumulate_forces(&mut self, orrery: &Orrery) -> Result<(), GravityError> {
        self.forces.clear();
        self.forces.resize(orrery.len(), Vector2::zeros());

        match self.summation {
            Summation::Pairwise => {
                for body in orrery.bodies() {
                    let mut total = Vector2::zeros();
                    for other in orrery.bodies() {
                        if body.id == other.id {
                            continue;
                        }
                        total += attraction(body, other)?;
                    }
                    self.forces[body.id.0] = total;
                }
            }
            Summation::Symmetric => {
                for body in orrery.bodies() {
                    for other in orrery.bodies().skip(body.id.0 + 1) {
                        let force = attraction(body, other)?;
                        self.forces[body.id.0] += force;
                        self.forces[other.id.0] -= force;
                    }
                }
            }
        }

        Ok(())
    }
}
