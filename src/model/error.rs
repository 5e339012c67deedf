//! Errors raised while building or running a simulation.
//!
//! None of these are recoverable within a run: a [SimulationError] stops the
//! [Timeline](super::Timeline) for good.

use std::fmt;

/// A body or integrator was configured with values the physics can't work with.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructionError {
    /// Mass was zero, negative, or NaN.
    NonPositiveMass { name: String, mass: f64 },
    /// Only one body may be held in place.
    SecondAnchor { name: String, existing: String },
    /// Timestep was zero, negative, or not finite.
    InvalidTimestep(f64),
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::NonPositiveMass { name, mass } => {
                write!(f, "Body {} must have a positive mass, got {}", name, mass)
            }
            ConstructionError::SecondAnchor { name, existing } => write!(
                f,
                "Cannot fix {} in place, {} is already the anchor",
                name, existing
            ),
            ConstructionError::InvalidTimestep(dt) => {
                write!(f, "Timestep must be a positive number of seconds, got {}", dt)
            }
        }
    }
}

impl std::error::Error for ConstructionError {}

/// Failures of the pairwise force law.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GravityError {
    /// Attraction of a body to itself was requested.
    SelfInteraction { body: String },
    /// Two distinct bodies are at exactly the same position.
    Collision { first: String, second: String },
}

impl fmt::Display for GravityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GravityError::SelfInteraction { body } => {
                write!(f, "Attraction of object {} to itself requested", body)
            }
            GravityError::Collision { first, second } => {
                write!(f, "Collision between objects {} and {}", first, second)
            }
        }
    }
}

impl std::error::Error for GravityError {}

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    Construction(ConstructionError),
    /// The force computation for step `step` failed; no state was modified by
    /// that step.
    Step { step: usize, source: GravityError },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Construction(e) => write!(f, "Invalid simulation setup: {}", e),
            SimulationError::Step { step, source } => {
                write!(f, "Simulation aborted at step {}: {}", step, source)
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Construction(e) => Some(e),
            SimulationError::Step { source, .. } => Some(source),
        }
    }
}

impl From<ConstructionError> for SimulationError {
    fn from(e: ConstructionError) -> Self {
        SimulationError::Construction(e)
    }
}
