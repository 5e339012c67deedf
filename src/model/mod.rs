//! The physics model: a registry of bodies, the integrator that moves them, and
//! the timeline that runs the integrator and fans its output out to observers.

pub mod error;
pub mod integrator;
pub mod orrery;
pub mod revolutions;
pub mod snapshot;
pub mod timeline;

pub use error::{ConstructionError, GravityError, SimulationError};
pub use integrator::{Integrator, Summation};
pub use orrery::{Body, BodyID, BodyInfo, Orrery};
pub use revolutions::RevolutionCounter;
pub use snapshot::{BodySnapshot, Snapshot};
pub use timeline::{Observer, ObserverResult, StepOutcome, Timeline};
