use nalgebra::Vector2;

use super::error::SimulationError;
use super::integrator::Integrator;
use super::orrery::Orrery;
use super::snapshot::Snapshot;

mod observer;

pub use observer::{Observer, ObserverResult};

use observer::notify;

// Upper bound on the history reserved up front; longer runs grow it as they go
const HISTORY_RESERVE: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Stepped(usize),
    Finished,
}

#[derive(Debug)]
enum Status {
    NotStarted,
    Running,
    Finished,
    Failed(SimulationError),
}

/// Drives an [Orrery] through a fixed number of steps, keeping every snapshot
/// and handing each one to the registered observers.
///
/// A run of `max_step` takes steps `0..=max_step`.
pub struct Timeline {
    // Invariants:
    //   - history[k] is the state right after step k
    //   - once Finished or Failed, the orrery is never touched again
    orrery: Orrery,
    integrator: Integrator,
    max_step: usize,
    history: Vec<Snapshot>,
    observers: Vec<Box<dyn Observer>>,
    status: Status,
    initial_momentum: Vector2<f64>,
}

impl Timeline {
    pub fn new(orrery: Orrery, integrator: Integrator, max_step: usize) -> Self {
        let initial_momentum = orrery.total_momentum();
        Timeline {
            orrery,
            integrator,
            max_step,
            history: Vec::with_capacity(max_step.saturating_add(1).min(HISTORY_RESERVE)),
            observers: Vec::new(),
            status: Status::NotStarted,
            initial_momentum,
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.add_observer(Box::new(observer));
        self
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    pub fn max_step(&self) -> usize {
        self.max_step
    }

    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.history.last()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, Status::Finished)
    }

    pub fn error(&self) -> Option<&SimulationError> {
        match &self.status {
            Status::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Takes a single step. Once the run is over this keeps returning
    /// [StepOutcome::Finished], or the error that ended it.
    pub fn advance(&mut self) -> Result<StepOutcome, SimulationError> {
        if let Status::NotStarted = self.status {
            self.start();
        }
        match &self.status {
            Status::Finished => return Ok(StepOutcome::Finished),
            Status::Failed(err) => return Err(err.clone()),
            Status::NotStarted | Status::Running => {}
        }

        let step = match self.integrator.step(&mut self.orrery) {
            Ok(step) => step,
            Err(err) => {
                log::error!("{}", err);
                self.status = Status::Failed(err.clone());
                return Err(err);
            }
        };

        let snapshot = self.orrery.snapshot(step, self.integrator.time());
        notify(&mut self.observers, "step", |observer| {
            observer.on_step(&snapshot)
        });
        self.history.push(snapshot);

        if step >= self.max_step {
            self.finish();
        }
        Ok(StepOutcome::Stepped(step))
    }

    /// Runs every remaining step.
    pub fn run(&mut self) -> Result<(), SimulationError> {
        loop {
            if self.advance()? == StepOutcome::Finished {
                return Ok(());
            }
        }
    }

    fn start(&mut self) {
        log::info!(
            "Simulating {} bodies for steps 0..={} of {} s, {:?} summation",
            self.orrery.len(),
            self.max_step(),
            self.integrator.timestep(),
            self.integrator.summation()
        );

        let orrery = &self.orrery;
        notify(&mut self.observers, "start", |observer| {
            observer.on_start(orrery)
        });
        self.status = Status::Running;
    }

    fn finish(&mut self) {
        self.status = Status::Finished;

        let drift = self.orrery.total_momentum() - self.initial_momentum;
        log::info!(
            "Finished after {} steps ({:.2} simulated years); momentum drift {:.3e} kg m/s",
            self.history.len(),
            self.integrator.time() / crate::astro::SECONDS_PER_YEAR,
            drift.norm()
        );

        let history = &self.history;
        notify(&mut self.observers, "finish", |observer| {
            observer.on_finish(history)
        });
    }
}
