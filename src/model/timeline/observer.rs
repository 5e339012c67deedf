use crate::model::orrery::Orrery;
use crate::model::snapshot::Snapshot;

pub type ObserverResult = Result<(), Box<dyn std::error::Error>>;

/// Something that consumes simulation state as it is produced: a renderer, a
/// log file, a plot.
///
/// Observers can fail without affecting the physics. A failing observer is
/// reported and then dropped from the run.
pub trait Observer {
    /// Short label used when reporting failures.
    fn name(&self) -> &str;

    /// Called once with the initial state, before the first step.
    fn on_start(&mut self, _orrery: &Orrery) -> ObserverResult {
        Ok(())
    }

    /// Called after every step, in step order.
    fn on_step(&mut self, snapshot: &Snapshot) -> ObserverResult;

    /// Called once after the final step with every snapshot of the run.
    fn on_finish(&mut self, _history: &[Snapshot]) -> ObserverResult {
        Ok(())
    }
}

/// Runs `f` on every observer, detaching the ones that fail.
pub(super) fn notify<F>(observers: &mut Vec<Box<dyn Observer>>, event: &str, mut f: F)
where
    F: FnMut(&mut dyn Observer) -> ObserverResult,
{
    observers.retain_mut(|observer| match f(observer.as_mut()) {
        Ok(()) => true,
        Err(err) => {
            log::error!(
                "{} failed during {}, detaching it: {}",
                observer.name(),
                event,
                err
            );
            false
        }
    });
}
