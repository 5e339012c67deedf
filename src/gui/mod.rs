//! Live 2D animation of a run.
//!
//! Every frame advances the [Timeline] by a few steps and moves each body's
//! circle to its new position, leaving a trail behind. Observers attached to
//! the timeline (log file, plot) run exactly as they would headless.

use kiss3d::event::EventManager;
use kiss3d::window::{State, Window};

use self::controller::Controller;
use self::view::{RunState, View};
use crate::model::orrery::BodyID;
use crate::model::timeline::{StepOutcome, Timeline};

mod controller;
mod view;

pub struct Simulation {
    timeline: Timeline,
    view: View,
    controller: Controller,
}

impl Simulation {
    pub fn new(timeline: Timeline, window: &mut Window, tracked: Option<BodyID>) -> Self {
        window.set_background_color(0.0, 0.0, 0.0);
        let view = View::new(timeline.orrery(), window, tracked);
        Self {
            timeline,
            view,
            controller: Controller::new(),
        }
    }

    fn process_user_input(&mut self, mut events: EventManager) {
        // Process events
        for event in events.iter() {
            self.controller.process_event(event);
        }
    }

    fn advance_physics(&mut self) {
        for _ in 0..self.controller.steps_per_frame() {
            match self.timeline.advance() {
                Ok(StepOutcome::Stepped(_)) => {
                    if let Some(snapshot) = self.timeline.latest() {
                        self.view.record(snapshot);
                    }
                }
                // Errors are already reported by the timeline; keep showing
                // the last good state.
                Ok(StepOutcome::Finished) | Err(_) => break,
            }
        }
    }

    fn run_state(&self) -> RunState {
        if self.timeline.error().is_some() {
            RunState::Failed
        } else if self.timeline.is_finished() {
            RunState::Finished
        } else if self.controller.is_paused() {
            RunState::Paused
        } else {
            RunState::Running
        }
    }
}

impl State for Simulation {
    fn step(&mut self, window: &mut Window) {
        self.process_user_input(window.events());
        if self.run_state() == RunState::Running {
            self.advance_physics();
        }
        let state = self.run_state();
        self.view.prerender_scene(window, &self.controller, state);
        self.controller.increment_frame_counter();
    }
}
