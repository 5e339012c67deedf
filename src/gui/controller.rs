use std::collections::VecDeque;
use std::time::{Duration, Instant};

use kiss3d::event::{Action, Event, Key, WindowEvent};

// Key config, all in one place
const KEY_SPEED_UP: Key = Key::Period;
const KEY_SLOW_DOWN: Key = Key::Comma;
const KEY_RESET_SPEED: Key = Key::R;
const KEY_TOGGLE_PAUSE: Key = Key::Space;

const MAX_STEPS_PER_FRAME: usize = 64;

/// Turns key presses into playback settings: how many physics steps each
/// frame takes, and whether the run is paused.
pub struct Controller {
    steps_per_frame: usize,
    paused: bool,
    frame_times: FrameTimes,
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            steps_per_frame: 1,
            paused: false,
            frame_times: FrameTimes::new(Duration::from_secs(1)),
        }
    }

    pub fn process_event(&mut self, event: Event) {
        match event.value {
            WindowEvent::Key(KEY_SPEED_UP, Action::Press, _) => self.speed_up(),
            WindowEvent::Key(KEY_SLOW_DOWN, Action::Press, _) => self.slow_down(),
            WindowEvent::Key(KEY_RESET_SPEED, Action::Press, _) => {
                self.steps_per_frame = 1;
                log::info!("Running 1 step per frame");
            }
            WindowEvent::Key(KEY_TOGGLE_PAUSE, Action::Press, _) => {
                self.paused = !self.paused;
            }
            _ => {}
        }
    }

    fn speed_up(&mut self) {
        self.steps_per_frame = (self.steps_per_frame * 2).min(MAX_STEPS_PER_FRAME);
        log::info!("Running {} steps per frame", self.steps_per_frame);
    }

    fn slow_down(&mut self) {
        self.steps_per_frame = (self.steps_per_frame / 2).max(1);
        log::info!("Running {} steps per frame", self.steps_per_frame);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn steps_per_frame(&self) -> usize {
        self.steps_per_frame
    }

    pub fn fps(&self) -> f64 {
        self.frame_times.fps()
    }

    pub fn increment_frame_counter(&mut self) {
        self.frame_times.push(Instant::now());
    }
}

/// Timestamps of the frames drawn within a trailing window.
struct FrameTimes {
    window: Duration,
    frames: VecDeque<Instant>,
}

impl FrameTimes {
    fn new(window: Duration) -> Self {
        FrameTimes {
            window,
            frames: VecDeque::new(),
        }
    }

    fn push(&mut self, now: Instant) {
        self.frames.push_back(now);
        while let Some(&oldest) = self.frames.front() {
            if now.duration_since(oldest) <= self.window {
                break;
            }
            self.frames.pop_front();
        }
    }

    fn fps(&self) -> f64 {
        // Need two frames to measure anything
        match (self.frames.front(), self.frames.back()) {
            (Some(first), Some(last)) if self.frames.len() > 1 => {
                let span = last.duration_since(*first).as_secs_f64();
                (self.frames.len() - 1) as f64 / span
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_limits() {
        let mut controller = Controller::new();
        assert_eq!(controller.steps_per_frame(), 1);

        controller.slow_down();
        assert_eq!(controller.steps_per_frame(), 1);

        for _ in 0..10 {
            controller.speed_up();
        }
        assert_eq!(controller.steps_per_frame(), MAX_STEPS_PER_FRAME);

        controller.slow_down();
        assert_eq!(controller.steps_per_frame(), MAX_STEPS_PER_FRAME / 2);
    }

    #[test]
    fn test_frame_times() {
        let start = Instant::now();
        let mut frames = FrameTimes::new(Duration::from_secs(1));
        assert_eq!(frames.fps(), 0.0);

        // 50 frames, 20ms apart
        for i in 0..50 {
            frames.push(start + Duration::from_millis(20 * i));
        }
        approx::assert_relative_eq!(frames.fps(), 50.0, max_relative = 1e-9);

        // Old frames fall out of the window
        frames.push(start + Duration::from_secs(10));
        assert_eq!(frames.frames.len(), 1);
        assert_eq!(frames.fps(), 0.0);
    }
}
