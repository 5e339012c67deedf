use std::collections::HashMap;

use kiss3d::scene::PlanarSceneNode;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3, Translation2, Vector2};

use super::controller::Controller;
use crate::astro::{AU, SECONDS_PER_WEEK};
use crate::model::orrery::{Body, BodyID, Orrery};
use crate::model::revolutions::RevolutionCounter;
use crate::model::snapshot::Snapshot;

const PIXELS_PER_AU: f64 = 75.0;
const TRAIL_DIMMING: f32 = 0.6;

/// How far along the run is, for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
    Finished,
    Failed,
}

pub struct View {
    body_circles: HashMap<BodyID, PlanarSceneNode>,
    trails: HashMap<BodyID, Vec<Point2<f32>>>,
    trail_colors: HashMap<BodyID, Point3<f32>>,
    counter: Option<RevolutionCounter>,
    latest_step: Option<usize>,
    time: f64,
}

impl View {
    pub fn new(orrery: &Orrery, window: &mut Window, tracked: Option<BodyID>) -> Self {
        let mut body_circles = HashMap::new();
        let mut trails = HashMap::new();
        let mut trail_colors = HashMap::new();
        for body in orrery.bodies() {
            let circle = Self::create_body_object(window, body);
            body_circles.insert(body.id, circle);
            trails.insert(body.id, vec![to_screen(&body.position())]);
            trail_colors.insert(body.id, Point3::from(body.info.color.coords * TRAIL_DIMMING));
        }

        View {
            body_circles,
            trails,
            trail_colors,
            counter: tracked.map(|id| RevolutionCounter::new(orrery, id)),
            latest_step: None,
            time: 0.0,
        }
    }

    fn create_body_object(window: &mut Window, body: &Body) -> PlanarSceneNode {
        let mut circle = window.add_circle(body.info.radius);
        let color = &body.info.color;
        circle.set_color(color.x, color.y, color.z);
        circle.set_local_translation(Translation2::from(to_screen(&body.position()).coords));
        circle
    }

    /// Moves everything to where the snapshot says it is.
    pub fn record(&mut self, snapshot: &Snapshot) {
        for body in snapshot.bodies.iter() {
            let point = to_screen(&body.position);
            if let Some(circle) = self.body_circles.get_mut(&body.id) {
                circle.set_local_translation(Translation2::from(point.coords));
            }
            // The anchor never moves, no point in a trail
            if !body.fixed {
                if let Some(trail) = self.trails.get_mut(&body.id) {
                    trail.push(point);
                }
            }
        }

        if let Some(counter) = self.counter.as_mut() {
            counter.observe(snapshot);
        }
        self.latest_step = Some(snapshot.step);
        self.time = snapshot.time;
    }

    pub fn prerender_scene(&mut self, window: &mut Window, controller: &Controller, state: RunState) {
        for (id, trail) in self.trails.iter() {
            let color = &self.trail_colors[id];
            for segment in trail.windows(2) {
                window.draw_planar_line(&segment[0], &segment[1], color);
            }
        }

        let default_font = kiss3d::text::Font::default();
        let text_color = Point3::new(1.0, 1.0, 1.0);
        window.draw_text(
            &self.left_hand_text(),
            &Point2::origin(),
            50.0,
            &default_font,
            &text_color,
        );
        window.draw_text(
            &status_text(state, controller.steps_per_frame(), controller.fps()),
            // kiss3d text coordinates are in physical pixels
            &Point2::new(window.width() as f32 * 2.0 - 500.0, 0.0),
            50.0,
            &default_font,
            &text_color,
        );
    }

    fn left_hand_text(&self) -> String {
        let week = match self.latest_step {
            Some(step) => step.to_string(),
            None => String::from("-"),
        };
        let mut text = format!(
            "Week: {}\nElapsed: {:.1} weeks",
            week,
            self.time / SECONDS_PER_WEEK
        );
        if let Some(counter) = &self.counter {
            text.push_str(&format!("\nYears: {}", counter.completed()));
        }
        text
    }
}

fn status_text(state: RunState, steps_per_frame: usize, fps: f64) -> String {
    let state = match state {
        RunState::Running => "Running",
        RunState::Paused => "Paused",
        RunState::Finished => "Finished",
        RunState::Failed => "Stopped (see log)",
    };
    format!(
        "{}\nSpeed: {} steps/frame\nFPS: {:.0}",
        state, steps_per_frame, fps
    )
}

fn to_screen(position: &Vector2<f64>) -> Point2<f32> {
    let scaled = position / AU * PIXELS_PER_AU;
    Point2::new(scaled.x as f32, scaled.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_screen() {
        assert_eq!(to_screen(&Vector2::new(AU, -2.0 * AU)), Point2::new(75.0, -150.0));
        assert_eq!(to_screen(&Vector2::zeros()), Point2::origin());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            status_text(RunState::Paused, 4, 59.6),
            "Paused\nSpeed: 4 steps/frame\nFPS: 60"
        );
    }
}
