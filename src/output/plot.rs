use std::path::{Path, PathBuf};

use nalgebra::Point3;
use plotters::prelude::*;

use crate::astro::AU;
use crate::model::orrery::{BodyID, Orrery};
use crate::model::revolutions::RevolutionCounter;
use crate::model::snapshot::{trajectory, Snapshot};
use crate::model::timeline::{Observer, ObserverResult};

// Image size in pixels
const PLOT_SIZE: (u32, u32) = (800, 800);
// Both axes run from -PLOT_EXTENT to +PLOT_EXTENT, in AU
const PLOT_EXTENT: f64 = 6.0;

#[derive(Debug, Clone)]
struct PlottedBody {
    id: BodyID,
    name: String,
    color: RGBColor,
    fixed: bool,
}

/// Draws every trajectory into a PNG once the run is over.
///
/// Each planet is annotated with the farthest it got from the origin. If a
/// tracked body is given (and exists), the number of orbits it completed is
/// written in the corner.
pub struct OrbitPlot {
    path: PathBuf,
    tracked: Option<String>,
    bodies: Vec<PlottedBody>,
    counter: Option<RevolutionCounter>,
}

impl OrbitPlot {
    pub fn new(path: impl AsRef<Path>, tracked: Option<String>) -> Self {
        OrbitPlot {
            path: path.as_ref().to_owned(),
            tracked,
            bodies: Vec::new(),
            counter: None,
        }
    }

    pub fn revolutions(&self) -> Option<f64> {
        self.counter.as_ref().map(RevolutionCounter::revolutions)
    }

    fn title(&self) -> String {
        describe_orbits(self.bodies.iter().map(|b| (b.name.as_str(), b.fixed)))
    }

    fn years_caption(&self) -> Option<String> {
        let counter = self.counter.as_ref()?;
        let name = &self.bodies[counter.body().0].name;
        Some(format!(
            "Total {} Years: {:.2}",
            name,
            counter.revolutions()
        ))
    }

    fn draw(&self, history: &[Snapshot]) -> Result<(), Box<dyn std::error::Error>> {
        let extent = PLOT_EXTENT;

        let root = BitMapBackend::new(&self.path, PLOT_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(self.title(), ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(40)
            .build_cartesian_2d(-extent..extent, -extent..extent)?;

        chart.configure_mesh().x_desc("AU").y_desc("AU").draw()?;

        for body in self.bodies.iter() {
            let color = body.color;
            let points: Vec<(f64, f64)> = trajectory(history, body.id)
                .map(|p| (p.x / AU, p.y / AU))
                .collect();

            if body.fixed {
                chart
                    .draw_series(
                        points
                            .iter()
                            .take(1)
                            .map(|&p| Circle::new(p, 5, color.filled())),
                    )?
                    .label(body.name.as_str())
                    .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));
                continue;
            }

            chart
                .draw_series(LineSeries::new(points.iter().copied(), &color))?
                .label(body.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));

            let radius = |p: &(f64, f64)| p.0.hypot(p.1);
            if let Some(farthest) = points.iter().max_by(|a, b| radius(a).total_cmp(&radius(b))) {
                chart.draw_series(std::iter::once(Text::new(
                    format!("{:.2} AU", radius(farthest)),
                    *farthest,
                    ("sans-serif", 14).into_font().color(&color),
                )))?;
            }
        }

        if let Some(caption) = self.years_caption() {
            chart.draw_series(std::iter::once(Text::new(
                caption,
                (-0.95 * extent, -0.9 * extent),
                ("sans-serif", 16).into_font().color(&BLACK),
            )))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

/// "Orbits of Venus, Earth and Mars around the Sun", for whatever is in the
/// orrery.
pub fn orbits_title(orrery: &Orrery) -> String {
    describe_orbits(orrery.bodies().map(|b| (b.info.name.as_str(), b.is_fixed())))
}

fn describe_orbits<'a>(bodies: impl Iterator<Item = (&'a str, bool)>) -> String {
    let mut anchor = None;
    let mut names = Vec::new();
    for (name, fixed) in bodies {
        if fixed {
            anchor = Some(name);
        } else {
            names.push(name);
        }
    }

    let listed = match names.split_last() {
        None => String::from("nothing"),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    };

    match anchor {
        Some(anchor) => format!("Orbits of {} around the {}", listed, anchor),
        None => format!("Orbits of {}", listed),
    }
}

fn to_rgb(color: &Point3<f32>) -> RGBColor {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    RGBColor(channel(color.x), channel(color.y), channel(color.z))
}

impl Observer for OrbitPlot {
    fn name(&self) -> &str {
        "orbit plot"
    }

    fn on_start(&mut self, orrery: &Orrery) -> ObserverResult {
        self.bodies = orrery
            .bodies()
            .map(|body| PlottedBody {
                id: body.id,
                name: body.info.name.clone(),
                color: to_rgb(&body.info.color),
                fixed: body.is_fixed(),
            })
            .collect();

        self.counter = match &self.tracked {
            None => None,
            Some(name) => match orrery.find_body(name) {
                Some(id) => Some(RevolutionCounter::new(orrery, id)),
                None => {
                    log::warn!("No body named {}, not counting its orbits", name);
                    None
                }
            },
        };
        Ok(())
    }

    fn on_step(&mut self, snapshot: &Snapshot) -> ObserverResult {
        if let Some(counter) = self.counter.as_mut() {
            counter.observe(snapshot);
        }
        Ok(())
    }

    fn on_finish(&mut self, history: &[Snapshot]) -> ObserverResult {
        self.draw(history)?;
        log::info!("Saved orbit plot to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector2;

    use super::*;
    use crate::model::orrery::BodyInfo;
    use crate::scenario::inner_solar_system;

    #[test]
    fn test_title() {
        let mut plot = OrbitPlot::new("unused.png", None);
        plot.on_start(&inner_solar_system().unwrap()).unwrap();
        assert_eq!(
            plot.title(),
            "Orbits of Venus, Earth, Mars and Jupiter around the Sun"
        );

        let mut orrery = Orrery::new();
        orrery
            .add_body(BodyInfo::named("Lonely"), 1.0, Vector2::zeros(), Vector2::zeros())
            .unwrap();
        plot.on_start(&orrery).unwrap();
        assert_eq!(plot.title(), "Orbits of Lonely");
        assert_eq!(orbits_title(&orrery), "Orbits of Lonely");
    }

    #[test]
    fn test_orbits_title_follows_bodies() {
        let mut orrery = inner_solar_system().unwrap();
        assert_eq!(
            orbits_title(&orrery),
            "Orbits of Venus, Earth, Mars and Jupiter around the Sun"
        );

        orrery
            .add_body(
                BodyInfo::named("Ceres"),
                9.4e20,
                Vector2::new(2.77 * AU, 0.0),
                Vector2::new(0.0, 17_900.0),
            )
            .unwrap();
        assert_eq!(
            orbits_title(&orrery),
            "Orbits of Venus, Earth, Mars, Jupiter and Ceres around the Sun"
        );
    }

    #[test]
    fn test_to_rgb() {
        let color = to_rgb(&Point3::new(1.0, 0.5, 0.0));
        assert_eq!((color.0, color.1, color.2), (255, 128, 0));
    }

    #[test]
    fn test_tracks_named_body() {
        let orrery = inner_solar_system().unwrap();

        let mut plot = OrbitPlot::new("unused.png", Some("earth".to_owned()));
        plot.on_start(&orrery).unwrap();
        plot.on_step(&orrery.snapshot(0, 0.0)).unwrap();
        assert!(plot.revolutions().is_some());
        assert_eq!(
            plot.years_caption().unwrap(),
            "Total Earth Years: 1.00"
        );

        let mut plot = OrbitPlot::new("unused.png", Some("Pluto".to_owned()));
        plot.on_start(&orrery).unwrap();
        assert!(plot.revolutions().is_none());
        assert!(plot.years_caption().is_none());
    }
}
