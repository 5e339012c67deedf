use std::f64::consts::PI;
use std::fs;

use approx::assert_relative_eq;
use nalgebra::Vector2;
use rust_orbits::astro::{AU, SECONDS_PER_WEEK};
use rust_orbits::file::read_file;
use rust_orbits::math::geometry::swept_angle;
use rust_orbits::model::snapshot::trajectory;
use rust_orbits::model::{BodyInfo, Integrator, Observer, Orrery, Summation, Timeline};
use rust_orbits::output::{OrbitPlot, StateLog};
use rust_orbits::scenario::inner_solar_system;

fn sun_and_earth() -> Orrery {
    let mut orrery = Orrery::new();
    orrery
        .add_fixed_body(
            BodyInfo::named("Sun"),
            1.98892e30,
            Vector2::zeros(),
            Vector2::zeros(),
        )
        .unwrap();
    orrery
        .add_body(
            BodyInfo::named("Earth"),
            5.9742e24,
            Vector2::new(AU, 0.0),
            Vector2::new(0.0, 29_783.0),
        )
        .unwrap();
    orrery
}

fn weekly(orrery: Orrery, max_step: usize) -> Timeline {
    Timeline::new(orrery, Integrator::new(SECONDS_PER_WEEK).unwrap(), max_step)
}

/// Weekly steps for a year should take the Earth almost exactly once around
/// the Sun, despite the drift that comes with Euler integration.
#[test]
fn test_earth_year() {
    let orrery = sun_and_earth();
    let earth = orrery.find_body("Earth").unwrap();
    let start = orrery.get_body(earth).position();

    // max_step = 51 is 52 steps
    let mut timeline = weekly(orrery, 51);
    timeline.run().unwrap();
    assert_eq!(timeline.history().len(), 52);

    let path = std::iter::once(start).chain(trajectory(timeline.history(), earth));
    assert_relative_eq!(swept_angle(path), 2.0 * PI, max_relative = 0.03);

    // And it's still on a roughly circular orbit
    let end = timeline.orrery().get_body(earth).position();
    assert_relative_eq!(end.norm(), AU, max_relative = 0.02);
}

#[test]
fn test_runs_are_deterministic() {
    let run = || {
        let mut timeline = weekly(inner_solar_system().unwrap(), 100);
        timeline.run().unwrap();
        timeline.history().to_vec()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_full_preset_run() {
    let orrery = inner_solar_system().unwrap();
    let sun = orrery.anchor().unwrap();
    let jupiter = orrery.find_body("Jupiter").unwrap();
    let jupiter_start = orrery.get_body(jupiter).position();

    let mut timeline = weekly(orrery, 620);
    timeline.run().unwrap();
    assert!(timeline.is_finished());
    assert_eq!(timeline.history().len(), 621);

    // The Sun is held in place, but is still being pulled around
    let sun_body = timeline.orrery().get_body(sun);
    assert_eq!(sun_body.position(), Vector2::zeros());
    assert!(sun_body.velocity().norm() > 0.0);
    for snapshot in timeline.history() {
        assert_eq!(snapshot.get(sun).unwrap().position, Vector2::zeros());
    }

    // 621 weeks is just about one Jupiter year
    let path = std::iter::once(jupiter_start).chain(trajectory(timeline.history(), jupiter));
    assert_relative_eq!(swept_angle(path), 2.0 * PI, max_relative = 0.05);
}

#[test]
fn test_symmetric_summation_matches() {
    let mut pairwise = weekly(inner_solar_system().unwrap(), 200);
    let mut symmetric = Timeline::new(
        inner_solar_system().unwrap(),
        Integrator::new(SECONDS_PER_WEEK)
            .unwrap()
            .with_summation(Summation::Symmetric),
        200,
    );
    pairwise.run().unwrap();
    symmetric.run().unwrap();

    let (a, b) = (pairwise.latest().unwrap(), symmetric.latest().unwrap());
    for (x, y) in a.bodies.iter().zip(b.bodies.iter()) {
        approx::assert_abs_diff_eq!(x.position, y.position, epsilon = 1e-6 * AU);
    }
}

#[test]
fn test_state_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orbits.txt");

    let state_log = StateLog::create(&path).unwrap();
    let mut timeline = weekly(sun_and_earth(), 9).with_observer(state_log);
    timeline.run().unwrap();
    // Drop the timeline so the file is closed
    drop(timeline);

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(lines[0].starts_with("Week:   0  Sun    Position =  0.00   0.00"));
    assert!(lines[9].starts_with("Week:   9  Sun "));
    assert!(lines[9].contains(" | Week:   9  Earth   Position ="));
}

#[test]
fn test_orbit_plot_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orbits.png");

    let orrery = inner_solar_system().unwrap();
    let mut plot = OrbitPlot::new(&path, Some("Earth".to_owned()));
    plot.on_start(&orrery).unwrap();

    let mut timeline = weekly(orrery, 620);
    timeline.run().unwrap();
    for snapshot in timeline.history() {
        plot.on_step(snapshot).unwrap();
    }
    plot.on_finish(timeline.history()).unwrap();

    let metadata = fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);

    // 621 weeks is a little under 12 years, and Euler loses a bit more
    let years = plot.revolutions().unwrap();
    assert!((11.5..12.1).contains(&years), "counted {} years", years);
}

#[test]
fn test_data_file_loads() {
    let orrery = read_file(concat!(env!("CARGO_MANIFEST_DIR"), "/solar-bodies.txt")).unwrap();
    assert_eq!(orrery.len(), 5);
    assert_eq!(orrery.anchor(), orrery.find_body("Sun"));
}
