use std::path::PathBuf;

use clap::Parser;
use rust_orbits::astro::{circular_velocity, orbital_period, HasMass, AU, SECONDS_PER_WEEK};
use rust_orbits::file::read_file;
use rust_orbits::scenario::inner_solar_system;

/// Prints the starting conditions of a body, and what a perfect Keplerian
/// orbit around the anchor would look like from there.
#[derive(Debug, Parser)]
struct Args {
    name: String,

    /// Body table to read instead of the built-in inner solar system
    #[arg(long)]
    bodies: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let orrery = match &args.bodies {
        Some(path) => read_file(path)?,
        None => inner_solar_system()?,
    };

    let id = match orrery.find_body(&args.name) {
        Some(id) => id,
        None => anyhow::bail!("No body named {}", args.name),
    };
    let body = orrery.get_body(id);

    println!("Starting conditions for {}", body.info.name);
    println!("- Mass: {:e} kg", body.mass());
    println!(
        "- Position: ({:.3}, {:.3}) AU",
        body.position().x / AU,
        body.position().y / AU
    );
    println!("- Speed: {:.1} m/s", body.velocity().norm());

    let anchor = match orrery.anchor() {
        Some(anchor) if anchor != id => orrery.get_body(anchor),
        _ => {
            println!("- Not orbiting anything");
            return Ok(());
        }
    };

    let radius = (body.position() - anchor.position()).norm();
    let mu = anchor.mu();
    println!("- Distance to {}: {:.3} AU", anchor.info.name, radius / AU);
    println!(
        "- Circular orbit speed: {:.1} m/s",
        circular_velocity(radius, mu)
    );
    println!(
        "- Circular orbit period: {:.2} weeks",
        orbital_period(radius, mu) / SECONDS_PER_WEEK
    );
    Ok(())
}
