use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kiss3d::light::Light;
use kiss3d::window::Window;

use rust_orbits::astro::SECONDS_PER_WEEK;
use rust_orbits::file::read_file;
use rust_orbits::gui::Simulation;
use rust_orbits::model::{Integrator, Orrery, Summation, Timeline};
use rust_orbits::output::{orbits_title, ConsoleReport, OrbitPlot, StateLog};
use rust_orbits::scenario::inner_solar_system;

/// Simulates planets orbiting a star, one fixed timestep at a time.
#[derive(Debug, Parser)]
#[command(name = "rust-orbits")]
struct Args {
    /// Body table to load instead of the built-in inner solar system
    #[arg(long)]
    bodies: Option<PathBuf>,

    /// Length of one step, in seconds
    #[arg(long, default_value_t = SECONDS_PER_WEEK)]
    timestep: f64,

    /// Index of the last step; the run takes max_step + 1 steps
    #[arg(long, default_value_t = 620)]
    max_step: usize,

    /// Text file that receives one line per step
    #[arg(long, default_value = "planetary-orbits.txt")]
    log: PathBuf,

    /// PNG the final orbits are drawn into
    #[arg(long, default_value = "planetary-orbits.png")]
    plot: PathBuf,

    /// Body whose completed orbits are counted
    #[arg(long, default_value = "Earth")]
    track: String,

    /// Evaluate each pair of bodies once instead of twice per step
    #[arg(long)]
    symmetric: bool,

    /// Run without opening a window
    #[arg(long)]
    headless: bool,

    /// Don't print the per-step table
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let orrery = load_orrery(&args)?;
    let summation = match args.symmetric {
        true => Summation::Symmetric,
        false => Summation::Pairwise,
    };
    let integrator = Integrator::new(args.timestep)?.with_summation(summation);
    let tracked = orrery.find_body(&args.track);
    let title = orbits_title(&orrery);

    let mut timeline = Timeline::new(orrery, integrator, args.max_step);
    if !args.quiet {
        timeline.add_observer(Box::new(ConsoleReport::stdout()));
    }
    // A log we can't write shouldn't stop the simulation
    match StateLog::create(&args.log) {
        Ok(state_log) => {
            log::info!("Logging every step to {}", state_log.path().display());
            timeline.add_observer(Box::new(state_log));
        }
        Err(err) => log::error!("Not logging to {}: {}", args.log.display(), err),
    }
    timeline.add_observer(Box::new(OrbitPlot::new(&args.plot, Some(args.track.clone()))));

    if args.headless {
        timeline.run()?;
        return Ok(());
    }

    let mut window = Window::new(&title);
    window.set_light(Light::StickToCamera);
    window.set_framerate_limit(Some(60));

    let simulation = Simulation::new(timeline, &mut window, tracked);
    window.render_loop(simulation);
    Ok(())
}

fn load_orrery(args: &Args) -> anyhow::Result<Orrery> {
    let orrery = match &args.bodies {
        Some(path) => read_file(path)
            .with_context(|| format!("Could not load bodies from {}", path.display()))?,
        None => inner_solar_system()?,
    };
    Ok(orrery)
}
