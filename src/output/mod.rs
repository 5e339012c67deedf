//! Observers that turn snapshots into something a person can look at.

mod console;
mod plot;
mod state_log;

pub use console::ConsoleReport;
pub use plot::{orbits_title, OrbitPlot};
pub use state_log::{format_line, StateLog};
