pub mod astro;
pub mod file;
pub mod gui;
pub mod math;
pub mod model;
pub mod output;
pub mod scenario;
