//! Physical constants and Newtonian gravity.
//!
//! Everything in here works in SI units: kilograms, meters and seconds.
//! [AU] is only provided so that callers can rescale positions for display.

mod gravity;

use std::f64::consts::PI;

pub use gravity::attraction;

// Newton's gravitational constant, in N m^2 / kg^2
pub const NEWTON_G: f64 = 6.6743e-11;

/// Mean Earth-Sun distance, in meters
pub const AU: f64 = 149.6e6 * 1000.0;

pub const SECONDS_PER_DAY: f64 = 3600.0 * 24.0;
pub const SECONDS_PER_WEEK: f64 = SECONDS_PER_DAY * 7.0;
pub const SECONDS_PER_YEAR: f64 = SECONDS_PER_DAY * 365.25;

/// A trait indicating this object can be used in physical computations that
/// require a massive body.
pub trait HasMass {
    /// The mass of this object, in kilograms
    fn mass(&self) -> f64;

    /// The standard gravitational parameter of this object
    fn mu(&self) -> f64 {
        NEWTON_G * self.mass()
    }
}

impl<T> HasMass for &T
where
    T: HasMass,
{
    fn mass(&self) -> f64 {
        (*self).mass()
    }
}

/// Speed needed for a circular orbit of the given radius around a primary with
/// gravitational parameter `mu`.
pub fn circular_velocity(radius: f64, mu: f64) -> f64 {
    (mu / radius).sqrt()
}

/// Kepler's third law.
pub fn orbital_period(semimajor_axis: f64, mu: f64) -> f64 {
    (4.0 * PI * PI * semimajor_axis.powi(3) / mu).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUN_MU: f64 = NEWTON_G * 1.98892e30;

    #[test]
    fn test_earth_orbit() {
        // Close to the value the default scenario starts Earth with
        approx::assert_relative_eq!(
            circular_velocity(AU, SUN_MU),
            29_783.0,
            max_relative = 1e-3
        );

        approx::assert_relative_eq!(
            orbital_period(AU, SUN_MU),
            SECONDS_PER_YEAR,
            max_relative = 1e-3
        );
    }

    #[test]
    fn test_week_length() {
        assert_eq!(SECONDS_PER_WEEK, 604_800.0);
    }
}
