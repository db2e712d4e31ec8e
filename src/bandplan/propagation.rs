//! Propagation helpers for the wavelength axis
//!
//! The velocity factor is a percentage: 100 is propagation in vacuum, 66 a
//! typical coaxial cable.

/// Speed of light in vacuum, m/s
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Velocity factor used when none is given
pub const DEFAULT_VELOCITY_FACTOR: f64 = 100.0;

/// Propagation speed in m/s for a velocity factor in percent.
pub fn speed_of_light(velocity_factor: f64) -> f64 {
    SPEED_OF_LIGHT * velocity_factor / 100.0
}

/// Velocity factor for a propagation speed, rounded up to two decimals.
pub fn velocity_factor_for_speed(speed: f64) -> f64 {
    (speed / SPEED_OF_LIGHT * 10_000.0).ceil() / 100.0
}

/// Whether `velocity_factor` is usable: `0 < vf <= 100`.
pub fn is_valid_velocity_factor(velocity_factor: f64) -> bool {
    velocity_factor > 0.0 && velocity_factor <= 100.0
}

/// Wavelength in metres of `freq` Hz at the given velocity factor.
pub fn wavelength(freq: f64, velocity_factor: f64) -> f64 {
    speed_of_light(velocity_factor) / freq
}
