//! Unit conversions used by the hydraulic model.
//!
//! Geometric quantities (distances, elevations) are exposed as [`uom`]
//! lengths so callers can pick their own units. The hydraulic calculation
//! itself works in the mixed oilfield units used on site (m³/h, barrels per
//! minute, kg/cm², PSI, feet of hose), and its conversion factors are fixed
//! calibration values rather than exact SI ratios. They live here so every
//! formula uses the same figures.

use uom::si::{f64::Length, length::meter};

/// Cubic meters per hour to barrels per minute.
pub const M3H_TO_BPM: f64 = 0.1048;

/// Kilograms-force per square centimeter to pounds-force per square inch.
pub const KGCM2_TO_PSI: f64 = 14.2233;

/// Meters in a statute mile, as used by the friction formula.
pub const METERS_PER_MILE: f64 = 1609.34;

/// Feet in a statute mile.
pub const FEET_PER_MILE: f64 = 5280.0;

/// Feet per meter, as quoted on survey reports.
pub const FEET_PER_METER: f64 = 3.28084;

/// Statute miles per meter, as quoted on survey reports.
pub const MILES_PER_METER: f64 = 0.000_621_371;

/// Hose length that friction coefficients are quoted for, in feet.
pub const FRICTION_REFERENCE_FEET: f64 = 100.0;

/// Number of friction reference lengths (100 ft) in the given distance.
#[must_use]
pub fn friction_lengths(distance_meters: f64) -> f64 {
    (distance_meters / METERS_PER_MILE) * (FEET_PER_MILE / FRICTION_REFERENCE_FEET)
}

/// Wraps a raw distance in meters as a [`Length`].
#[must_use]
pub fn meters(value: f64) -> Length {
    Length::new::<meter>(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::{foot, kilometer};

    #[test]
    fn one_mile_is_fifty_two_friction_lengths() {
        assert_relative_eq!(friction_lengths(METERS_PER_MILE), 52.8);
        assert_eq!(friction_lengths(0.0), 0.0);
    }

    #[test]
    fn meters_round_trip_through_uom() {
        let d = meters(1500.0);
        assert_relative_eq!(d.get::<kilometer>(), 1.5);
        assert_relative_eq!(d.get::<foot>(), 4921.259_842_519_685, epsilon = 1e-9);
    }
}
