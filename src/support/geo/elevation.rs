use std::{cmp::Ordering, fmt};

use serde::Serialize;
use uom::si::{f64::Length, length::kilometer};

use crate::support::{
    constraint::{ClosedRange, RangeLimits},
    units,
};

use super::GeoError;

/// Lowest accepted elevation, in meters.
pub const MIN_ELEVATION: f64 = -500.0;

/// Highest accepted elevation, in meters.
pub const MAX_ELEVATION: f64 = 9000.0;

/// Tolerance used by `Elevation` equality, in meters.
pub const ELEVATION_EPSILON: f64 = 0.01;

/// Band around zero treated as sea level, in meters.
pub const SEA_LEVEL_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ElevationLimits;

impl RangeLimits<f64> for ElevationLimits {
    fn min() -> f64 {
        MIN_ELEVATION
    }
    fn max() -> f64 {
        MAX_ELEVATION
    }
}

/// Altitude above mean sea level, in meters.
///
/// Two elevations are equal when they differ by less than one centimeter.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Elevation {
    meters: f64,
}

impl Elevation {
    /// Creates a validated elevation.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Elevation`] if the value is `NaN`, infinite, or
    /// outside `[-500, 9000]` meters.
    pub fn new(meters: f64) -> Result<Self, GeoError> {
        let meters = ClosedRange::<ElevationLimits>::new(meters)
            .map_err(|source| GeoError::Elevation {
                value: meters,
                source,
            })?
            .into_inner();
        Ok(Self { meters })
    }

    #[must_use]
    pub fn meters(&self) -> f64 {
        self.meters
    }

    #[must_use]
    pub fn length(&self) -> Length {
        units::meters(self.meters)
    }

    /// Elevation in feet, using the fixed survey factor
    /// [`FEET_PER_METER`](units::FEET_PER_METER).
    #[must_use]
    pub fn feet(&self) -> f64 {
        self.meters * units::FEET_PER_METER
    }

    #[must_use]
    pub fn kilometers(&self) -> f64 {
        self.length().get::<kilometer>()
    }

    /// Elevation in statute miles, using the fixed survey factor
    /// [`MILES_PER_METER`](units::MILES_PER_METER).
    #[must_use]
    pub fn miles(&self) -> f64 {
        self.meters * units::MILES_PER_METER
    }

    /// Returns `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Elevation`] if the sum leaves the valid range.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Elevation) -> Result<Self, GeoError> {
        Self::new(self.meters + other.meters)
    }

    /// Returns `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Elevation`] if the difference leaves the valid range.
    pub fn subtract(self, other: Elevation) -> Result<Self, GeoError> {
        Self::new(self.meters - other.meters)
    }

    /// Signed difference `self - other` in meters, without range checks.
    #[must_use]
    pub fn difference(&self, other: &Elevation) -> f64 {
        self.meters - other.meters
    }

    #[must_use]
    pub fn is_near_sea_level(&self) -> bool {
        self.meters.abs() <= SEA_LEVEL_TOLERANCE
    }

    #[must_use]
    pub fn is_higher_than(&self, other: &Elevation) -> bool {
        self.partial_cmp(other) == Some(Ordering::Greater)
    }
}

impl PartialEq for Elevation {
    fn eq(&self, other: &Self) -> bool {
        (self.meters - other.meters).abs() < ELEVATION_EPSILON
    }
}

/// Orders by altitude, treating values within [`ELEVATION_EPSILON`] as equal.
impl PartialOrd for Elevation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.meters.partial_cmp(&other.meters)
        }
    }
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m", self.meters)
    }
}
