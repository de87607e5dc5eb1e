use std::fmt;

use serde::Serialize;
use uom::si::f64::Length;

use crate::support::{
    constraint::{ClosedRange, RangeLimits},
    units,
};

use super::GeoError;

/// Mean Earth radius used by the Haversine formula, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Decimal places compared by `Coordinates` equality (~0.11 m).
pub const DEFAULT_PRECISION: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
struct LatitudeLimits;

impl RangeLimits<f64> for LatitudeLimits {
    fn min() -> f64 {
        -90.0
    }
    fn max() -> f64 {
        90.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LongitudeLimits;

impl RangeLimits<f64> for LongitudeLimits {
    fn min() -> f64 {
        -180.0
    }
    fn max() -> f64 {
        180.0
    }
}

/// A WGS84 latitude/longitude pair in decimal degrees.
///
/// Equality compares both components to [`DEFAULT_PRECISION`] decimal
/// places; use [`Coordinates::equals_with_precision`] for other tolerances.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates validated coordinates.
    ///
    /// # Errors
    ///
    /// Returns a [`GeoError`] if either component is `NaN`, infinite, or
    /// outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        let latitude = ClosedRange::<LatitudeLimits>::new(latitude)
            .map_err(|source| GeoError::Latitude {
                value: latitude,
                source,
            })?
            .into_inner();
        let longitude = ClosedRange::<LongitudeLimits>::new(longitude)
            .map_err(|source| GeoError::Longitude {
                value: longitude,
                source,
            })?
            .into_inner();
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other` using the Haversine formula.
    #[must_use]
    pub fn distance_to(&self, other: &Coordinates) -> Length {
        units::meters(self.distance_meters_to(other))
    }

    /// Great-circle distance to `other`, in meters.
    #[must_use]
    pub fn distance_meters_to(&self, other: &Coordinates) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_METERS * c
    }

    /// Compares both components to `decimals` decimal places.
    #[must_use]
    pub fn equals_with_precision(&self, other: &Coordinates, decimals: i32) -> bool {
        let epsilon = 10_f64.powi(-decimals);
        (self.latitude - other.latitude).abs() < epsilon
            && (self.longitude - other.longitude).abs() < epsilon
    }
}

impl PartialEq for Coordinates {
    fn eq(&self, other: &Self) -> bool {
        self.equals_with_precision(other, DEFAULT_PRECISION)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
