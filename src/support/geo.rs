//! Validated WGS84 value types.
//!
//! - [`Coordinates`]: a latitude/longitude pair with great-circle distance
//! - [`Elevation`]: an altitude in meters with unit conversions
//!
//! Both types validate on construction and are immutable afterwards;
//! arithmetic returns new, re-validated instances.
//!
//! ```
//! use trace_hydraulics::support::geo::{Coordinates, Elevation, GeoError};
//! use uom::si::length::meter;
//!
//! fn main() -> Result<(), GeoError> {
//!     let start = Coordinates::new(-38.233023, -68.629742)?;
//!     let end = Coordinates::new(-38.23531, -68.627113)?;
//!     let d = start.distance_to(&end).get::<meter>();
//!     assert!((d - 343.0).abs() < 1.0);
//!
//!     let drop = Elevation::new(545.0)?.subtract(Elevation::new(535.0)?)?;
//!     assert_eq!(drop.meters(), 10.0);
//!     Ok(())
//! }
//! ```

mod coordinates;
mod elevation;
mod error;

pub use coordinates::{Coordinates, DEFAULT_PRECISION, EARTH_RADIUS_METERS};
pub use elevation::{
    ELEVATION_EPSILON, Elevation, MAX_ELEVATION, MIN_ELEVATION, SEA_LEVEL_TOLERANCE,
};
pub use error::GeoError;
