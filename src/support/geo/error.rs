use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised when a geographic value is out of range.
///
/// Each variant keeps the rejected raw value and the underlying
/// [`ConstraintError`] describing which bound was violated.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("invalid latitude {value}: must be a finite value within [-90, 90]")]
    Latitude {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid longitude {value}: must be a finite value within [-180, 180]")]
    Longitude {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid elevation {value} m: must be a finite value within [-500, 9000]")]
    Elevation {
        value: f64,
        #[source]
        source: ConstraintError,
    },
}
