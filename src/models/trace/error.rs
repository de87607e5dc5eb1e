use thiserror::Error;

use crate::support::{constraint::ConstraintError, geo::GeoError};

/// Errors that can occur while building or resampling a trace.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    /// A trace needs at least one point.
    #[error("trace has no points")]
    Empty,

    /// A point's index does not match its position in the trace.
    #[error("point at position {position} has index {index}")]
    IndexMismatch { position: usize, index: usize },

    /// Distance from start went backwards between two consecutive points.
    #[error("distance decreases at index {index}: {distance} m after {previous} m")]
    DistanceDecreased {
        index: usize,
        previous: f64,
        distance: f64,
    },

    /// A distance (from start, or to the previous point) is negative, infinite or `NaN`.
    #[error("invalid distance {value} m at index {index}")]
    InvalidDistance {
        index: usize,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The distance to the previous point can only be recorded once.
    #[error("segment distance already recorded for point {index}")]
    SegmentDistanceAlreadySet { index: usize },

    /// The resampling interval is not a positive number.
    #[error("resampling interval {value} must be a positive number")]
    InvalidInterval {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// A raw survey point has out-of-range coordinates or elevation.
    #[error("invalid survey point {index}")]
    SurveyPoint {
        index: usize,
        #[source]
        source: GeoError,
    },

    /// An interpolated position fell outside the valid geographic ranges.
    #[error(transparent)]
    Geo(#[from] GeoError),
}
