use serde::Serialize;

use super::TracePoint;

/// Elevation statistics over every point of a trace, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElevationProfile {
    /// Lowest elevation along the trace.
    pub min: f64,

    /// Highest elevation along the trace.
    pub max: f64,

    /// Elevation of the first point.
    pub start: f64,

    /// Elevation of the last point.
    pub end: f64,

    /// Net change from start to end (`end - start`).
    pub difference: f64,
}

impl ElevationProfile {
    /// Builds the profile of a non-empty point slice.
    pub(super) fn from_points(first: &TracePoint, rest: &[TracePoint]) -> Self {
        let start = first.elevation_meters();
        let (min, max, end) = rest.iter().fold((start, start, start), |(min, max, _), p| {
            let e = p.elevation_meters();
            (min.min(e), max.max(e), e)
        });

        Self {
            min,
            max,
            start,
            end,
            difference: end - start,
        }
    }

    /// Spread between the highest and lowest points.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
