use serde::Serialize;
use uom::si::f64::Length;

use crate::support::{
    constraint::{ConstraintError, NonNegative},
    geo::{Coordinates, Elevation},
    units,
};

use super::TraceError;

/// A surveyed point at a known position along a trace.
///
/// Identity is positional: `index` is the point's position in its trace.
/// Points are read-only once built, except for the distance to the previous
/// point, which is recorded once while the owning trace is assembled.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracePoint {
    index: usize,
    coordinates: Coordinates,
    elevation: Elevation,
    distance_from_start: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    segment_distance: Option<f64>,
}

impl TracePoint {
    /// Creates a point `distance_from_start` meters along its trace.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::InvalidDistance`] if the distance is negative,
    /// infinite or `NaN`.
    pub fn new(
        index: usize,
        coordinates: Coordinates,
        elevation: Elevation,
        distance_from_start: f64,
    ) -> Result<Self, TraceError> {
        let distance_from_start = checked_distance(index, distance_from_start)?;

        Ok(Self {
            index,
            coordinates,
            elevation,
            distance_from_start,
            segment_distance: None,
        })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    #[must_use]
    pub fn elevation(&self) -> Elevation {
        self.elevation
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.coordinates.latitude()
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.coordinates.longitude()
    }

    #[must_use]
    pub fn elevation_meters(&self) -> f64 {
        self.elevation.meters()
    }

    /// Distance from the first point of the trace, in meters.
    #[must_use]
    pub fn distance_from_start(&self) -> f64 {
        self.distance_from_start
    }

    /// Distance from the first point of the trace.
    #[must_use]
    pub fn distance(&self) -> Length {
        units::meters(self.distance_from_start)
    }

    /// Distance to the previous point in meters, absent on the first point.
    #[must_use]
    pub fn segment_distance(&self) -> Option<f64> {
        self.segment_distance
    }

    /// Records the distance to the previous point.
    ///
    /// # Errors
    ///
    /// Fails if the distance is negative, infinite or `NaN`, or if it was
    /// already recorded.
    pub(super) fn record_segment_distance(&mut self, meters: f64) -> Result<(), TraceError> {
        if self.segment_distance.is_some() {
            return Err(TraceError::SegmentDistanceAlreadySet { index: self.index });
        }
        self.segment_distance = Some(checked_distance(self.index, meters)?);
        Ok(())
    }

    /// Copies this point to a new position, keeping its distance from start.
    pub(super) fn reindexed(&self, index: usize) -> Self {
        Self {
            index,
            segment_distance: None,
            ..self.clone()
        }
    }
}

/// Validates a distance in meters for the point at `index`.
fn checked_distance(index: usize, meters: f64) -> Result<f64, TraceError> {
    let invalid = |source| TraceError::InvalidDistance {
        index,
        value: meters,
        source,
    };
    let checked = NonNegative::new(meters).map_err(invalid)?.into_inner();
    if checked.is_infinite() {
        return Err(invalid(ConstraintError::Infinite));
    }
    Ok(checked)
}

/// Points are equal when index, coordinates and elevation all match.
impl PartialEq for TracePoint {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.coordinates == other.coordinates
            && self.elevation == other.elevation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(index: usize, distance: f64) -> TracePoint {
        TracePoint::new(
            index,
            Coordinates::new(-38.0, -68.0).unwrap(),
            Elevation::new(500.0).unwrap(),
            distance,
        )
        .unwrap()
    }

    #[test]
    fn rejects_negative_distance() {
        let result = TracePoint::new(
            3,
            Coordinates::new(0.0, 0.0).unwrap(),
            Elevation::new(0.0).unwrap(),
            -1.0,
        );
        assert_eq!(
            result,
            Err(TraceError::InvalidDistance {
                index: 3,
                value: -1.0,
                source: ConstraintError::Negative
            })
        );
    }

    #[test]
    fn rejects_infinite_distance() {
        let result = TracePoint::new(
            1,
            Coordinates::new(0.0, 0.0).unwrap(),
            Elevation::new(0.0).unwrap(),
            f64::INFINITY,
        );
        assert_eq!(
            result,
            Err(TraceError::InvalidDistance {
                index: 1,
                value: f64::INFINITY,
                source: ConstraintError::Infinite
            })
        );

        let mut p = point(2, 10.0);
        assert!(matches!(
            p.record_segment_distance(f64::INFINITY),
            Err(TraceError::InvalidDistance {
                source: ConstraintError::Infinite,
                ..
            })
        ));
        assert_eq!(p.segment_distance(), None);
    }

    #[test]
    fn segment_distance_is_recorded_once() {
        let mut p = point(1, 50.0);
        assert_eq!(p.segment_distance(), None);

        p.record_segment_distance(50.0).unwrap();
        assert_eq!(p.segment_distance(), Some(50.0));

        assert_eq!(
            p.record_segment_distance(10.0),
            Err(TraceError::SegmentDistanceAlreadySet { index: 1 })
        );
        assert_eq!(p.segment_distance(), Some(50.0));
    }

    #[test]
    fn equality_ignores_distance() {
        assert_eq!(point(2, 10.0), point(2, 99.0));
        assert_ne!(point(2, 10.0), point(3, 10.0));
    }

    #[test]
    fn reindexed_keeps_position() {
        let mut p = point(4, 120.0);
        p.record_segment_distance(20.0).unwrap();

        let moved = p.reindexed(7);
        assert_eq!(moved.index(), 7);
        assert_eq!(moved.distance_from_start(), 120.0);
        assert_eq!(moved.segment_distance(), None);
        assert_eq!(moved.coordinates(), p.coordinates());
    }
}
