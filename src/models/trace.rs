//! The surveyed pipeline path.
//!
//! A [`Trace`] is an ordered, non-empty sequence of [`TracePoint`]s. Each
//! point knows its position in the sequence and its distance from the start
//! of the path. Construction enforces two invariants:
//!
//! - `points[i].index() == i` for every point
//! - `distance_from_start` never decreases along the sequence
//!
//! A trace owns its points and never changes after construction. Resampling
//! and range queries return new collections or borrowed slices.

mod error;
mod point;
mod profile;
mod resample;
mod survey;

pub use error::TraceError;
pub use point::TracePoint;
pub use profile::ElevationProfile;
pub use survey::SurveyPoint;

use serde::Serialize;
use uom::si::f64::Length;

use crate::support::{
    constraint::NonNegative,
    geo::{Coordinates, Elevation},
    units,
};

/// An ordered, distance-indexed sequence of surveyed points.
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    points: Vec<TracePoint>,
}

impl Trace {
    /// Creates a trace from points that already carry their distances.
    ///
    /// # Errors
    ///
    /// Returns a [`TraceError`] if `points` is empty, if any index differs
    /// from its position, or if the distance from start ever decreases.
    pub fn new(points: Vec<TracePoint>) -> Result<Self, TraceError> {
        if points.is_empty() {
            return Err(TraceError::Empty);
        }

        if let Some((position, point)) = points
            .iter()
            .enumerate()
            .find(|(position, point)| point.index() != *position)
        {
            return Err(TraceError::IndexMismatch {
                position,
                index: point.index(),
            });
        }

        if let Some(pair) = points
            .windows(2)
            .find(|pair| pair[1].distance_from_start() < pair[0].distance_from_start())
        {
            return Err(TraceError::DistanceDecreased {
                index: pair[1].index(),
                previous: pair[0].distance_from_start(),
                distance: pair[1].distance_from_start(),
            });
        }

        let trace = Self { points };
        tracing::debug!(
            points = trace.point_count(),
            total_distance_m = trace.total_distance_meters(),
            "built trace"
        );
        Ok(trace)
    }

    /// Builds a trace from ordered coordinate/elevation pairs.
    ///
    /// Indices follow input order. Distances accumulate the great-circle
    /// distance between consecutive pairs, and every point after the first
    /// records its distance to the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Empty`] if no pairs are given.
    ///
    /// # Example
    ///
    /// ```
    /// use trace_hydraulics::models::trace::Trace;
    /// use trace_hydraulics::support::geo::{Coordinates, Elevation};
    ///
    /// let trace = Trace::from_coordinates_and_elevations([
    ///     (Coordinates::new(0.0, 0.0).unwrap(), Elevation::new(10.0).unwrap()),
    ///     (Coordinates::new(0.0, 0.001).unwrap(), Elevation::new(12.0).unwrap()),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(trace.point_count(), 2);
    /// assert!((trace.total_distance_meters() - 111.19).abs() < 0.01);
    /// ```
    pub fn from_coordinates_and_elevations<I>(pairs: I) -> Result<Self, TraceError>
    where
        I: IntoIterator<Item = (Coordinates, Elevation)>,
    {
        let mut points = Vec::new();
        let mut distance = NonNegative::zero::<f64>();
        let mut previous: Option<Coordinates> = None;

        for (index, (coordinates, elevation)) in pairs.into_iter().enumerate() {
            let segment = previous.map(|p| p.distance_meters_to(&coordinates));
            if let Some(segment) = segment {
                let segment =
                    NonNegative::new(segment).map_err(|source| TraceError::InvalidDistance {
                        index,
                        value: segment,
                        source,
                    })?;
                distance = distance + segment;
            }

            let mut point = TracePoint::new(index, coordinates, elevation, distance.into_inner())?;
            if let Some(segment) = segment {
                point.record_segment_distance(segment)?;
            }

            points.push(point);
            previous = Some(coordinates);
        }

        Self::new(points)
    }

    /// Builds a trace from raw survey points, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::SurveyPoint`] for the first invalid point, or
    /// [`TraceError::Empty`] if `survey` is empty.
    pub fn from_survey(survey: &[SurveyPoint]) -> Result<Self, TraceError> {
        let pairs = survey
            .iter()
            .enumerate()
            .map(|(index, point)| {
                point
                    .validate()
                    .map_err(|source| TraceError::SurveyPoint { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_coordinates_and_elevations(pairs)
    }

    #[must_use]
    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &TracePoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn into_points(self) -> Vec<TracePoint> {
        self.points
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TracePoint> {
        self.points.get(index)
    }

    #[must_use]
    pub fn first(&self) -> &TracePoint {
        &self.points[0]
    }

    #[must_use]
    pub fn last(&self) -> &TracePoint {
        &self.points[self.points.len() - 1]
    }

    /// Length of the path, equal to the last point's distance from start.
    #[must_use]
    pub fn total_distance(&self) -> Length {
        units::meters(self.total_distance_meters())
    }

    #[must_use]
    pub fn total_distance_meters(&self) -> f64 {
        self.last().distance_from_start()
    }

    #[must_use]
    pub fn elevation_profile(&self) -> ElevationProfile {
        ElevationProfile::from_points(self.first(), &self.points[1..])
    }

    /// Points whose distance from start lies in `[start, end]` meters.
    ///
    /// Returns an empty slice when the window holds no point or `start > end`.
    #[must_use]
    pub fn points_in_range(&self, start: f64, end: f64) -> &[TracePoint] {
        let lo = self
            .points
            .partition_point(|p| p.distance_from_start() < start);
        let hi = self
            .points
            .partition_point(|p| p.distance_from_start() <= end);
        if lo < hi { &self.points[lo..hi] } else { &[] }
    }

    /// Interpolated position `distance` meters along the trace.
    ///
    /// Distances outside the trace clamp to its first or last point.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Geo`] if the interpolated values leave the
    /// valid geographic ranges.
    pub fn position_at(&self, distance: f64) -> Result<(Coordinates, Elevation), TraceError> {
        resample::interpolate(&self.points, distance)
    }

    /// Samples the trace every `interval` meters.
    ///
    /// The returned list always starts with the start point at distance 0,
    /// has one interpolated point per whole interval strictly inside the
    /// trace, and ends with the trace's end point. Indices are sequential.
    /// The trace itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::InvalidInterval`] if `interval` is not a
    /// positive number.
    pub fn generate_points_at_interval(
        &self,
        interval: f64,
    ) -> Result<Vec<TracePoint>, TraceError> {
        resample::points_at_interval(self, interval)
    }

    /// Samples the trace every `interval` meters into a new [`Trace`].
    ///
    /// # Errors
    ///
    /// See [`Trace::generate_points_at_interval`].
    pub fn resample(&self, interval: f64) -> Result<Self, TraceError> {
        Self::new(self.generate_points_at_interval(interval)?)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TracePoint;
    type IntoIter = std::slice::Iter<'a, TracePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
