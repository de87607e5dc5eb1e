//! Fixed-interval resampling of a trace.
//!
//! Resampling walks the trace in steps of `interval` meters and linearly
//! interpolates latitude, longitude and elevation between the two original
//! points that bracket each step. The start point is always kept, and the
//! true end point is always appended last.

use crate::support::{
    constraint::StrictlyPositive,
    geo::{Coordinates, Elevation},
};

use super::{Trace, TraceError, TracePoint};

/// Produces a new point list sampled every `interval` meters along `trace`.
pub(super) fn points_at_interval(
    trace: &Trace,
    interval: f64,
) -> Result<Vec<TracePoint>, TraceError> {
    let interval = StrictlyPositive::new(interval)
        .map_err(|source| TraceError::InvalidInterval {
            value: interval,
            source,
        })?
        .into_inner();

    let points = trace.points();
    let total = trace.total_distance_meters();
    let start = trace.first();

    let mut generated = vec![TracePoint::new(
        0,
        start.coordinates(),
        start.elevation(),
        0.0,
    )?];

    let mut step = 1_usize;
    loop {
        #[allow(clippy::cast_precision_loss)]
        let distance = interval * step as f64;
        if distance >= total {
            break;
        }

        let (coordinates, elevation) = interpolate(points, distance)?;
        let mut point = TracePoint::new(step, coordinates, elevation, distance)?;
        let previous = generated
            .last()
            .map_or(0.0, TracePoint::distance_from_start);
        point.record_segment_distance(distance - previous)?;
        generated.push(point);

        step += 1;
    }

    let end = trace.last();
    if let Some(previous) = generated
        .last()
        .filter(|last| *last != end)
        .map(TracePoint::distance_from_start)
    {
        let mut end = end.reindexed(generated.len());
        end.record_segment_distance(end.distance_from_start() - previous)?;
        generated.push(end);
    }

    tracing::debug!(
        interval_m = interval,
        original = points.len(),
        resampled = generated.len(),
        "resampled trace"
    );

    Ok(generated)
}

/// Interpolates the position `distance` meters along `points`.
///
/// Distances before the first point or at/after the last point clamp to
/// those points' values.
pub(super) fn interpolate(
    points: &[TracePoint],
    distance: f64,
) -> Result<(Coordinates, Elevation), TraceError> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(TraceError::Empty);
    };

    if distance < first.distance_from_start() {
        return Ok((first.coordinates(), first.elevation()));
    }

    let Some(after) = points
        .iter()
        .position(|p| p.distance_from_start() > distance)
    else {
        return Ok((last.coordinates(), last.elevation()));
    };

    // `after > 0` because the first point does not exceed `distance`.
    let before = &points[after - 1];
    let after = &points[after];

    let ratio = (distance - before.distance_from_start())
        / (after.distance_from_start() - before.distance_from_start());
    let lerp = |a: f64, b: f64| a + (b - a) * ratio;

    let coordinates = Coordinates::new(
        lerp(before.latitude(), after.latitude()),
        lerp(before.longitude(), after.longitude()),
    )?;
    let elevation = Elevation::new(lerp(before.elevation_meters(), after.elevation_meters()))?;

    Ok((coordinates, elevation))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    fn straight_trace() -> Trace {
        // Roughly 343 m, losing 10 m of elevation.
        Trace::from_coordinates_and_elevations([
            (
                Coordinates::new(-38.233023, -68.629742).unwrap(),
                Elevation::new(545.0).unwrap(),
            ),
            (
                Coordinates::new(-38.23531, -68.627113).unwrap(),
                Elevation::new(535.0).unwrap(),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn samples_every_interval_and_keeps_end() {
        let trace = straight_trace();
        let total = trace.total_distance_meters();
        let points = points_at_interval(&trace, 50.0).unwrap();

        // 0, 50, ..., 300, then the end point.
        assert_eq!(points.len(), 8);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
        for (i, p) in points.iter().take(7).enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = 50.0 * i as f64;
            assert_relative_eq!(p.distance_from_start(), expected);
        }

        let end = &points[7];
        assert_relative_eq!(end.distance_from_start(), total);
        assert_relative_eq!(end.elevation_meters(), 535.0);
        assert_relative_eq!(end.segment_distance().unwrap(), total - 300.0);
        assert_eq!(points[0].segment_distance(), None);
        assert_eq!(points[1].segment_distance(), Some(50.0));
    }

    #[test]
    fn interpolates_linearly() {
        let trace = straight_trace();
        let total = trace.total_distance_meters();
        let points = points_at_interval(&trace, 100.0).unwrap();

        let ratio = 100.0 / total;
        assert_relative_eq!(points[1].elevation_meters(), 545.0 - 10.0 * ratio);
        assert_relative_eq!(
            points[1].latitude(),
            -38.233023 + (-38.23531 + 38.233023) * ratio,
            epsilon = 1e-12
        );
    }

    #[test]
    fn interval_longer_than_trace() {
        let trace = straight_trace();
        let points = points_at_interval(&trace, 500.0).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].index(), 1);
        assert_eq!(points[1].coordinates(), trace.last().coordinates());
    }

    #[test]
    fn single_point_trace_is_not_duplicated() {
        let trace = Trace::from_coordinates_and_elevations([(
            Coordinates::new(1.0, 2.0).unwrap(),
            Elevation::new(3.0).unwrap(),
        )])
        .unwrap();
        let points = points_at_interval(&trace, 10.0).unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn rejects_non_positive_interval() {
        let trace = straight_trace();
        assert_eq!(
            points_at_interval(&trace, 0.0),
            Err(TraceError::InvalidInterval {
                value: 0.0,
                source: ConstraintError::Zero
            })
        );
        assert!(points_at_interval(&trace, -5.0).is_err());
        assert!(points_at_interval(&trace, f64::NAN).is_err());
    }

    #[test]
    fn interpolate_clamps_to_ends() {
        let trace = straight_trace();
        let (c, e) = interpolate(trace.points(), 10_000.0).unwrap();
        assert_eq!(c, trace.last().coordinates());
        assert_eq!(e, trace.last().elevation());

        let (c, _) = interpolate(trace.points(), 0.0).unwrap();
        assert_eq!(c, trace.first().coordinates());

        assert_eq!(interpolate(&[], 1.0), Err(TraceError::Empty));
    }
}
