//! First pass: pressure figures at every point.

use crate::{
    models::{
        hydraulics::{CalculationPointResult, ProfileConfig, ProfileWarning, WarningKind},
        trace::TracePoint,
    },
    support::units,
};

/// Per-point results and the bounds warnings raised along the way.
pub(super) struct PressurePass {
    pub rows: Vec<CalculationPointResult>,
    pub warnings: Vec<ProfileWarning>,
}

/// Walks `points` once, computing friction loss (K), static pressure (M),
/// accumulated height (N) and combined pressure (O, P).
pub(super) fn pressure_pass(
    points: &[TracePoint],
    coefficient: f64,
    config: &ProfileConfig,
) -> PressurePass {
    let mut rows = Vec::with_capacity(points.len());
    let mut warnings = Vec::new();

    let mut accumulated_height = 0.0;
    let mut previous_elevation: Option<f64> = None;

    for point in points {
        let distance = point.distance_from_start();
        let elevation = point.elevation_meters();

        let friction_loss = units::friction_lengths(distance) * coefficient;

        let static_pressure = match previous_elevation {
            None => 0.0,
            Some(previous) => -((previous - elevation) / 10.0),
        };
        accumulated_height += static_pressure;

        let combined_psi = if previous_elevation.is_none() {
            accumulated_height + friction_loss
        } else {
            friction_loss + accumulated_height * config.combined_psi_factor
        };
        let combined_kgcm2 = combined_psi / config.kgcm2_divisor;

        if combined_psi > config.warning_upper_psi || combined_psi < config.warning_lower_psi {
            tracing::warn!(
                index = point.index(),
                distance_m = distance,
                value_psi = combined_psi,
                "combined pressure out of bounds"
            );
            warnings.push(ProfileWarning {
                kind: WarningKind::BoundsExceeded,
                index: point.index(),
                distance_meters: distance,
                value_psi: combined_psi,
                message: format!(
                    "pressure {combined_psi:.2} PSI outside [{}, {}] PSI",
                    config.warning_lower_psi, config.warning_upper_psi
                ),
            });
        }

        rows.push(CalculationPointResult {
            index: point.index(),
            distance_meters: distance,
            latitude: point.latitude(),
            longitude: point.longitude(),
            elevation_meters: elevation,
            friction_loss_psi: friction_loss,
            static_pressure_kgcm2: static_pressure,
            accumulated_height_kgcm2: accumulated_height,
            combined_pressure_psi: combined_psi,
            combined_pressure_kgcm2: combined_kgcm2,
        });

        previous_elevation = Some(elevation);
    }

    PressurePass { rows, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        models::trace::Trace,
        support::geo::{Coordinates, Elevation},
    };

    fn points(rows: &[(f64, f64)]) -> Vec<TracePoint> {
        let points = rows
            .iter()
            .enumerate()
            .map(|(i, &(distance, elevation))| {
                TracePoint::new(
                    i,
                    Coordinates::new(0.0, 0.0).unwrap(),
                    Elevation::new(elevation).unwrap(),
                    distance,
                )
                .unwrap()
            })
            .collect();
        Trace::new(points).unwrap().into_points()
    }

    #[test]
    fn friction_grows_with_distance() {
        let pass = pressure_pass(
            &points(&[(0.0, 100.0), (1609.34, 100.0), (3218.68, 100.0)]),
            0.026,
            &ProfileConfig::default(),
        );

        assert_eq!(pass.rows[0].friction_loss_psi, 0.0);
        assert_relative_eq!(pass.rows[1].friction_loss_psi, 52.8 * 0.026);
        assert_relative_eq!(pass.rows[2].friction_loss_psi, 2.0 * 52.8 * 0.026);

        // Flat: only friction contributes.
        for row in &pass.rows {
            assert_eq!(row.static_pressure_kgcm2, 0.0);
            assert_eq!(row.accumulated_height_kgcm2, 0.0);
            assert_relative_eq!(row.combined_pressure_psi, row.friction_loss_psi);
            assert_relative_eq!(row.combined_pressure_kgcm2, row.friction_loss_psi / 14.5);
        }
        assert!(pass.warnings.is_empty());
    }

    #[test]
    fn static_pressure_follows_sign_convention() {
        let pass = pressure_pass(
            &points(&[(0.0, 100.0), (50.0, 120.0), (100.0, 90.0), (150.0, 90.0)]),
            0.0,
            &ProfileConfig::default(),
        );

        let m: Vec<f64> = pass.rows.iter().map(|r| r.static_pressure_kgcm2).collect();
        assert_eq!(m, vec![0.0, 2.0, -3.0, 0.0]);

        let n: Vec<f64> = pass
            .rows
            .iter()
            .map(|r| r.accumulated_height_kgcm2)
            .collect();
        assert_eq!(n, vec![0.0, 2.0, -1.0, -1.0]);

        assert_relative_eq!(pass.rows[1].combined_pressure_psi, 2.0 * 14.8);
        assert_relative_eq!(pass.rows[2].combined_pressure_psi, -14.8);
    }

    #[test]
    fn warning_on_the_offending_point_only() {
        // A 110 m climb on the last point: N = 11 kg/cm², O ≈ 162.8 PSI.
        let pass = pressure_pass(
            &points(&[(0.0, 100.0), (50.0, 100.0), (100.0, 100.0), (150.0, 210.0)]),
            0.026,
            &ProfileConfig::default(),
        );

        assert_eq!(pass.warnings.len(), 1);
        let warning = &pass.warnings[0];
        assert_eq!(warning.kind, WarningKind::BoundsExceeded);
        assert_eq!(warning.index, 3);
        assert_eq!(warning.distance_meters, 150.0);
        assert_relative_eq!(warning.value_psi, pass.rows[3].combined_pressure_psi);
        assert!(warning.value_psi > 150.0);
    }

    #[test]
    fn lower_bound_is_asymmetric() {
        // -9 kg/cm² gives about -133 PSI: below -100 but within +150.
        let pass = pressure_pass(
            &points(&[(0.0, 300.0), (50.0, 210.0)]),
            0.0,
            &ProfileConfig::default(),
        );
        assert_eq!(pass.warnings.len(), 1);
        assert_eq!(pass.warnings[0].index, 1);

        let config = ProfileConfig {
            warning_lower_psi: -150.0,
            ..ProfileConfig::default()
        };
        let pass = pressure_pass(&points(&[(0.0, 300.0), (50.0, 210.0)]), 0.0, &config);
        assert!(pass.warnings.is_empty());
    }
}
