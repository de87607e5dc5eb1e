//! Second pass: pump, valve and alarm placement.

use crate::models::hydraulics::{
    AlarmKind, CalculationPointResult, DevicePlacement, ProfileAlarm, ProfileConfig,
};

#[derive(Debug, Default)]
pub(super) struct Placement {
    pub pumps: Vec<DevicePlacement>,
    pub valves: Vec<DevicePlacement>,
    pub alarms: Vec<ProfileAlarm>,
}

/// Places devices along the per-point results.
///
/// The first point always gets a pump. After it, a pump goes wherever the
/// combined pressure reaches `pump_pressure_kgcm2` above the last pump's,
/// and a valve wherever the accumulated height falls below
/// `-pump_pressure_kgcm2`. A point can hold both.
pub(super) fn place_devices(
    rows: &[CalculationPointResult],
    pump_pressure_kgcm2: f64,
    config: &ProfileConfig,
) -> Placement {
    let Some((first, rest)) = rows.split_first() else {
        return Placement::default();
    };

    let mut placement = Placement {
        pumps: vec![DevicePlacement::at(first)],
        ..Placement::default()
    };
    // The implicit pump at the start is the zero reference.
    let mut last_pump_pressure = 0.0;

    for row in rest {
        if row.combined_pressure_kgcm2 >= last_pump_pressure + pump_pressure_kgcm2 {
            tracing::debug!(
                index = row.index,
                distance_m = row.distance_meters,
                pressure_kgcm2 = row.combined_pressure_kgcm2,
                "pump placed"
            );
            placement.pumps.push(DevicePlacement::at(row));
            last_pump_pressure = row.combined_pressure_kgcm2;
        }

        if row.accumulated_height_kgcm2 < -pump_pressure_kgcm2 {
            tracing::debug!(
                index = row.index,
                distance_m = row.distance_meters,
                height_kgcm2 = row.accumulated_height_kgcm2,
                "valve placed"
            );
            placement.valves.push(DevicePlacement::at(row));
        }

        let psi = row.combined_pressure_psi;
        if psi > config.alarm_limit_psi || psi < -config.alarm_limit_psi {
            tracing::warn!(
                index = row.index,
                distance_m = row.distance_meters,
                value_psi = psi,
                "critical pressure"
            );
            placement.alarms.push(ProfileAlarm {
                kind: AlarmKind::CriticalPressure,
                index: row.index,
                distance_meters: row.distance_meters,
                value_psi: psi,
                message: format!(
                    "critical pressure {psi:.2} PSI beyond ±{} PSI",
                    config.alarm_limit_psi
                ),
            });
        }
    }

    placement
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: usize, height: f64, psi: f64) -> CalculationPointResult {
        #[allow(clippy::cast_precision_loss)]
        let distance = 100.0 * index as f64;
        CalculationPointResult {
            index,
            distance_meters: distance,
            latitude: 0.0,
            longitude: 0.0,
            elevation_meters: 0.0,
            friction_loss_psi: 0.0,
            static_pressure_kgcm2: 0.0,
            accumulated_height_kgcm2: height,
            combined_pressure_psi: psi,
            combined_pressure_kgcm2: psi / 14.5,
        }
    }

    fn indices(devices: &[DevicePlacement]) -> Vec<usize> {
        devices.iter().map(|d| d.index).collect()
    }

    #[test]
    fn empty_rows_place_nothing() {
        let placement = place_devices(&[], 8.0, &ProfileConfig::default());
        assert!(placement.pumps.is_empty());
        assert!(placement.valves.is_empty());
    }

    #[test]
    fn first_point_is_always_a_pump() {
        let placement = place_devices(&[row(0, 0.0, 0.0)], 8.0, &ProfileConfig::default());
        assert_eq!(indices(&placement.pumps), vec![0]);
    }

    #[test]
    fn pumps_follow_pressure_steps() {
        // P = psi / 14.5: 0, 5, 8, 12, 16, 16.5
        let rows = [
            row(0, 0.0, 0.0),
            row(1, 0.0, 5.0 * 14.5),
            row(2, 0.0, 8.0 * 14.5),
            row(3, 0.0, 12.0 * 14.5),
            row(4, 0.0, 16.0 * 14.5),
            row(5, 0.0, 16.5 * 14.5),
        ];
        let placement = place_devices(&rows, 8.0, &ProfileConfig::default());
        assert_eq!(indices(&placement.pumps), vec![0, 2, 4]);
    }

    #[test]
    fn pump_reference_ignores_first_point_pressure() {
        // Even with a high first-point pressure, the reference starts at 0.
        let rows = [row(0, 0.0, 20.0 * 14.5), row(1, 0.0, 8.0 * 14.5)];
        let placement = place_devices(&rows, 8.0, &ProfileConfig::default());
        assert_eq!(indices(&placement.pumps), vec![0, 1]);
    }

    #[test]
    fn valves_below_negative_pump_pressure() {
        let rows = [
            row(0, 0.0, 0.0),
            row(1, -8.0, 0.0),
            row(2, -8.5, 0.0),
            row(3, -3.0, 0.0),
            row(4, -12.0, 0.0),
        ];
        let placement = place_devices(&rows, 8.0, &ProfileConfig::default());
        assert_eq!(indices(&placement.valves), vec![2, 4]);
    }

    #[test]
    fn pump_and_valve_on_same_point() {
        let rows = [row(0, 0.0, 0.0), row(1, -9.0, 9.0 * 14.5)];
        let placement = place_devices(&rows, 8.0, &ProfileConfig::default());
        assert_eq!(indices(&placement.pumps), vec![0, 1]);
        assert_eq!(indices(&placement.valves), vec![1]);
    }

    #[test]
    fn alarms_beyond_two_hundred_psi() {
        let rows = [
            row(0, 0.0, 250.0),
            row(1, 0.0, 200.0),
            row(2, 0.0, 200.5),
            row(3, 0.0, -200.0),
            row(4, 0.0, -240.0),
        ];
        let placement = place_devices(&rows, 20.0, &ProfileConfig::default());

        let alarms: Vec<_> = placement.alarms.iter().map(|a| (a.index, a.value_psi)).collect();
        assert_eq!(alarms, vec![(2, 200.5), (4, -240.0)]);
        assert!(
            placement
                .alarms
                .iter()
                .all(|a| a.kind == AlarmKind::CriticalPressure)
        );
    }
}
