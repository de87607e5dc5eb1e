//! Output types of a pressure profile calculation.
//!
//! Everything here serializes to plain JSON numbers and strings.

use serde::Serialize;

/// Pressure figures at one sampled point.
///
/// The letter in each field's description is the column name used on the
/// field calculation sheets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationPointResult {
    pub index: usize,
    pub distance_meters: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation_meters: f64,

    /// (K) Friction loss over the distance from start, in PSI.
    pub friction_loss_psi: f64,

    /// (M) Static pressure from the elevation change since the previous point, in kg/cm².
    pub static_pressure_kgcm2: f64,

    /// (N) Running sum of static pressure, in kg/cm².
    pub accumulated_height_kgcm2: f64,

    /// (O) Combined pressure, in PSI.
    pub combined_pressure_psi: f64,

    /// (P) Combined pressure, in kg/cm².
    pub combined_pressure_kgcm2: f64,
}

/// A point where a pump or a valve must be installed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePlacement {
    pub index: usize,
    pub distance_meters: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation_meters: f64,
    pub combined_pressure_kgcm2: f64,
    pub accumulated_height_kgcm2: f64,
}

impl DevicePlacement {
    pub(super) fn at(row: &CalculationPointResult) -> Self {
        Self {
            index: row.index,
            distance_meters: row.distance_meters,
            latitude: row.latitude,
            longitude: row.longitude,
            elevation_meters: row.elevation_meters,
            combined_pressure_kgcm2: row.combined_pressure_kgcm2,
            accumulated_height_kgcm2: row.accumulated_height_kgcm2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningKind {
    /// Combined pressure outside the equipment's operating bounds.
    #[serde(rename = "BOUNDS_EXCEEDED")]
    BoundsExceeded,
}

/// A non-fatal finding on a single point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileWarning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub index: usize,
    pub distance_meters: f64,
    pub value_psi: f64,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlarmKind {
    /// Combined pressure beyond the critical limit.
    #[serde(rename = "PRESION_CRITICA")]
    CriticalPressure,
}

/// A point whose pressure needs immediate attention.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAlarm {
    #[serde(rename = "type")]
    pub kind: AlarmKind,
    pub index: usize,
    pub distance_meters: f64,
    pub value_psi: f64,
    pub message: String,
}

/// Headline figures of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub total_distance_km: f64,

    /// Last point's elevation minus the first point's, in meters.
    pub elevation_difference_meters: f64,

    pub pump_count: usize,
    pub valve_count: usize,
}

/// Complete result of a pressure profile calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureProfile {
    pub(super) points: Vec<CalculationPointResult>,
    pub(super) pumps: Vec<DevicePlacement>,
    pub(super) valves: Vec<DevicePlacement>,
    pub(super) alarms: Vec<ProfileAlarm>,
    pub(super) warnings: Vec<ProfileWarning>,
    pub(super) summary: ProfileSummary,
}

impl PressureProfile {
    /// Per-point results, in trace order.
    #[must_use]
    pub fn points(&self) -> &[CalculationPointResult] {
        &self.points
    }

    /// Pump sites. The first point is always one.
    #[must_use]
    pub fn pumps(&self) -> &[DevicePlacement] {
        &self.pumps
    }

    #[must_use]
    pub fn valves(&self) -> &[DevicePlacement] {
        &self.valves
    }

    #[must_use]
    pub fn alarms(&self) -> &[ProfileAlarm] {
        &self.alarms
    }

    #[must_use]
    pub fn warnings(&self) -> &[ProfileWarning] {
        &self.warnings
    }

    #[must_use]
    pub fn summary(&self) -> &ProfileSummary {
        &self.summary
    }

    /// True when no point raised a warning or an alarm.
    #[must_use]
    pub fn is_within_limits(&self) -> bool {
        self.warnings.is_empty() && self.alarms.is_empty()
    }
}
