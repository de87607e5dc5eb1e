//! Pressure profile calculation.
//!
//! The calculation runs in two passes over the sampled points:
//!
//! 1. [`pressure`]: friction loss, static pressure, accumulated height and
//!    combined pressure per point, plus bounds warnings.
//! 2. [`placement`]: pumps, valves and critical-pressure alarms.

mod placement;
mod pressure;

use crate::models::trace::{SurveyPoint, Trace, TracePoint};

use super::{
    AnalysisError, CalculationError, FrictionTable, HydraulicParameters, PressureProfile,
    ProfileConfig, ProfileSummary,
};

use placement::place_devices;
use pressure::pressure_pass;

/// Computes pressure profiles with a fixed [`ProfileConfig`].
///
/// The calculator holds no state between calls; the same inputs always
/// produce the same output.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PressureProfileCalculator {
    config: ProfileConfig,
}

impl PressureProfileCalculator {
    #[must_use]
    pub fn new(config: ProfileConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    /// Calculates the pressure profile over `points`.
    ///
    /// `points` is normally the output of
    /// [`Trace::generate_points_at_interval`] and is used as given.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::EmptyPoints`] if `points` is empty, or
    /// [`CalculationError::MissingCoefficientTable`] if no friction table
    /// exists for the hose diameter. Pressures out of bounds never fail the
    /// calculation; they are reported in the returned profile.
    pub fn calculate(
        &self,
        points: &[TracePoint],
        params: &HydraulicParameters,
    ) -> Result<PressureProfile, CalculationError> {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Err(CalculationError::EmptyPoints);
        };

        let table = FrictionTable::for_diameter(params.diameter()).ok_or(
            CalculationError::MissingCoefficientTable {
                diameter: params.diameter(),
            },
        )?;
        let coefficient = table.coefficient(params.flow_per_line_bpm());

        let pass = pressure_pass(points, coefficient, &self.config);
        let devices = place_devices(&pass.rows, params.pump_pressure_kgcm2(), &self.config);

        let summary = ProfileSummary {
            total_distance_km: last.distance_from_start() / 1000.0,
            elevation_difference_meters: last.elevation_meters() - first.elevation_meters(),
            pump_count: devices.pumps.len(),
            valve_count: devices.valves.len(),
        };

        tracing::info!(
            points = pass.rows.len(),
            coefficient,
            total_distance_km = summary.total_distance_km,
            pumps = summary.pump_count,
            valves = summary.valve_count,
            warnings = pass.warnings.len(),
            alarms = devices.alarms.len(),
            "calculated pressure profile"
        );

        Ok(PressureProfile {
            points: pass.rows,
            pumps: devices.pumps,
            valves: devices.valves,
            alarms: devices.alarms,
            warnings: pass.warnings,
            summary,
        })
    }

    /// Builds a trace from `survey`, resamples it at the parameters' interval
    /// and calculates its pressure profile.
    ///
    /// # Errors
    ///
    /// Returns an [`AnalysisError`] if the survey is empty or invalid, or if
    /// the calculation fails.
    pub fn analyze(
        &self,
        survey: &[SurveyPoint],
        params: &HydraulicParameters,
    ) -> Result<PressureProfile, AnalysisError> {
        let trace = Trace::from_survey(survey)?;
        let points = trace.generate_points_at_interval(params.interval_meters())?;
        Ok(self.calculate(&points, params)?)
    }
}

/// Calculates a pressure profile with the default configuration.
///
/// # Errors
///
/// See [`PressureProfileCalculator::calculate`].
pub fn calculate(
    points: &[TracePoint],
    params: &HydraulicParameters,
) -> Result<PressureProfile, CalculationError> {
    PressureProfileCalculator::default().calculate(points, params)
}
