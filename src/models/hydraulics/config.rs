use serde::{Deserialize, Serialize};

/// Calibration constants of the pressure profile calculation.
///
/// The defaults are the field-calibrated values. The combined pressure uses
/// its own PSI factor and divisor, distinct from
/// [`KGCM2_TO_PSI`](crate::support::units::KGCM2_TO_PSI).
///
/// Missing fields fall back to their defaults when deserializing:
///
/// ```
/// use trace_hydraulics::models::hydraulics::ProfileConfig;
///
/// let config: ProfileConfig = serde_json::from_str(r#"{"alarmLimitPsi": 180}"#).unwrap();
/// assert_eq!(config.alarm_limit_psi, 180.0);
/// assert_eq!(config.warning_upper_psi, 150.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileConfig {
    /// Combined pressure above which a bounds warning is raised, in PSI.
    pub warning_upper_psi: f64,

    /// Combined pressure below which a bounds warning is raised, in PSI.
    pub warning_lower_psi: f64,

    /// Absolute combined pressure beyond which a critical alarm is raised, in PSI.
    pub alarm_limit_psi: f64,

    /// Factor converting accumulated height (kg/cm²) into combined PSI.
    pub combined_psi_factor: f64,

    /// Divisor converting combined PSI back into kg/cm².
    pub kgcm2_divisor: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            warning_upper_psi: 150.0,
            warning_lower_psi: -100.0,
            alarm_limit_psi: 200.0,
            combined_psi_factor: 14.8,
            kgcm2_divisor: 14.5,
        }
    }
}
