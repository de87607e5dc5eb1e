//! Hydraulic pressure profile along a trace.
//!
//! Given sampled trace points and [`HydraulicParameters`], the
//! [`PressureProfileCalculator`] computes for each point:
//!
//! - friction loss (K, PSI) from the distance travelled and a friction
//!   coefficient interpolated from the hose's [`FrictionTable`]
//! - static pressure (M, kg/cm²) from the elevation change since the
//!   previous point, and its running sum, the accumulated height (N)
//! - combined pressure in PSI (O) and kg/cm² (P)
//!
//! It then places pumps where the combined pressure has risen by the pump
//! pressure since the last pump, valves where the accumulated height falls
//! below the negative pump pressure, and alarms where the combined pressure
//! is critical.
//!
//! Out-of-bounds pressures are returned as [`ProfileWarning`]s and
//! [`ProfileAlarm`]s; only malformed input aborts a calculation.

mod calculator;
mod config;
mod error;
mod friction;
mod parameters;
mod results;

pub use calculator::{PressureProfileCalculator, calculate};
pub use config::ProfileConfig;
pub use error::{AnalysisError, CalculationError, ParameterError};
pub use friction::FrictionTable;
pub use parameters::{DiameterClass, HydraulicParameters, ParameterInput};
pub use results::{
    AlarmKind, CalculationPointResult, DevicePlacement, PressureProfile, ProfileAlarm,
    ProfileSummary, ProfileWarning, WarningKind,
};
