//! # Trace Hydraulics
//!
//! Turns a surveyed pipeline path (GPS points with elevation) into a hydraulic
//! pressure profile, and decides where pumps and pressure-relief valves must
//! be installed along it.
//!
//! ## Crate layout
//!
//! - [`models`]: The trace model and the pressure-profile calculation.
//! - [`support`]: Validated value types and shared utilities used by models.
//!
//! ## Data flow
//!
//! 1. Survey points (latitude, longitude, elevation) become a
//!    [`Trace`](models::trace::Trace), which accumulates the distance from
//!    the start of the path.
//! 2. The trace is resampled at the interval requested in the
//!    [`HydraulicParameters`](models::hydraulics::HydraulicParameters).
//! 3. The [`PressureProfileCalculator`](models::hydraulics::PressureProfileCalculator)
//!    computes friction loss, static pressure and combined pressure for each
//!    point, then places pumps, valves and alarms.
//!
//! ```
//! use trace_hydraulics::models::hydraulics::{
//!     AnalysisError, DiameterClass, HydraulicParameters, PressureProfileCalculator,
//! };
//! use trace_hydraulics::models::trace::SurveyPoint;
//!
//! fn main() -> Result<(), AnalysisError> {
//!     let survey = [
//!         SurveyPoint::new(-38.233023, -68.629742, 545.0),
//!         SurveyPoint::new(-38.23531, -68.627113, 535.0),
//!     ];
//!     let params = HydraulicParameters::new(120.0, DiameterClass::TwelveInch, 8.0, 1, 50.0)?;
//!
//!     let profile = PressureProfileCalculator::default().analyze(&survey, &params)?;
//!     assert_eq!(profile.points().len(), 8);
//!     assert_eq!(profile.summary().pump_count, 1);
//!     Ok(())
//! }
//! ```
//!
//! The core is synchronous and holds no state between calls: the same inputs
//! always produce bit-identical output.

pub mod models;
pub mod support;
