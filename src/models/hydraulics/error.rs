use thiserror::Error;

use crate::{models::trace::TraceError, support::constraint::ConstraintError};

use super::DiameterClass;

/// Errors raised when hydraulic parameters are out of range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("flow rate {value} m³/h must be within [1, 1000]")]
    FlowRate {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    #[error("pump pressure {value} kg/cm² must be within [1, 20]")]
    PumpPressure {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    #[error("line count {value} must be within [1, 10]")]
    Lines {
        value: u32,
        #[source]
        source: ConstraintError,
    },

    #[error("sampling interval {value} m must be within [10, 500]")]
    Interval {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    #[error("unknown hose diameter class: {0}")]
    UnknownDiameter(String),
}

/// Errors that abort a pressure profile calculation.
///
/// Out-of-bounds pressures are not errors; they are reported as warnings and
/// alarms inside the [`PressureProfile`](super::PressureProfile).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// The point list is empty.
    #[error("no points to calculate")]
    EmptyPoints,

    /// No friction coefficient table is registered for the hose diameter.
    #[error("no friction coefficient table for {diameter} hose")]
    MissingCoefficientTable { diameter: DiameterClass },
}

/// Errors from the end-to-end survey analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("invalid trace")]
    Trace(#[from] TraceError),

    #[error("invalid hydraulic parameters")]
    Parameters(#[from] ParameterError),

    #[error("pressure profile calculation failed")]
    Calculation(#[from] CalculationError),
}
