use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::support::{
    constraint::{ClosedRange, RangeLimits},
    units::{KGCM2_TO_PSI, M3H_TO_BPM},
};

use super::ParameterError;

/// Nominal diameter of the flexi hose, which selects the friction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiameterClass {
    #[serde(rename = "10\"", alias = "10")]
    TenInch,
    #[serde(rename = "12\"", alias = "12")]
    TwelveInch,
}

impl DiameterClass {
    /// Nominal diameter in inches.
    #[must_use]
    pub fn inches(self) -> u32 {
        match self {
            Self::TenInch => 10,
            Self::TwelveInch => 12,
        }
    }
}

impl TryFrom<u32> for DiameterClass {
    type Error = ParameterError;

    fn try_from(inches: u32) -> Result<Self, Self::Error> {
        match inches {
            10 => Ok(Self::TenInch),
            12 => Ok(Self::TwelveInch),
            other => Err(ParameterError::UnknownDiameter(other.to_string())),
        }
    }
}

/// Parses `10`, `12`, `10"` or `12"`.
impl FromStr for DiameterClass {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('"').unwrap_or(trimmed);
        digits
            .parse::<u32>()
            .map_err(|_| ParameterError::UnknownDiameter(s.to_string()))
            .and_then(|inches| {
                Self::try_from(inches).map_err(|_| ParameterError::UnknownDiameter(s.to_string()))
            })
    }
}

impl fmt::Display for DiameterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\"", self.inches())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FlowRateLimits;

impl RangeLimits<f64> for FlowRateLimits {
    fn min() -> f64 {
        1.0
    }
    fn max() -> f64 {
        1000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PumpPressureLimits;

impl RangeLimits<f64> for PumpPressureLimits {
    fn min() -> f64 {
        1.0
    }
    fn max() -> f64 {
        20.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LineLimits;

impl RangeLimits<u32> for LineLimits {
    fn min() -> u32 {
        1
    }
    fn max() -> u32 {
        10
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct IntervalLimits;

impl RangeLimits<f64> for IntervalLimits {
    fn min() -> f64 {
        10.0
    }
    fn max() -> f64 {
        500.0
    }
}

/// Operating parameters for a pressure profile calculation.
///
/// All values are validated on construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HydraulicParameters {
    flow_rate_m3h: f64,
    diameter: DiameterClass,
    pump_pressure_kgcm2: f64,
    lines: u32,
    interval_meters: f64,
}

impl HydraulicParameters {
    /// Creates validated parameters.
    ///
    /// - `flow_rate_m3h`: total flow in m³/h, within `[1, 1000]`
    /// - `pump_pressure_kgcm2`: pressure a pump adds, in kg/cm², within `[1, 20]`
    /// - `lines`: parallel hose lines sharing the flow, within `[1, 10]`
    /// - `interval_meters`: resampling step, within `[10, 500]`
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first out-of-range value.
    ///
    /// # Example
    ///
    /// ```
    /// use trace_hydraulics::models::hydraulics::{DiameterClass, HydraulicParameters};
    ///
    /// let params = HydraulicParameters::new(120.0, DiameterClass::TwelveInch, 8.0, 2, 50.0).unwrap();
    /// assert!((params.flow_per_line_bpm() - 6.288).abs() < 1e-9);
    ///
    /// assert!(HydraulicParameters::new(120.0, DiameterClass::TwelveInch, 8.0, 0, 50.0).is_err());
    /// ```
    pub fn new(
        flow_rate_m3h: f64,
        diameter: DiameterClass,
        pump_pressure_kgcm2: f64,
        lines: u32,
        interval_meters: f64,
    ) -> Result<Self, ParameterError> {
        let flow_rate_m3h = ClosedRange::<FlowRateLimits>::new(flow_rate_m3h)
            .map_err(|source| ParameterError::FlowRate {
                value: flow_rate_m3h,
                source,
            })?
            .into_inner();
        let pump_pressure_kgcm2 = ClosedRange::<PumpPressureLimits>::new(pump_pressure_kgcm2)
            .map_err(|source| ParameterError::PumpPressure {
                value: pump_pressure_kgcm2,
                source,
            })?
            .into_inner();
        let lines = ClosedRange::<LineLimits>::new(lines)
            .map_err(|source| ParameterError::Lines {
                value: lines,
                source,
            })?
            .into_inner();
        let interval_meters = ClosedRange::<IntervalLimits>::new(interval_meters)
            .map_err(|source| ParameterError::Interval {
                value: interval_meters,
                source,
            })?
            .into_inner();

        Ok(Self {
            flow_rate_m3h,
            diameter,
            pump_pressure_kgcm2,
            lines,
            interval_meters,
        })
    }

    /// Total flow rate in m³/h.
    #[must_use]
    pub fn flow_rate_m3h(&self) -> f64 {
        self.flow_rate_m3h
    }

    #[must_use]
    pub fn diameter(&self) -> DiameterClass {
        self.diameter
    }

    /// Pressure a pump adds, in kg/cm².
    #[must_use]
    pub fn pump_pressure_kgcm2(&self) -> f64 {
        self.pump_pressure_kgcm2
    }

    #[must_use]
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Resampling step in meters.
    #[must_use]
    pub fn interval_meters(&self) -> f64 {
        self.interval_meters
    }

    /// Total flow rate in barrels per minute.
    #[must_use]
    pub fn flow_rate_bpm(&self) -> f64 {
        self.flow_rate_m3h * M3H_TO_BPM
    }

    /// Flow carried by each parallel line, in barrels per minute.
    #[must_use]
    pub fn flow_per_line_bpm(&self) -> f64 {
        self.flow_rate_bpm() / f64::from(self.lines)
    }

    /// Pump pressure in PSI.
    #[must_use]
    pub fn pump_pressure_psi(&self) -> f64 {
        self.pump_pressure_kgcm2 * KGCM2_TO_PSI
    }
}

/// Unvalidated parameters as received from a request body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterInput {
    pub flow_rate: f64,
    pub diameter: DiameterClass,
    pub pump_pressure: f64,
    pub lines: u32,
    pub interval: f64,
}

impl TryFrom<ParameterInput> for HydraulicParameters {
    type Error = ParameterError;

    fn try_from(input: ParameterInput) -> Result<Self, Self::Error> {
        Self::new(
            input.flow_rate,
            input.diameter,
            input.pump_pressure,
            input.lines,
            input.interval,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    fn params(
        flow: f64,
        pressure: f64,
        lines: u32,
        interval: f64,
    ) -> Result<HydraulicParameters, ParameterError> {
        HydraulicParameters::new(flow, DiameterClass::TwelveInch, pressure, lines, interval)
    }

    #[test]
    fn accepts_range_limits() {
        assert!(params(1.0, 1.0, 1, 10.0).is_ok());
        assert!(params(1000.0, 20.0, 10, 500.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            params(120.0, 8.0, 0, 50.0),
            Err(ParameterError::Lines {
                value: 0,
                source: ConstraintError::BelowMinimum
            })
        );
        assert_eq!(
            params(120.0, 8.0, 1, 5.0),
            Err(ParameterError::Interval {
                value: 5.0,
                source: ConstraintError::BelowMinimum
            })
        );
        assert!(matches!(
            params(1000.5, 8.0, 1, 50.0),
            Err(ParameterError::FlowRate { .. })
        ));
        assert!(matches!(
            params(120.0, 21.0, 1, 50.0),
            Err(ParameterError::PumpPressure { .. })
        ));
        assert!(params(120.0, 8.0, 11, 50.0).is_err());
        assert!(params(f64::NAN, 8.0, 1, 50.0).is_err());
    }

    #[test]
    fn unit_accessors() {
        let p = params(120.0, 8.0, 1, 50.0).unwrap();
        assert_relative_eq!(p.flow_rate_bpm(), 12.576);
        assert_relative_eq!(p.flow_per_line_bpm(), 12.576);
        assert_relative_eq!(p.pump_pressure_psi(), 113.7864);

        let p = params(120.0, 8.0, 4, 50.0).unwrap();
        assert_relative_eq!(p.flow_per_line_bpm(), 3.144);
    }

    #[test]
    fn diameter_parsing() {
        assert_eq!("12\"".parse::<DiameterClass>().unwrap(), DiameterClass::TwelveInch);
        assert_eq!(" 10 ".parse::<DiameterClass>().unwrap(), DiameterClass::TenInch);
        assert_eq!(
            "8\"".parse::<DiameterClass>(),
            Err(ParameterError::UnknownDiameter("8\"".to_string()))
        );
        assert!("twelve".parse::<DiameterClass>().is_err());
        assert_eq!(DiameterClass::try_from(10).unwrap(), DiameterClass::TenInch);
        assert_eq!(DiameterClass::TwelveInch.to_string(), "12\"");
    }

    #[test]
    fn from_json_input() {
        let json = r#"{"flowRate": 120, "diameter": "12\"", "pumpPressure": 8, "lines": 1, "interval": 50}"#;
        let input: ParameterInput = serde_json::from_str(json).unwrap();
        let p = HydraulicParameters::try_from(input).unwrap();
        assert_eq!(p.diameter(), DiameterClass::TwelveInch);
        assert_eq!(p.interval_meters(), 50.0);

        let json = r#"{"flowRate": 120, "diameter": "10", "pumpPressure": 8, "lines": 0, "interval": 50}"#;
        let input: ParameterInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.diameter, DiameterClass::TenInch);
        assert!(HydraulicParameters::try_from(input).is_err());
    }
}
