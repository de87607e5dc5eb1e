//! Friction coefficients for flexi hose.
//!
//! Each table maps per-line flow (barrels per minute) to the friction loss in
//! PSI per 100 ft of hose. Keys are strictly increasing.

use super::DiameterClass;

/// Friction coefficients for one hose diameter.
#[derive(Debug, PartialEq)]
pub struct FrictionTable {
    diameter: DiameterClass,
    entries: &'static [(f64, f64)],
}

static TEN_INCH: [(f64, f64); 27] = [
    (4.0, 0.008),
    (5.0, 0.013),
    (6.0, 0.018),
    (7.0, 0.023),
    (8.0, 0.030),
    (9.0, 0.037),
    (10.0, 0.045),
    (11.0, 0.054),
    (12.0, 0.063),
    (13.0, 0.073),
    (14.0, 0.084),
    (15.0, 0.095),
    (16.0, 0.108),
    (17.0, 0.120),
    (18.0, 0.134),
    (19.0, 0.148),
    (20.0, 0.163),
    (21.0, 0.178),
    (22.0, 0.194),
    (23.0, 0.211),
    (24.0, 0.228),
    (25.0, 0.246),
    (26.0, 0.264),
    (27.0, 0.283),
    (28.0, 0.303),
    (29.0, 0.323),
    (30.0, 0.344),
];

static TWELVE_INCH: [(f64, f64); 27] = [
    (4.0, 0.003),
    (5.0, 0.005),
    (6.0, 0.007),
    (7.0, 0.010),
    (8.0, 0.012),
    (9.0, 0.015),
    (10.0, 0.019),
    (11.0, 0.022),
    (12.0, 0.026),
    (13.0, 0.030),
    (14.0, 0.035),
    (15.0, 0.039),
    (16.0, 0.044),
    (17.0, 0.050),
    (18.0, 0.055),
    (19.0, 0.061),
    (20.0, 0.067),
    (21.0, 0.073),
    (22.0, 0.080),
    (23.0, 0.087),
    (24.0, 0.094),
    (25.0, 0.101),
    (26.0, 0.109),
    (27.0, 0.117),
    (28.0, 0.125),
    (29.0, 0.133),
    (30.0, 0.142),
];

static TABLES: [FrictionTable; 2] = [
    FrictionTable {
        diameter: DiameterClass::TenInch,
        entries: &TEN_INCH,
    },
    FrictionTable {
        diameter: DiameterClass::TwelveInch,
        entries: &TWELVE_INCH,
    },
];

impl FrictionTable {
    /// Looks up the table registered for `diameter`.
    #[must_use]
    pub fn for_diameter(diameter: DiameterClass) -> Option<&'static FrictionTable> {
        TABLES.iter().find(|table| table.diameter == diameter)
    }

    #[must_use]
    pub fn diameter(&self) -> DiameterClass {
        self.diameter
    }

    /// `(flow_bpm, psi_per_100_ft)` pairs in increasing flow order.
    #[must_use]
    pub fn entries(&self) -> &'static [(f64, f64)] {
        self.entries
    }

    /// Friction coefficient for a per-line flow in barrels per minute.
    ///
    /// Flows at or beyond the table's ends clamp to the boundary
    /// coefficient. Exact keys return their coefficient; other flows are
    /// linearly interpolated between the bracketing keys. A `NaN` flow
    /// yields `NaN`.
    #[must_use]
    pub fn coefficient(&self, flow_bpm: f64) -> f64 {
        let entries = self.entries;
        let (min_flow, min_coefficient) = entries[0];
        let (max_flow, max_coefficient) = entries[entries.len() - 1];

        if flow_bpm.is_nan() {
            return f64::NAN;
        }
        if flow_bpm <= min_flow {
            return min_coefficient;
        }
        if flow_bpm >= max_flow {
            return max_coefficient;
        }

        // First key not below the flow; lies in 1..len after clamping.
        let upper = entries.partition_point(|&(flow, _)| flow < flow_bpm);
        let (high_flow, high_coefficient) = entries[upper];
        #[allow(clippy::float_cmp)]
        let exact = high_flow == flow_bpm;
        if exact {
            return high_coefficient;
        }

        let (low_flow, low_coefficient) = entries[upper - 1];
        let ratio = (flow_bpm - low_flow) / (high_flow - low_flow);
        low_coefficient + (high_coefficient - low_coefficient) * ratio
    }
}
