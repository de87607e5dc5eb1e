//! Supporting utilities used by models.
//!
//! - [`constraint`]: Construction-time numeric invariants
//! - [`geo`]: Validated coordinates and elevations
//! - [`units`]: Unit conversions shared by the hydraulic formulas

pub mod constraint;
pub mod geo;
pub mod units;
