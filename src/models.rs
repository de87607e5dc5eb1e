//! Domain models.
//!
//! # Organization
//!
//! - [`trace`]: The surveyed path as an ordered, distance-indexed sequence of
//!   points, with resampling and range queries.
//! - [`hydraulics`]: Hydraulic parameters, friction tables and the pressure
//!   profile calculation that places pumps and valves along a trace.
//!
//! Models only consume already-validated in-memory data. File parsing,
//! elevation lookups and persistence belong to the embedding service.

pub mod hydraulics;
pub mod trace;
