//! Response models for the HTTP surface
//!
//! DTOs serialized into HTTP response bodies.

pub mod responses;

pub use responses::{HealthResponse, SweepStatsResponse};
