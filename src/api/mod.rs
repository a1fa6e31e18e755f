//! API Module
//!
//! Operational HTTP surface of the expiry service.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /stats` - Expiry sweep statistics

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
