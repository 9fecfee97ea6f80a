//! Infrastructure adapters and runtime bootstrap.

pub mod dataset;
pub mod error;
pub mod telemetry;
