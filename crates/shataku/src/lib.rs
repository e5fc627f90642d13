pub mod config;
pub mod costs;
pub mod error;
pub mod telemetry;
