pub mod chi;
pub mod config;
pub mod error;
pub mod telemetry;
