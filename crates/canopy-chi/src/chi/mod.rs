//! Canopy Health Index (CHI) analysis: classification policy, score
//! generation, the in-memory result store, and the two interchangeable
//! query-service variants behind one contract.

pub mod api;
pub mod client;
pub mod domain;
pub mod generator;
pub mod policy;
pub mod remote;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use api::{CanopyApi, CanopyError};
pub use client::CanopyClient;
pub use domain::{
    AnalysisRequest, AnalysisResult, AreaKind, BackendHealth, ChangeDirection, HealthCheckReport,
    RegionSnapshot, RegionSummary, ServiceAvailability, SubRegion, TemporalComparison,
    TrendDirection,
};
pub use generator::{ScoreGenerator, VegetationMetrics};
pub use policy::{classify, HealthStatus};
pub use remote::RemoteCanopyService;
pub use router::canopy_router;
pub use service::{MockCanopyService, ServiceDelays};
pub use store::ResultStore;
