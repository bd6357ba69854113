//! The shared query-service contract both variants implement, and the
//! error type scoped to single invocations of it.

use std::future::Future;

use super::domain::{
    AnalysisRequest, AnalysisResult, HealthCheckReport, RegionSnapshot, RegionSummary,
    TemporalComparison,
};

/// Failures scoped to one operation. Nothing here is fatal to the process;
/// a failed submission is simply re-invoked by the caller.
#[derive(Debug, thiserror::Error)]
pub enum CanopyError {
    /// Malformed submission, raised before any store mutation.
    #[error("invalid analysis request: {0}")]
    Validation(String),
    /// Remote variant only: the backend had no data for the lookup.
    #[error("no data available: {0}")]
    NotFound(String),
    /// Remote variant only: network failure or non-success HTTP status,
    /// carrying the server-provided message when present.
    #[error("backend request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for CanopyError {
    fn from(value: reqwest::Error) -> Self {
        CanopyError::Transport(value.to_string())
    }
}

/// The six query operations. The mock and remote variants honor identical
/// input and output shapes so callers stay transport-agnostic.
pub trait CanopyApi {
    /// Backend status, version, and per-service availability.
    fn health_check(&self) -> impl Future<Output = Result<HealthCheckReport, CanopyError>> + Send;

    /// Validate, analyze, and record one submission. The only
    /// state-mutating operation.
    fn submit_analysis(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResult, CanopyError>> + Send;

    /// Every recorded result, newest last.
    fn list_results(&self) -> impl Future<Output = Result<Vec<AnalysisResult>, CanopyError>> + Send;

    /// Aggregated city-wide summary.
    fn city_summary(&self) -> impl Future<Output = Result<RegionSummary, CanopyError>> + Send;

    /// Latest reading per campus sub-region; always exactly five entries
    /// in the fixed enumeration order.
    fn sub_region_snapshots(
        &self,
    ) -> impl Future<Output = Result<Vec<RegionSnapshot>, CanopyError>> + Send;

    /// Older/newer score pair for a named region.
    fn temporal_comparison(
        &self,
        region: &str,
    ) -> impl Future<Output = Result<TemporalComparison, CanopyError>> + Send;
}
