//! Transport shim: one uniform client over the mock and remote variants,
//! selected by configuration at construction time.

use super::api::{CanopyApi, CanopyError};
use super::domain::{
    AnalysisRequest, AnalysisResult, HealthCheckReport, RegionSnapshot, RegionSummary,
    TemporalComparison,
};
use super::remote::RemoteCanopyService;
use super::service::MockCanopyService;
use crate::config::{ApiMode, BackendConfig};

/// Caller-facing client. Which variant answers is fixed when the client is
/// built; callers never inspect it again.
pub enum CanopyClient {
    Mock(MockCanopyService),
    Remote(RemoteCanopyService),
}

impl CanopyClient {
    pub fn from_config(config: &BackendConfig) -> Self {
        match config.mode {
            ApiMode::Mock => CanopyClient::Mock(MockCanopyService::new()),
            ApiMode::Remote => CanopyClient::Remote(RemoteCanopyService::new(&config.base_url)),
        }
    }
}

impl CanopyApi for CanopyClient {
    async fn health_check(&self) -> Result<HealthCheckReport, CanopyError> {
        match self {
            CanopyClient::Mock(service) => service.health_check().await,
            CanopyClient::Remote(service) => service.health_check().await,
        }
    }

    async fn submit_analysis(&self, request: AnalysisRequest) -> Result<AnalysisResult, CanopyError> {
        match self {
            CanopyClient::Mock(service) => service.submit_analysis(request).await,
            CanopyClient::Remote(service) => service.submit_analysis(request).await,
        }
    }

    async fn list_results(&self) -> Result<Vec<AnalysisResult>, CanopyError> {
        match self {
            CanopyClient::Mock(service) => service.list_results().await,
            CanopyClient::Remote(service) => service.list_results().await,
        }
    }

    async fn city_summary(&self) -> Result<RegionSummary, CanopyError> {
        match self {
            CanopyClient::Mock(service) => service.city_summary().await,
            CanopyClient::Remote(service) => service.city_summary().await,
        }
    }

    async fn sub_region_snapshots(&self) -> Result<Vec<RegionSnapshot>, CanopyError> {
        match self {
            CanopyClient::Mock(service) => service.sub_region_snapshots().await,
            CanopyClient::Remote(service) => service.sub_region_snapshots().await,
        }
    }

    async fn temporal_comparison(&self, region: &str) -> Result<TemporalComparison, CanopyError> {
        match self {
            CanopyClient::Mock(service) => service.temporal_comparison(region).await,
            CanopyClient::Remote(service) => service.temporal_comparison(region).await,
        }
    }
}
