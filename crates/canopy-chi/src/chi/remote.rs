//! HTTP-backed variant of the query service.
//!
//! Each operation maps to one endpoint of the deployed analysis backend.
//! Non-success responses surface as [`CanopyError::Transport`] (or
//! [`CanopyError::NotFound`] for 404s) carrying the server's `error`
//! message when the body provides one.

use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use super::api::{CanopyApi, CanopyError};
use super::domain::{
    AnalysisRequest, AnalysisResult, HealthCheckReport, RegionSnapshot, RegionSummary,
    TemporalComparison,
};

/// Client for an external canopy analysis backend.
pub struct RemoteCanopyService {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteCanopyService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, CanopyError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = server_message(response).await.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

        if status == StatusCode::NOT_FOUND {
            Err(CanopyError::NotFound(message))
        } else {
            Err(CanopyError::Transport(format!("{status}: {message}")))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CanopyError> {
        let response = self.client.get(self.endpoint(path)).send().await?;
        Self::decode(response).await
    }
}

/// Error message from a `{"error": "..."}` body, if one came back.
async fn server_message(response: Response) -> Option<String> {
    let body: serde_json::Value = response.json().await.ok()?;
    body.get("error")?.as_str().map(str::to_string)
}

impl CanopyApi for RemoteCanopyService {
    async fn health_check(&self) -> Result<HealthCheckReport, CanopyError> {
        self.get_json("/health").await
    }

    async fn submit_analysis(&self, request: AnalysisRequest) -> Result<AnalysisResult, CanopyError> {
        let mut form = Form::new()
            .part(
                "file",
                Part::bytes(request.content.clone()).file_name(request.file_name.clone()),
            )
            .text("area_type", request.area_type.label())
            .text("date", request.date.format("%Y-%m-%d").to_string());
        if let Some(sub_region) = request.sub_region {
            form = form.text("sub_region", sub_region.label());
        }

        let response = self
            .client
            .post(self.endpoint("/upload-image"))
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn list_results(&self) -> Result<Vec<AnalysisResult>, CanopyError> {
        self.get_json("/get-results").await
    }

    async fn city_summary(&self) -> Result<RegionSummary, CanopyError> {
        self.get_json("/get-bangalore-summary").await
    }

    async fn sub_region_snapshots(&self) -> Result<Vec<RegionSnapshot>, CanopyError> {
        self.get_json("/get-rvce-results").await
    }

    async fn temporal_comparison(&self, region: &str) -> Result<TemporalComparison, CanopyError> {
        self.get_json(&format!("/compare/{region}")).await
    }
}
