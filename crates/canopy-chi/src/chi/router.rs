//! HTTP surface serving the mock query service: the same six endpoints the
//! remote client calls, so both sides of the transport shim speak one wire
//! format.

use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::json;

use super::api::{CanopyApi, CanopyError};
use super::domain::{AnalysisRequest, AreaKind, SubRegion};
use super::service::MockCanopyService;

/// Router builder exposing the canopy analysis endpoints.
pub fn canopy_router(service: Arc<MockCanopyService>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/upload-image", post(upload_handler))
        .route("/get-results", get(results_handler))
        .route("/get-bangalore-summary", get(summary_handler))
        .route("/get-rvce-results", get(snapshots_handler))
        .route("/compare/:region", get(compare_handler))
        .with_state(service)
}

fn error_response(error: CanopyError) -> Response {
    let status = match &error {
        CanopyError::Validation(_) => StatusCode::BAD_REQUEST,
        CanopyError::NotFound(_) => StatusCode::NOT_FOUND,
        CanopyError::Transport(_) => StatusCode::BAD_GATEWAY,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

fn bad_request(message: impl Into<String>) -> Response {
    let payload = json!({ "error": message.into() });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

pub(crate) async fn health_handler(State(service): State<Arc<MockCanopyService>>) -> Response {
    match service.health_check().await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn upload_handler(
    State(service): State<Arc<MockCanopyService>>,
    mut multipart: Multipart,
) -> Response {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut area_type: Option<String> = None;
    let mut sub_region: Option<String> = None;
    let mut date: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(error) => return bad_request(format!("malformed multipart body: {error}")),
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let name = field.file_name().unwrap_or("upload").to_string();
                match field.bytes().await {
                    Ok(bytes) => file = Some((name, bytes.to_vec())),
                    Err(error) => return bad_request(format!("unreadable file field: {error}")),
                }
            }
            "area_type" => match field.text().await {
                Ok(value) => area_type = Some(value),
                Err(error) => return bad_request(format!("unreadable area_type: {error}")),
            },
            "sub_region" => match field.text().await {
                Ok(value) => sub_region = Some(value),
                Err(error) => return bad_request(format!("unreadable sub_region: {error}")),
            },
            "date" => match field.text().await {
                Ok(value) => date = Some(value),
                Err(error) => return bad_request(format!("unreadable date: {error}")),
            },
            _ => {}
        }
    }

    let Some((file_name, content)) = file else {
        return bad_request("No file provided");
    };

    let Some(area_type) = area_type.as_deref().and_then(AreaKind::parse) else {
        return bad_request("Invalid area_type. Must be Bengaluru or RVCE");
    };

    let sub_region = match sub_region {
        Some(raw) => match SubRegion::parse(&raw) {
            Some(region) => Some(region),
            None => {
                return bad_request(
                    "Invalid sub_region. Must be one of: Campus, Sports Ground, Parking, \
                     Hostel, Roadside",
                )
            }
        },
        None => None,
    };

    let Some(date) = date
        .as_deref()
        .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
    else {
        return bad_request("Invalid or missing date. Expected YYYY-MM-DD");
    };

    let request = AnalysisRequest {
        file_name,
        content,
        area_type,
        sub_region,
        date,
    };

    match service.submit_analysis(request).await {
        Ok(result) => (StatusCode::CREATED, Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn results_handler(State(service): State<Arc<MockCanopyService>>) -> Response {
    match service.list_results().await {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn summary_handler(State(service): State<Arc<MockCanopyService>>) -> Response {
    match service.city_summary().await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn snapshots_handler(State(service): State<Arc<MockCanopyService>>) -> Response {
    match service.sub_region_snapshots().await {
        Ok(snapshots) => (StatusCode::OK, Json(snapshots)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn compare_handler(
    State(service): State<Arc<MockCanopyService>>,
    Path(region): Path<String>,
) -> Response {
    match service.temporal_comparison(&region).await {
        Ok(comparison) => (StatusCode::OK, Json(comparison)).into_response(),
        Err(error) => error_response(error),
    }
}
