use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::policy::HealthStatus;

/// Analysis scope: the city-wide study area or the campus study area.
///
/// Wire labels keep the study-area names the deployed backend uses so the
/// mock and remote variants stay interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaKind {
    #[serde(rename = "Bengaluru")]
    City,
    #[serde(rename = "RVCE")]
    Campus,
}

impl AreaKind {
    pub const fn label(self) -> &'static str {
        match self {
            AreaKind::City => "Bengaluru",
            AreaKind::Campus => "RVCE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Bengaluru" => Some(AreaKind::City),
            "RVCE" => Some(AreaKind::Campus),
            _ => None,
        }
    }
}

/// The five fixed campus zones. Snapshot queries always cover all of them
/// in this declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubRegion {
    Campus,
    #[serde(rename = "Sports Ground")]
    SportsGround,
    Parking,
    Hostel,
    Roadside,
}

impl SubRegion {
    pub const ALL: [SubRegion; 5] = [
        SubRegion::Campus,
        SubRegion::SportsGround,
        SubRegion::Parking,
        SubRegion::Hostel,
        SubRegion::Roadside,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SubRegion::Campus => "Campus",
            SubRegion::SportsGround => "Sports Ground",
            SubRegion::Parking => "Parking",
            SubRegion::Hostel => "Hostel",
            SubRegion::Roadside => "Roadside",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|region| region.label() == value.trim())
    }
}

/// One analysis submission headed for the query service. The mock variant
/// only records the file name; the remote variant ships the bytes as a
/// multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub file_name: String,
    pub content: Vec<u8>,
    pub area_type: AreaKind,
    pub sub_region: Option<SubRegion>,
    pub date: NaiveDate,
}

impl AnalysisRequest {
    /// Score-generator lookup key: the sub-region when present, otherwise
    /// the study-area label itself.
    pub fn region_label(&self) -> &'static str {
        match self.sub_region {
            Some(sub) => sub.label(),
            None => self.area_type.label(),
        }
    }
}

/// The central record: one classified CHI reading per analyzed image.
/// Immutable once appended to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: String,
    pub image_id: String,
    pub area_type: AreaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_region: Option<SubRegion>,
    pub chi_value: i64,
    pub status: HealthStatus,
    pub interpretation: String,
    pub date: NaiveDate,
    pub vegetation_coverage: f64,
    pub healthy_vegetation: f64,
    pub stressed_vegetation: f64,
}

/// Direction of the city-wide trend indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Aggregate over every city-kind record: a computed view, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    #[serde(rename = "overallCHI")]
    pub overall_chi: i64,
    pub status: HealthStatus,
    pub total_analyses: usize,
    pub last_updated: DateTime<Utc>,
    pub trend_direction: TrendDirection,
    pub trend_percentage: f64,
}

/// Latest known reading for one campus sub-region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSnapshot {
    pub region: SubRegion,
    pub chi_value: i64,
    pub status: HealthStatus,
    pub last_analyzed: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Increase,
    Decrease,
    Stable,
}

/// Older/newer score pair for one named region with derived deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalComparison {
    pub region: String,
    #[serde(rename = "oldCHI")]
    pub old_chi: i64,
    pub old_date: NaiveDate,
    #[serde(rename = "newCHI")]
    pub new_chi: i64,
    pub new_date: NaiveDate,
    pub change: i64,
    pub change_percentage: f64,
    pub direction: ChangeDirection,
}

impl TemporalComparison {
    /// Derive the deltas for a score pair. `change_percentage` is rounded
    /// to one decimal; a zero old score yields 0.0 instead of dividing.
    pub fn between(
        region: impl Into<String>,
        old_chi: i64,
        old_date: NaiveDate,
        new_chi: i64,
        new_date: NaiveDate,
    ) -> Self {
        let change = new_chi - old_chi;
        let change_percentage = if old_chi == 0 {
            0.0
        } else {
            (change as f64 / old_chi as f64 * 1000.0).round() / 10.0
        };
        let direction = match change {
            c if c > 0 => ChangeDirection::Increase,
            c if c < 0 => ChangeDirection::Decrease,
            _ => ChangeDirection::Stable,
        };

        Self {
            region: region.into(),
            old_chi,
            old_date,
            new_chi,
            new_date,
            change,
            change_percentage,
            direction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendHealth {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Availability of the backend's constituent services. The AI module stays
/// `false` until the vegetation-detection pipeline exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAvailability {
    pub database: bool,
    pub storage: bool,
    pub ai_module: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckReport {
    pub status: BackendHealth,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub services: ServiceAvailability,
}
