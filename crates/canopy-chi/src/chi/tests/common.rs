use std::sync::Arc;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chi::domain::{AnalysisRequest, AreaKind, SubRegion};
use crate::chi::service::{MockCanopyService, ServiceDelays};
use crate::chi::store::ResultStore;

pub(super) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Mock service with deterministic entropy and no simulated latency.
pub(super) fn seeded_service(seed: u64) -> MockCanopyService {
    MockCanopyService::with_parts(
        Arc::new(ResultStore::new()),
        Box::new(seeded_rng(seed)),
        ServiceDelays::none(),
    )
}

pub(super) fn campus_request(sub_region: SubRegion) -> AnalysisRequest {
    AnalysisRequest {
        file_name: "canopy.png".to_string(),
        content: vec![0u8; 16],
        area_type: AreaKind::Campus,
        sub_region: Some(sub_region),
        date: NaiveDate::from_ymd_opt(2026, 8, 15).expect("valid date"),
    }
}

pub(super) fn city_request() -> AnalysisRequest {
    AnalysisRequest {
        file_name: "city.png".to_string(),
        content: vec![0u8; 16],
        area_type: AreaKind::City,
        sub_region: None,
        date: NaiveDate::from_ymd_opt(2026, 8, 15).expect("valid date"),
    }
}
