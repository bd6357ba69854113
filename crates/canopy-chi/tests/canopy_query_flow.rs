//! End-to-end specifications for the canopy query service driven through
//! the public facade: seeded store, submission, listing, aggregation, and
//! the transport shim's mock variant.

use std::sync::Arc;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use canopy_chi::chi::{
    AnalysisRequest, AreaKind, CanopyApi, CanopyClient, MockCanopyService, ResultStore,
    ServiceDelays, SubRegion,
};
use canopy_chi::config::{ApiMode, BackendConfig};

fn service(seed: u64) -> MockCanopyService {
    MockCanopyService::with_parts(
        Arc::new(ResultStore::new()),
        Box::new(StdRng::seed_from_u64(seed)),
        ServiceDelays::none(),
    )
}

fn hostel_upload() -> AnalysisRequest {
    AnalysisRequest {
        file_name: "hostel.png".to_string(),
        content: b"fake image".to_vec(),
        area_type: AreaKind::Campus,
        sub_region: Some(SubRegion::Hostel),
        date: NaiveDate::from_ymd_opt(2026, 8, 20).expect("valid date"),
    }
}

#[tokio::test]
async fn submission_flows_through_listing_and_snapshots() {
    let service = service(101);

    let before = service.list_results().await.expect("listing works");
    assert_eq!(before.len(), 6, "seeded store starts with six records");

    let result = service
        .submit_analysis(hostel_upload())
        .await
        .expect("submission succeeds");
    assert!((55..=70).contains(&result.chi_value));

    let after = service.list_results().await.expect("listing works");
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last().map(|r| r.id.as_str()), Some(result.id.as_str()));

    let snapshots = service
        .sub_region_snapshots()
        .await
        .expect("snapshots work");
    assert_eq!(snapshots.len(), 5);
    let hostel = snapshots
        .iter()
        .find(|s| s.region == SubRegion::Hostel)
        .expect("hostel entry present");
    assert_eq!(hostel.chi_value, result.chi_value);
}

#[tokio::test]
async fn summary_and_comparison_answer_from_a_fresh_store() {
    let service = service(202);

    let summary = service.city_summary().await.expect("summary works");
    assert_eq!(summary.total_analyses, 1, "only the seeded city record");
    assert!((55..=70).contains(&summary.overall_chi));

    let comparison = service
        .temporal_comparison("Bengaluru")
        .await
        .expect("comparison works");
    assert_eq!(comparison.change, comparison.new_chi - comparison.old_chi);
}

#[tokio::test]
async fn client_shim_dispatches_to_the_mock_variant() {
    let config = BackendConfig {
        mode: ApiMode::Mock,
        base_url: "http://localhost:5000".to_string(),
    };
    let client = CanopyClient::from_config(&config);
    assert!(matches!(client, CanopyClient::Mock(_)));

    let report = client.health_check().await.expect("health check works");
    assert!(!report.services.ai_module);

    let snapshots = client
        .sub_region_snapshots()
        .await
        .expect("snapshots work");
    assert_eq!(snapshots.len(), 5);
}

#[test]
fn client_shim_builds_the_remote_variant_from_config() {
    let config = BackendConfig {
        mode: ApiMode::Remote,
        base_url: "http://uchi.example:8000".to_string(),
    };
    assert!(matches!(
        CanopyClient::from_config(&config),
        CanopyClient::Remote(_)
    ));
}
