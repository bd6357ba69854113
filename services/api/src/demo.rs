use canopy_chi::chi::{
    CanopyApi, MockCanopyService, ResultStore, ServiceDelays,
};
use canopy_chi::error::AppError;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Seed the score generator for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

/// Print a city summary and the five sub-region snapshots as JSON, without
/// starting the HTTP server.
pub(crate) async fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let service = MockCanopyService::with_parts(
        Arc::new(ResultStore::new()),
        Box::new(rng),
        ServiceDelays::none(),
    );

    let summary = service.city_summary().await?;
    let snapshots = service.sub_region_snapshots().await?;

    let report = serde_json::json!({
        "citySummary": summary,
        "subRegions": snapshots,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("report serializes")
    );

    Ok(())
}
