//! In-memory mock variant of the query service.
//!
//! Operation semantics match the deployed backend; scores are generated
//! instead of computed from imagery, and every call awaits a simulated
//! processing delay standing in for real I/O latency.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::info;

use super::api::{CanopyApi, CanopyError};
use super::domain::{
    AnalysisRequest, AnalysisResult, AreaKind, BackendHealth, HealthCheckReport, RegionSnapshot,
    RegionSummary, ServiceAvailability, SubRegion, TemporalComparison, TrendDirection,
};
use super::generator::ScoreGenerator;
use super::policy::classify;
use super::store::ResultStore;

/// Simulated per-operation latency. Submissions run on a detached task, so
/// a caller that abandons the future mid-delay still gets its record
/// appended; the read operations mutate nothing, so cancelling them loses
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDelays {
    pub health: Duration,
    pub submit: Duration,
    pub listing: Duration,
    pub summary: Duration,
    pub snapshots: Duration,
    pub comparison: Duration,
}

impl Default for ServiceDelays {
    fn default() -> Self {
        Self {
            health: Duration::from_millis(300),
            submit: Duration::from_millis(1500),
            listing: Duration::from_millis(500),
            summary: Duration::from_millis(400),
            snapshots: Duration::from_millis(400),
            comparison: Duration::from_millis(500),
        }
    }
}

impl ServiceDelays {
    /// All-zero delays, for tests.
    pub const fn none() -> Self {
        Self {
            health: Duration::ZERO,
            submit: Duration::ZERO,
            listing: Duration::ZERO,
            summary: Duration::ZERO,
            snapshots: Duration::ZERO,
            comparison: Duration::ZERO,
        }
    }
}

/// Mock query service over a seeded [`ResultStore`].
pub struct MockCanopyService {
    store: Arc<ResultStore>,
    generator: ScoreGenerator,
    rng: Arc<Mutex<Box<dyn RngCore + Send>>>,
    delays: ServiceDelays,
}

impl MockCanopyService {
    /// Service over a fresh store seeded from OS entropy, with the
    /// reference latency values.
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(ResultStore::new()),
            Box::new(StdRng::from_entropy()),
            ServiceDelays::default(),
        )
    }

    /// Full injection seam: explicit store handle, random source, and
    /// delays. Seeds the store if it has not been seeded yet.
    pub fn with_parts(
        store: Arc<ResultStore>,
        mut rng: Box<dyn RngCore + Send>,
        delays: ServiceDelays,
    ) -> Self {
        store.seed(&mut *rng);
        Self {
            store,
            generator: ScoreGenerator,
            rng: Arc::new(Mutex::new(rng)),
            delays,
        }
    }

    pub fn store(&self) -> Arc<ResultStore> {
        Arc::clone(&self.store)
    }

    fn validate(request: &AnalysisRequest) -> Result<(), CanopyError> {
        match (request.area_type, request.sub_region) {
            (AreaKind::Campus, None) => Err(CanopyError::Validation(
                "sub_region is required for RVCE analyses".to_string(),
            )),
            (AreaKind::City, Some(_)) => Err(CanopyError::Validation(
                "sub_region is only valid for RVCE analyses".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn lock_rng(&self) -> std::sync::MutexGuard<'_, Box<dyn RngCore + Send>> {
        self.rng.lock().expect("rng mutex poisoned")
    }
}

impl Default for MockCanopyService {
    fn default() -> Self {
        Self::new()
    }
}

impl CanopyApi for MockCanopyService {
    async fn health_check(&self) -> Result<HealthCheckReport, CanopyError> {
        tokio::time::sleep(self.delays.health).await;

        Ok(HealthCheckReport {
            status: BackendHealth::Healthy,
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            services: ServiceAvailability {
                database: true,
                storage: true,
                // Flips to true once the vegetation-detection pipeline lands.
                ai_module: false,
            },
        })
    }

    async fn submit_analysis(&self, request: AnalysisRequest) -> Result<AnalysisResult, CanopyError> {
        Self::validate(&request)?;

        let store = Arc::clone(&self.store);
        let rng = Arc::clone(&self.rng);
        let generator = self.generator;
        let delay = self.delays.submit;

        // Detached task: the wait is non-cancelable, so a caller that
        // abandons this future mid-delay still gets the append.
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let record = {
                let mut rng = rng.lock().expect("rng mutex poisoned");
                let chi = generator.sample(&mut **rng, request.region_label());
                let status = classify(chi as f64);
                let metrics = generator.vegetation_metrics(&mut **rng);
                let sequence = store.next_sequence();

                AnalysisResult {
                    id: format!("result-{sequence:06}"),
                    image_id: format!("img-{sequence:06}"),
                    area_type: request.area_type,
                    sub_region: request.sub_region,
                    chi_value: chi,
                    status,
                    interpretation: status.interpretation().to_string(),
                    date: request.date,
                    vegetation_coverage: metrics.coverage,
                    healthy_vegetation: metrics.healthy,
                    stressed_vegetation: metrics.stressed,
                }
            };

            store.append(record.clone());
            info!(
                id = %record.id,
                area = record.area_type.label(),
                chi = record.chi_value,
                "analysis recorded"
            );
            record
        });

        Ok(task.await.expect("analysis task panicked"))
    }

    async fn list_results(&self) -> Result<Vec<AnalysisResult>, CanopyError> {
        tokio::time::sleep(self.delays.listing).await;
        Ok(self.store.all())
    }

    async fn city_summary(&self) -> Result<RegionSummary, CanopyError> {
        tokio::time::sleep(self.delays.summary).await;

        let scores = self.store.city_scores();
        let mean = if scores.is_empty() {
            // Never fails on an empty store: synthesize one ad hoc score.
            let mut rng = self.lock_rng();
            self.generator.sample(&mut **rng, AreaKind::City.label()) as f64
        } else {
            scores.iter().sum::<i64>() as f64 / scores.len() as f64
        };
        let overall = mean.round() as i64;

        // Trend from the last two city readings; fewer than two means no
        // observable movement.
        let (trend_direction, trend_percentage) = match scores.as_slice() {
            [.., previous, latest] if *previous != 0 => {
                let change = latest - previous;
                let direction = match change {
                    c if c > 0 => TrendDirection::Up,
                    c if c < 0 => TrendDirection::Down,
                    _ => TrendDirection::Stable,
                };
                let percentage = (change.abs() as f64 / *previous as f64 * 1000.0).round() / 10.0;
                (direction, percentage)
            }
            _ => (TrendDirection::Stable, 0.0),
        };

        Ok(RegionSummary {
            overall_chi: overall,
            status: classify(overall as f64),
            total_analyses: scores.len().max(1),
            last_updated: Utc::now(),
            trend_direction,
            trend_percentage,
        })
    }

    async fn sub_region_snapshots(&self) -> Result<Vec<RegionSnapshot>, CanopyError> {
        tokio::time::sleep(self.delays.snapshots).await;

        let today = Utc::now().date_naive();
        let snapshots = SubRegion::ALL
            .into_iter()
            .map(|region| match self.store.latest_for_sub_region(region) {
                Some(record) => RegionSnapshot {
                    region,
                    chi_value: record.chi_value,
                    status: record.status,
                    last_analyzed: record.date,
                },
                None => {
                    // Freshly generated, not stored.
                    let mut rng = self.lock_rng();
                    let chi = self.generator.sample(&mut **rng, region.label());
                    RegionSnapshot {
                        region,
                        chi_value: chi,
                        status: classify(chi as f64),
                        last_analyzed: today,
                    }
                }
            })
            .collect();

        Ok(snapshots)
    }

    async fn temporal_comparison(&self, region: &str) -> Result<TemporalComparison, CanopyError> {
        tokio::time::sleep(self.delays.comparison).await;

        let (old_chi, new_chi) = {
            let mut rng = self.lock_rng();
            let old_chi = self.generator.sample(&mut **rng, region);
            let new_chi = self.generator.sample(&mut **rng, region);
            (old_chi, new_chi)
        };

        let today = Utc::now().date_naive();
        let old_date = today - chrono::Duration::days(30);

        Ok(TemporalComparison::between(
            region, old_chi, old_date, new_chi, today,
        ))
    }
}
