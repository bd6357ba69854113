//! Append-only in-memory store of analysis results.
//!
//! The store is an explicit object constructed once per process and shared
//! by handle; access happens from one logical thread of control at a time,
//! so the mutex only serializes the `Arc`-shared async handlers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::{Duration, Utc};
use rand::RngCore;

use super::domain::{AnalysisResult, AreaKind, SubRegion};
use super::generator::ScoreGenerator;
use super::policy::classify;

#[derive(Default)]
struct StoreInner {
    records: Vec<AnalysisResult>,
    seeded: bool,
}

/// In-memory collection of [`AnalysisResult`] records in insertion order.
/// Records are immutable once appended and never deleted.
pub struct ResultStore {
    inner: Mutex<StoreInner>,
    sequence: AtomicU64,
}

impl ResultStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
            sequence: AtomicU64::new(1),
        }
    }

    /// Next identifier in the per-store sequence.
    pub fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    /// Populate one record per campus sub-region (dated within the past 30
    /// days) plus one city record dated today. Runs at most once per store;
    /// repeated calls are no-ops.
    pub fn seed(&self, rng: &mut dyn RngCore) {
        use rand::Rng;

        let mut guard = self.inner.lock().expect("store mutex poisoned");
        if guard.seeded {
            return;
        }
        guard.seeded = true;

        let generator = ScoreGenerator;
        let today = Utc::now().date_naive();

        for region in SubRegion::ALL {
            let date = today - Duration::days(rng.gen_range(0..=30));
            let record = self.synthesize(rng, &generator, AreaKind::Campus, Some(region), date);
            guard.records.push(record);
        }

        let city = self.synthesize(rng, &generator, AreaKind::City, None, today);
        guard.records.push(city);
    }

    fn synthesize(
        &self,
        rng: &mut dyn RngCore,
        generator: &ScoreGenerator,
        area: AreaKind,
        sub_region: Option<SubRegion>,
        date: chrono::NaiveDate,
    ) -> AnalysisResult {
        let region_label = sub_region.map(SubRegion::label).unwrap_or(area.label());
        let chi = generator.sample(rng, region_label);
        let status = classify(chi as f64);
        let metrics = generator.vegetation_metrics(rng);
        let sequence = self.next_sequence();

        AnalysisResult {
            id: format!("result-{sequence:06}"),
            image_id: format!("img-{sequence:06}"),
            area_type: area,
            sub_region,
            chi_value: chi,
            status,
            interpretation: status.interpretation().to_string(),
            date,
            vegetation_coverage: metrics.coverage,
            healthy_vegetation: metrics.healthy,
            stressed_vegetation: metrics.stressed,
        }
    }

    /// Append a record. No deduplication by identifier; identifier
    /// uniqueness is the caller's responsibility.
    pub fn append(&self, record: AnalysisResult) {
        let mut guard = self.inner.lock().expect("store mutex poisoned");
        guard.records.push(record);
    }

    /// Snapshot copy of every record in insertion order. Mutating the
    /// returned vector does not touch the store.
    pub fn all(&self) -> Vec<AnalysisResult> {
        let guard = self.inner.lock().expect("store mutex poisoned");
        guard.records.clone()
    }

    pub fn len(&self) -> usize {
        let guard = self.inner.lock().expect("store mutex poisoned");
        guard.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most-recently-inserted record for the given sub-region, if any.
    pub fn latest_for_sub_region(&self, region: SubRegion) -> Option<AnalysisResult> {
        let guard = self.inner.lock().expect("store mutex poisoned");
        guard
            .records
            .iter()
            .rev()
            .find(|record| record.sub_region == Some(region))
            .cloned()
    }

    /// City-kind scores in insertion order, for summary aggregation.
    pub fn city_scores(&self) -> Vec<i64> {
        let guard = self.inner.lock().expect("store mutex poisoned");
        guard
            .records
            .iter()
            .filter(|record| record.area_type == AreaKind::City)
            .map(|record| record.chi_value)
            .collect()
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}
