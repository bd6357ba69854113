//! Score generation for the mock analysis pipeline.
//!
//! Every entry point takes the random source as an argument so tests can
//! inject a seeded rng; nothing here touches process-wide entropy.

use rand::RngCore;

/// Per-region CHI ranges, inclusive on both ends.
const CHI_RANGES: &[(&str, (i64, i64))] = &[
    ("Bengaluru", (55, 70)),
    ("Campus", (65, 80)),
    ("Sports Ground", (60, 75)),
    ("Parking", (40, 55)),
    ("Roadside", (40, 55)),
    ("Hostel", (55, 70)),
];

/// Fallback for region names outside the fixed table.
const DEFAULT_RANGE: (i64, i64) = (50, 70);

/// Auxiliary vegetation percentages attached to a generated result.
/// Independent uniform draws; the three are not required to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VegetationMetrics {
    pub coverage: f64,
    pub healthy: f64,
    pub stressed: f64,
}

/// Produces plausible CHI values constrained by per-region ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreGenerator;

impl ScoreGenerator {
    /// Valid score range for a region name, defaulting for unknown names.
    pub fn range_for(&self, region: &str) -> (i64, i64) {
        CHI_RANGES
            .iter()
            .find(|(name, _)| *name == region)
            .map(|(_, range)| *range)
            .unwrap_or(DEFAULT_RANGE)
    }

    /// Uniform integer draw inclusive of both bounds.
    pub fn sample(&self, rng: &mut dyn RngCore, region: &str) -> i64 {
        use rand::Rng;

        let (min, max) = self.range_for(region);
        rng.gen_range(min..=max)
    }

    /// Coverage in [30,80], healthy in [40,80], stressed in [10,40],
    /// each rounded to two decimals.
    pub fn vegetation_metrics(&self, rng: &mut dyn RngCore) -> VegetationMetrics {
        use rand::Rng;

        VegetationMetrics {
            coverage: round2(rng.gen_range(30.0..=80.0)),
            healthy: round2(rng.gen_range(40.0..=80.0)),
            stressed: round2(rng.gen_range(10.0..=40.0)),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
