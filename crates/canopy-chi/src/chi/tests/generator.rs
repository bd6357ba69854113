use super::common::seeded_rng;
use crate::chi::generator::ScoreGenerator;

const NAMED_REGIONS: &[(&str, (i64, i64))] = &[
    ("Bengaluru", (55, 70)),
    ("Campus", (65, 80)),
    ("Sports Ground", (60, 75)),
    ("Parking", (40, 55)),
    ("Roadside", (40, 55)),
    ("Hostel", (55, 70)),
];

#[test]
fn samples_stay_within_region_bounds() {
    let generator = ScoreGenerator;
    let mut rng = seeded_rng(7);

    for (region, (min, max)) in NAMED_REGIONS {
        for _ in 0..1_000 {
            let value = generator.sample(&mut rng, region);
            assert!(
                (*min..=*max).contains(&value),
                "{region}: {value} outside [{min}, {max}]"
            );
        }
    }
}

#[test]
fn both_bounds_are_reachable() {
    let generator = ScoreGenerator;
    let mut rng = seeded_rng(11);
    let (min, max) = generator.range_for("Campus");

    let mut saw_min = false;
    let mut saw_max = false;
    for _ in 0..10_000 {
        let value = generator.sample(&mut rng, "Campus");
        saw_min |= value == min;
        saw_max |= value == max;
    }

    assert!(saw_min, "minimum bound never drawn");
    assert!(saw_max, "maximum bound never drawn");
}

#[test]
fn unknown_regions_use_the_fallback_range() {
    let generator = ScoreGenerator;
    assert_eq!(generator.range_for("Atlantis"), (50, 70));

    let mut rng = seeded_rng(3);
    for _ in 0..1_000 {
        let value = generator.sample(&mut rng, "Atlantis");
        assert!((50..=70).contains(&value));
    }
}

#[test]
fn vegetation_metrics_honor_documented_ranges() {
    let generator = ScoreGenerator;
    let mut rng = seeded_rng(5);

    for _ in 0..1_000 {
        let metrics = generator.vegetation_metrics(&mut rng);
        assert!((30.0..=80.0).contains(&metrics.coverage));
        assert!((40.0..=80.0).contains(&metrics.healthy));
        assert!((10.0..=40.0).contains(&metrics.stressed));
    }
}
