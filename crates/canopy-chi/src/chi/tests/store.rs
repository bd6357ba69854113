use super::common::seeded_rng;
use crate::chi::domain::{AreaKind, SubRegion};
use crate::chi::store::ResultStore;

#[test]
fn seed_creates_one_record_per_sub_region_plus_the_city() {
    let store = ResultStore::new();
    store.seed(&mut seeded_rng(1));

    let records = store.all();
    assert_eq!(records.len(), 6);

    for region in SubRegion::ALL {
        assert!(
            records.iter().any(|r| r.sub_region == Some(region)),
            "missing seed record for {}",
            region.label()
        );
    }
    assert_eq!(
        records
            .iter()
            .filter(|r| r.area_type == AreaKind::City)
            .count(),
        1
    );
}

#[test]
fn seeding_twice_does_not_duplicate_records() {
    let store = ResultStore::new();
    store.seed(&mut seeded_rng(1));
    store.seed(&mut seeded_rng(2));
    assert_eq!(store.len(), 6);
}

#[test]
fn append_preserves_insertion_order() {
    let store = ResultStore::new();
    store.seed(&mut seeded_rng(4));

    let mut record = store.all().remove(0);
    record.id = "result-manual".to_string();
    store.append(record.clone());

    let records = store.all();
    assert_eq!(records.last().map(|r| r.id.as_str()), Some("result-manual"));
    assert_eq!(records.len(), 7);
}

#[test]
fn all_returns_a_detached_snapshot() {
    let store = ResultStore::new();
    store.seed(&mut seeded_rng(4));

    let mut snapshot = store.all();
    snapshot.clear();

    assert_eq!(store.len(), 6, "clearing the snapshot must not drain the store");
}

#[test]
fn latest_for_sub_region_prefers_the_most_recent_insertion() {
    let store = ResultStore::new();
    store.seed(&mut seeded_rng(9));

    let mut newer = store
        .latest_for_sub_region(SubRegion::Parking)
        .expect("seeded record exists");
    newer.id = "result-newer".to_string();
    newer.chi_value = 41;
    store.append(newer);

    let latest = store
        .latest_for_sub_region(SubRegion::Parking)
        .expect("record exists");
    assert_eq!(latest.id, "result-newer");
    assert_eq!(latest.chi_value, 41);
}

#[test]
fn latest_for_sub_region_is_none_on_an_unseeded_store() {
    let store = ResultStore::new();
    assert!(store.latest_for_sub_region(SubRegion::Hostel).is_none());
    assert!(store.is_empty());
}

#[test]
fn sequence_is_per_store() {
    let first = ResultStore::new();
    let second = ResultStore::new();
    assert_eq!(first.next_sequence(), 1);
    assert_eq!(first.next_sequence(), 2);
    assert_eq!(second.next_sequence(), 1);
}
