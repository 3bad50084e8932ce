//! Tests for the fact store, index, and category aggregates.

use factmatrix_core::errors::FactMatrixError;
use factmatrix_core::{create_fact_hash, AccountId, Confidence, FactQuad};
use factmatrix_store::{CategoryAggregates, FactStore};
use proptest::prelude::*;

fn quad(parts: [&str; 4]) -> FactQuad {
    FactQuad::from(parts)
}

#[test]
fn get_or_create_is_idempotent() {
    let mut store = FactStore::new();
    let blue = quad(["Name", "Alex", "House", "Blue"]);
    let hash = create_fact_hash(&blue);

    let (fact, created) = store.get_or_create(hash, &blue);
    assert!(created);
    assert_eq!(fact.confidence, Confidence::DEFAULT);
    assert_eq!(fact.total_staked, 0);

    let (_, created_again) = store.get_or_create(hash, &blue);
    assert!(!created_again);
    assert_eq!(store.len(), 1);
    assert_eq!(store.index().len(), 1);
}

#[test]
fn index_preserves_creation_order() {
    let mut store = FactStore::new();
    let quads = [
        quad(["Name", "Alex", "House", "Blue"]),
        quad(["House", "Blue", "Job", "Doctor"]),
        quad(["Job", "Doctor", "Drink", "Coffee"]),
    ];
    for q in &quads {
        store.get_or_create(create_fact_hash(q), q);
    }
    // Re-touching the first fact must not move it.
    store.get_or_create(create_fact_hash(&quads[0]), &quads[0]);

    let order: Vec<_> = store.iter().map(|f| f.quad.clone()).collect();
    assert_eq!(order, quads.to_vec());
    assert_eq!(store.index().position(&create_fact_hash(&quads[2])), Some(2));
}

#[test]
fn record_stake_accumulates_per_staker() {
    let mut store = FactStore::new();
    let blue = quad(["Name", "Alex", "House", "Blue"]);
    let hash = create_fact_hash(&blue);
    store.get_or_create(hash, &blue);

    let alice = AccountId::from("alice");
    let bob = AccountId::from("bob");
    store.record_stake(&hash, &alice, 100).unwrap();
    store.record_stake(&hash, &alice, 50).unwrap();
    store.record_stake(&hash, &bob, 200).unwrap();

    let fact = store.get(&hash).unwrap();
    assert_eq!(fact.total_staked, 350);
    assert_eq!(store.stake_of(&hash, &alice), 150);
    assert_eq!(store.stake_of(&hash, &bob), 200);
    assert_eq!(fact.staker_count(), 2);
}

#[test]
fn record_stake_rejects_zero_and_missing_fact() {
    let mut store = FactStore::new();
    let blue = quad(["Name", "Alex", "House", "Blue"]);
    let hash = create_fact_hash(&blue);
    let alice = AccountId::from("alice");

    assert!(matches!(
        store.record_stake(&hash, &alice, 100),
        Err(FactMatrixError::FactNotFound { .. })
    ));

    store.get_or_create(hash, &blue);
    assert!(matches!(
        store.record_stake(&hash, &alice, 0),
        Err(FactMatrixError::ZeroAmount)
    ));
}

#[test]
fn apply_confidence_reports_only_real_changes() {
    let mut store = FactStore::new();
    let blue = quad(["Name", "Alex", "House", "Blue"]);
    let hash = create_fact_hash(&blue);
    store.get_or_create(hash, &blue);

    assert_eq!(store.apply_confidence(&hash, Confidence::DEFAULT).unwrap(), None);

    let change = store
        .apply_confidence(&hash, Confidence::new(95))
        .unwrap()
        .expect("confidence moved");
    assert_eq!(change.old, Confidence::DEFAULT);
    assert_eq!(change.new.value(), 95);
}

#[test]
fn slash_clamps_at_zero_and_reward_adds() {
    let mut store = FactStore::new();
    let blue = quad(["Name", "Alex", "House", "Blue"]);
    let hash = create_fact_hash(&blue);
    store.get_or_create(hash, &blue);
    store.record_stake(&hash, &AccountId::from("alice"), 100).unwrap();

    assert_eq!(store.apply_slash(&hash, 30).unwrap(), 30);
    assert_eq!(store.apply_slash(&hash, 500).unwrap(), 70);
    assert_eq!(store.get(&hash).unwrap().total_staked, 0);

    store.apply_reward(&hash, 12).unwrap();
    assert_eq!(store.get(&hash).unwrap().total_staked, 12);
    // Individual stake records are untouched by slashing.
    assert_eq!(store.stake_of(&hash, &AccountId::from("alice")), 100);
}

#[test]
fn aggregates_track_both_slots() {
    let mut agg = CategoryAggregates::new();
    let blue = quad(["Name", "Alex", "House", "Blue"]);
    let red = quad(["Name", "Alex", "House", "Red"]);
    agg.credit(&blue, 800);
    agg.credit(&red, 100);
    agg.debit(&red, 10);

    assert_eq!(agg.value_stake("Name", "Alex"), 890);
    assert_eq!(agg.value_stake("House", "Blue"), 800);
    assert_eq!(agg.value_stake("House", "Red"), 90);
    assert_eq!(agg.category_stake("House"), 890);
    assert_eq!(agg.value_stake("Job", "Doctor"), 0);
    assert_eq!(agg.categories(), vec![("House", 890), ("Name", 890)]);
}

proptest! {
    #[test]
    fn total_never_negative_under_slashes(
        stakes in proptest::collection::vec(1u128..10_000, 1..10),
        slashes in proptest::collection::vec(0u128..50_000, 0..10),
    ) {
        let mut store = FactStore::new();
        let blue = quad(["Name", "Alex", "House", "Blue"]);
        let hash = create_fact_hash(&blue);
        store.get_or_create(hash, &blue);
        let alice = AccountId::from("alice");

        let mut expected: u128 = 0;
        for s in &stakes {
            store.record_stake(&hash, &alice, *s).unwrap();
            expected += s;
        }
        for s in &slashes {
            let applied = store.apply_slash(&hash, *s).unwrap();
            prop_assert!(applied <= *s);
            expected -= applied;
        }
        prop_assert_eq!(store.get(&hash).unwrap().total_staked, expected);
        prop_assert_eq!(store.total_staked(), expected);
    }
}
