use factmatrix_core::fact::*;
use factmatrix_core::models::{FactDetails, FactEvent, RewardIssuedEvent};
use factmatrix_core::AccountId;
use proptest::prelude::*;

fn blue() -> FactQuad {
    FactQuad::new("Name", "Alex", "House", "Blue")
}

#[test]
fn hash_is_deterministic() {
    assert_eq!(create_fact_hash(&blue()), create_fact_hash(&blue()));
}

#[test]
fn hash_is_order_sensitive() {
    let swapped = FactQuad::new("House", "Blue", "Name", "Alex");
    assert_ne!(create_fact_hash(&blue()), create_fact_hash(&swapped));
}

#[test]
fn hash_is_not_fooled_by_concatenation() {
    let a = FactQuad::new("ab", "c", "d", "e");
    let b = FactQuad::new("a", "bc", "d", "e");
    assert_ne!(create_fact_hash(&a), create_fact_hash(&b));
}

#[test]
fn hash_hex_roundtrip() {
    let hash = create_fact_hash(&blue());
    let hex = hash.to_hex();
    assert_eq!(hex.len(), 64);
    assert_eq!(hex.parse::<FactHash>().unwrap(), hash);
    assert!("not-hex".parse::<FactHash>().is_err());

    let json = serde_json::to_string(&hash).unwrap();
    assert_eq!(json, format!("\"{hex}\""));
}

#[test]
fn new_fact_starts_neutral_and_empty() {
    let fact = Fact::new(create_fact_hash(&blue()), blue());
    assert_eq!(fact.confidence, Confidence::DEFAULT);
    assert_eq!(fact.total_staked, 0);
    assert_eq!(fact.stake_of(&AccountId::from("alice")), 0);
    assert!(fact.details().exists());
}

#[test]
fn default_details_are_zero_valued() {
    let details = FactDetails::default();
    assert!(!details.exists());
    assert_eq!(details.confidence, Confidence::ZERO);
    assert_eq!(details.total_staked, 0);
    assert!(details.category1.is_empty());
}

#[test]
fn quad_anchors() {
    let quad = blue();
    assert_eq!(quad.head(), ("Name", "Alex"));
    assert_eq!(quad.tail(), ("House", "Blue"));
    assert!(quad.mentions("House", "Blue"));
    assert!(!quad.mentions("House", "Red"));
    assert_eq!(quad.opposite_of("House", "Blue"), Some(("Name", "Alex")));
    assert_eq!(quad.opposite_of("Job", "Doctor"), None);
    assert_eq!(quad.to_string(), "Alex (Name) - Blue (House)");
}

#[test]
fn event_serializes_with_kind_tag() {
    let event = FactEvent::RewardIssued(RewardIssuedEvent {
        fact: create_fact_hash(&blue()),
        amount: 25,
        timestamp: chrono::Utc::now(),
    });
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["event"], "reward_issued");
    assert_eq!(event.kind(), "reward_issued");
}

proptest! {
    #[test]
    fn distinct_quads_get_distinct_hashes(
        a in proptest::array::uniform4("[a-z]{0,6}"),
        b in proptest::array::uniform4("[a-z]{0,6}"),
    ) {
        let qa = FactQuad::new(a[0].clone(), a[1].clone(), a[2].clone(), a[3].clone());
        let qb = FactQuad::new(b[0].clone(), b[1].clone(), b[2].clone(), b[3].clone());
        prop_assert_eq!(qa == qb, create_fact_hash(&qa) == create_fact_hash(&qb));
    }

    #[test]
    fn confidence_never_exceeds_one_hundred(raw in any::<u128>(), drop in any::<u8>()) {
        let c = Confidence::new(raw);
        prop_assert!(c.value() <= 100);
        prop_assert!(c.saturating_drop(drop) <= c);
    }
}
