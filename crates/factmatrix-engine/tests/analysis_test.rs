//! Trust-path analysis over a hand-built store.

use factmatrix_core::{create_fact_hash, Confidence, FactQuad};
use factmatrix_engine::analysis::{contradiction_impact, path_trust};
use factmatrix_engine::RelationshipAnalyzer;
use factmatrix_store::FactStore;

fn add(store: &mut FactStore, parts: [&str; 4], confidence: u128) {
    let quad = FactQuad::from(parts);
    let hash = create_fact_hash(&quad);
    store.get_or_create(hash, &quad);
    store
        .apply_confidence(&hash, Confidence::new(confidence))
        .unwrap();
}

/// Five facts from the zebra-puzzle example, in insertion order.
fn puzzle() -> FactStore {
    let mut store = FactStore::new();
    add(&mut store, ["Name", "Alex", "House", "Blue"], 90);
    add(&mut store, ["House", "Blue", "Job", "Doctor"], 80);
    add(&mut store, ["Job", "Doctor", "Drink", "Coffee"], 70);
    add(&mut store, ["Name", "Brooke", "Job", "Teacher"], 85);
    add(&mut store, ["House", "Red", "Job", "Teacher"], 75);
    store
}

#[test]
fn finds_direct_contradiction() {
    let store = puzzle();
    let analyzer = RelationshipAnalyzer::new(&store);
    let quad = FactQuad::from(["Name", "Brooke", "House", "Blue"]);

    let direct = analyzer.direct_contradictions(&quad);
    assert_eq!(direct.len(), 1);
    assert_eq!(direct[0].quad, FactQuad::from(["Name", "Alex", "House", "Blue"]));
    assert!((analyzer.estimate_trust(&quad) - 10.0).abs() < 1e-9);
}

#[test]
fn finds_supporting_path() {
    let store = puzzle();
    let analyzer = RelationshipAnalyzer::new(&store);
    let quad = FactQuad::from(["Name", "Alex", "Job", "Doctor"]);

    let paths = analyzer.supporting_paths(&quad);
    assert_eq!(paths.len(), 1);
    let hops: Vec<_> = paths[0].iter().map(|f| f.quad.clone()).collect();
    assert_eq!(
        hops,
        [
            FactQuad::from(["Name", "Alex", "House", "Blue"]),
            FactQuad::from(["House", "Blue", "Job", "Doctor"]),
        ]
    );
}

#[test]
fn trust_decays_along_the_path() {
    let store = puzzle();
    let analyzer = RelationshipAnalyzer::new(&store);
    let trust = analyzer.estimate_trust(&FactQuad::from(["Name", "Alex", "Job", "Doctor"]));
    assert!((trust - 57.6).abs() < 1e-9);
    assert!(trust < 90.0);
    assert!(trust < 80.0);
}

#[test]
fn finds_indirect_contradiction() {
    let store = puzzle();
    let analyzer = RelationshipAnalyzer::new(&store);
    let quad = FactQuad::from(["Name", "Alex", "Job", "Teacher"]);

    let indirect = analyzer.indirect_contradictions(&quad);
    assert_eq!(indirect.len(), 1);
    assert_eq!(
        indirect[0][0].quad,
        FactQuad::from(["Name", "Brooke", "Job", "Teacher"])
    );
    assert!((contradiction_impact(&indirect[0]) - 85.0).abs() < 1e-9);
}

#[test]
fn counts_distinct_paths() {
    let mut store = puzzle();
    add(&mut store, ["Name", "Alex", "Drink", "Coffee"], 85);
    // Restating an existing fact only updates its score.
    add(&mut store, ["Job", "Doctor", "Drink", "Coffee"], 75);
    assert_eq!(store.len(), 6);

    let analyzer = RelationshipAnalyzer::new(&store);
    let report = analyzer.analyze(&FactQuad::from(["Name", "Alex", "Job", "Doctor"]));
    assert_eq!(report.supporting_paths.len(), 2);
    assert!((report.supporting_paths[0].trust - 57.6).abs() < 1e-9);
    // Through Drink: min(85, 75) * (75 * 85 / 10000).
    assert!((report.supporting_paths[1].trust - 47.8125).abs() < 1e-9);
    // The best path wins.
    assert!((report.estimated_trust - 57.6).abs() < 1e-9);
}

#[test]
fn empty_store_is_neutral() {
    let store = FactStore::new();
    let analyzer = RelationshipAnalyzer::new(&store);
    let quad = FactQuad::from(["Name", "Alex", "House", "Blue"]);
    assert_eq!(analyzer.estimate_trust(&quad), 50.0);

    let report = analyzer.analyze(&quad);
    assert!(report.competing.is_empty());
    assert!(report.supporting_paths.is_empty());
    assert!(report.indirect_contradictions.is_empty());
    assert_eq!(report.quad, Some(quad));
}

#[test]
fn report_lists_competitors() {
    let store = puzzle();
    let analyzer = RelationshipAnalyzer::new(&store);
    let report = analyzer.analyze(&FactQuad::from(["Name", "Alex", "House", "Red"]));

    let competing: Vec<_> = report.competing.iter().map(|f| f.quad.clone()).collect();
    assert_eq!(competing, [FactQuad::from(["Name", "Alex", "House", "Blue"])]);
    assert_eq!(report.direct_contradictions.len(), 1);
    assert_eq!(report.direct_contradictions[0].confidence.value(), 90);
    assert!((report.estimated_trust - 10.0).abs() < 1e-9);
}

#[test]
fn related_facts_match_either_slot() {
    let store = puzzle();
    let analyzer = RelationshipAnalyzer::new(&store);
    let related = analyzer.related_facts("House", "Blue");
    assert_eq!(related.len(), 2);
    assert!(analyzer.related_facts("Drink", "Tea").is_empty());
    assert_eq!(
        analyzer.connections("Job", "Teacher"),
        [("Name", "Brooke"), ("House", "Red")]
    );
}

#[test]
fn path_depth_is_bounded() {
    let mut store = FactStore::new();
    // A chain of five links from A to F; only four fit in a path.
    for pair in ["A", "B", "C", "D", "E", "F"].windows(2) {
        add(&mut store, ["X", pair[0], "X", pair[1]], 90);
    }
    let analyzer = RelationshipAnalyzer::new(&store);
    assert!(analyzer.paths_between(("X", "A"), ("X", "F")).is_empty());
    assert_eq!(analyzer.paths_between(("X", "A"), ("X", "E")).len(), 1);
    assert_eq!(path_trust(&[]), 0.0);
}
