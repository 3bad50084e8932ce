//! Trust-path analysis.
//!
//! A read-only view over the fact store that scores a fact (stored or not)
//! by looking for direct contradictions, chains of facts linking its head to
//! its tail, and chains ending in a contradiction. Each stored fact's
//! confidence stands in for its trust. Nothing here feeds the cascade.

mod paths;
mod trust;

pub use trust::{contradiction_impact, path_trust};

use tracing::instrument;

use factmatrix_core::constants::NEUTRAL_TRUST;
use factmatrix_core::models::{ContradictionPath, FactSummary, RelationshipReport, SupportPath};
use factmatrix_core::{Fact, FactQuad};
use factmatrix_store::FactStore;

use crate::classifier;

/// Analysis over one store snapshot.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipAnalyzer<'a> {
    store: &'a FactStore,
}

impl<'a> RelationshipAnalyzer<'a> {
    pub fn new(store: &'a FactStore) -> Self {
        Self { store }
    }

    /// Facts sharing `quad`'s category pair and exactly one of its values.
    pub fn direct_contradictions(&self, quad: &FactQuad) -> Vec<&'a Fact> {
        self.store
            .iter()
            .filter(|f| classifier::contradicts_directly(quad, &f.quad))
            .collect()
    }

    /// Facts competing with `quad` under the staking rule.
    pub fn competing_facts(&self, quad: &FactQuad) -> Vec<&'a Fact> {
        self.store
            .iter()
            .filter(|f| classifier::competes(quad, &f.quad))
            .collect()
    }

    /// Chains of facts leading from `quad`'s head to its tail.
    pub fn supporting_paths(&self, quad: &FactQuad) -> Vec<Vec<&'a Fact>> {
        self.paths_between(quad.head(), quad.tail())
    }

    /// Supporting chains from the fact's head or tail to a neighbouring pair
    /// whose last link directly contradicts `quad`.
    pub fn indirect_contradictions(&self, quad: &FactQuad) -> Vec<Vec<&'a Fact>> {
        let mut found = Vec::new();
        for anchor in [quad.head(), quad.tail()] {
            for neighbour in self.connections(anchor.0, anchor.1) {
                for path in self.paths_between(anchor, neighbour) {
                    let contradicts = path
                        .last()
                        .is_some_and(|last| classifier::contradicts_directly(&last.quad, quad));
                    if contradicts {
                        found.push(path);
                    }
                }
            }
        }
        found
    }

    /// Trust in `quad` on a 0–100 scale.
    ///
    /// The strongest direct contradiction wins if there is one; otherwise the
    /// best supporting path; otherwise neutral.
    #[instrument(level = "debug", skip(self, quad), fields(quad = %quad))]
    pub fn estimate_trust(&self, quad: &FactQuad) -> f64 {
        let strongest_contradiction = self
            .direct_contradictions(quad)
            .iter()
            .map(|f| f64::from(f.confidence))
            .reduce(f64::max);
        if let Some(strongest) = strongest_contradiction {
            return (100.0 - strongest).max(0.0);
        }
        self.supporting_paths(quad)
            .iter()
            .map(|path| path_trust(path))
            .reduce(f64::max)
            .unwrap_or(NEUTRAL_TRUST)
    }

    /// Facts naming `(category, value)` in either slot.
    pub fn related_facts(&self, category: &str, value: &str) -> Vec<&'a Fact> {
        self.store
            .iter()
            .filter(|f| f.quad.mentions(category, value))
            .collect()
    }

    /// Everything the store says about `quad`.
    #[instrument(level = "debug", skip(self, quad), fields(quad = %quad))]
    pub fn analyze(&self, quad: &FactQuad) -> RelationshipReport {
        RelationshipReport {
            quad: Some(quad.clone()),
            competing: summarize(&self.competing_facts(quad)),
            direct_contradictions: summarize(&self.direct_contradictions(quad)),
            supporting_paths: self
                .supporting_paths(quad)
                .into_iter()
                .map(|path| SupportPath {
                    trust: path_trust(&path),
                    facts: summarize(&path),
                })
                .collect(),
            indirect_contradictions: self
                .indirect_contradictions(quad)
                .into_iter()
                .map(|path| ContradictionPath {
                    impact: contradiction_impact(&path),
                    facts: summarize(&path),
                })
                .collect(),
            estimated_trust: self.estimate_trust(quad),
        }
    }
}

fn summarize(facts: &[&Fact]) -> Vec<FactSummary> {
    facts
        .iter()
        .map(|f| FactSummary {
            hash: f.hash,
            quad: f.quad.clone(),
            confidence: f.confidence,
        })
        .collect()
}
