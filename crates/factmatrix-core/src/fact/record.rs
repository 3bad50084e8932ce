use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::hash::FactHash;
use super::quad::FactQuad;
use crate::models::{AccountId, FactDetails, TokenAmount};

/// A fact as held by the store: its identity, derived confidence, and stake
/// ledger.
///
/// `stakes` records cumulative contributions per staker and never shrinks.
/// Slashes only reduce `total_staked`, so the sum of `stakes` can exceed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub hash: FactHash,
    pub quad: FactQuad,
    pub confidence: Confidence,
    pub total_staked: TokenAmount,
    pub stakes: BTreeMap<AccountId, TokenAmount>,
}

impl Fact {
    /// A freshly created fact: confidence 50, nothing staked.
    pub fn new(hash: FactHash, quad: FactQuad) -> Self {
        Self {
            hash,
            quad,
            confidence: Confidence::DEFAULT,
            total_staked: 0,
            stakes: BTreeMap::new(),
        }
    }

    /// Cumulative contribution of `staker`, zero if none.
    pub fn stake_of(&self, staker: &AccountId) -> TokenAmount {
        self.stakes.get(staker).copied().unwrap_or(0)
    }

    pub fn staker_count(&self) -> usize {
        self.stakes.len()
    }

    pub fn details(&self) -> FactDetails {
        FactDetails {
            hash: self.hash,
            category1: self.quad.category1.clone(),
            value1: self.quad.value1.clone(),
            category2: self.quad.category2.clone(),
            value2: self.quad.value2.clone(),
            confidence: self.confidence,
            total_staked: self.total_staked,
        }
    }
}
