//! The arena of facts keyed by hash, plus the creation index.

use std::collections::HashMap;

use tracing::{debug, trace};

use factmatrix_core::errors::{FactMatrixError, FactMatrixResult};
use factmatrix_core::{AccountId, Confidence, Fact, FactHash, FactQuad, TokenAmount};

use crate::index::FactIndex;

/// A confidence transition reported by [`FactStore::apply_confidence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceChange {
    pub fact: FactHash,
    pub old: Confidence,
    pub new: Confidence,
}

/// Canonical set of facts. Facts are created on first stake and never removed.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    facts: HashMap<FactHash, Fact>,
    index: FactIndex,
}

impl FactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the fact for `hash`, creating it from `quad` if absent.
    ///
    /// The boolean is `true` when the fact was created by this call.
    pub fn get_or_create(&mut self, hash: FactHash, quad: &FactQuad) -> (&Fact, bool) {
        let created = !self.facts.contains_key(&hash);
        if created {
            debug!(fact = %hash.short(), quad = %quad, "creating fact");
            self.facts.insert(hash, Fact::new(hash, quad.clone()));
            self.index.push(hash);
        }
        (&self.facts[&hash], created)
    }

    /// Credit `amount` from `staker` to the fact.
    pub fn record_stake(
        &mut self,
        hash: &FactHash,
        staker: &AccountId,
        amount: TokenAmount,
    ) -> FactMatrixResult<()> {
        if amount == 0 {
            return Err(FactMatrixError::ZeroAmount);
        }
        let fact = self.fact_mut(hash)?;
        let entry = fact.stakes.entry(staker.clone()).or_insert(0);
        *entry = entry.saturating_add(amount);
        fact.total_staked = fact.total_staked.saturating_add(amount);
        trace!(fact = %hash.short(), staker = %staker, amount, total = fact.total_staked, "stake recorded");
        Ok(())
    }

    /// Set a fact's confidence. Returns the change, or `None` if the value
    /// did not move.
    pub fn apply_confidence(
        &mut self,
        hash: &FactHash,
        confidence: Confidence,
    ) -> FactMatrixResult<Option<ConfidenceChange>> {
        let fact = self.fact_mut(hash)?;
        let old = fact.confidence;
        if old == confidence {
            return Ok(None);
        }
        fact.confidence = confidence;
        Ok(Some(ConfidenceChange {
            fact: *hash,
            old,
            new: confidence,
        }))
    }

    /// Remove up to `amount` from the fact's total. Returns what was removed.
    pub fn apply_slash(&mut self, hash: &FactHash, amount: TokenAmount) -> FactMatrixResult<TokenAmount> {
        let fact = self.fact_mut(hash)?;
        let applied = amount.min(fact.total_staked);
        fact.total_staked -= applied;
        Ok(applied)
    }

    /// Add `amount` to the fact's total.
    pub fn apply_reward(&mut self, hash: &FactHash, amount: TokenAmount) -> FactMatrixResult<()> {
        let fact = self.fact_mut(hash)?;
        fact.total_staked = fact.total_staked.saturating_add(amount);
        Ok(())
    }

    pub fn get(&self, hash: &FactHash) -> Option<&Fact> {
        self.facts.get(hash)
    }

    pub fn contains(&self, hash: &FactHash) -> bool {
        self.facts.contains_key(hash)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn index(&self) -> &FactIndex {
        &self.index
    }

    /// Facts in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Fact> + '_ {
        self.index.iter().map(move |hash| {
            debug_assert!(self.facts.contains_key(hash), "index out of sync with store");
            &self.facts[hash]
        })
    }

    pub fn stake_of(&self, hash: &FactHash, staker: &AccountId) -> TokenAmount {
        self.facts.get(hash).map(|f| f.stake_of(staker)).unwrap_or(0)
    }

    /// Sum of `total_staked` over every fact.
    pub fn total_staked(&self) -> TokenAmount {
        self.facts.values().map(|f| f.total_staked).sum()
    }

    fn fact_mut(&mut self, hash: &FactHash) -> FactMatrixResult<&mut Fact> {
        self.facts
            .get_mut(hash)
            .ok_or(FactMatrixError::FactNotFound { hash: *hash })
    }
}
