//! Reward, slash, and competitor-drop magnitudes.

use factmatrix_core::config::{PolicyConfig, SlashAccounting};
use factmatrix_core::{Confidence, TokenAmount};

use crate::confidence::percent;

/// Pure functions of current state; the cascade applies their results.
#[derive(Debug, Clone, Default)]
pub struct RewardSlashPolicy {
    config: PolicyConfig,
}

impl RewardSlashPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Confidence taken from a competitor: the target's share of the two
    /// facts' combined stake, never less than `minimum_drop`.
    pub fn competition_drop(&self, target_total: TokenAmount, other_total: TokenAmount) -> u8 {
        let ratio = percent(target_total, target_total.saturating_add(other_total)).min(100);
        // ratio <= 100 fits in u8.
        (ratio as u8).max(self.config.minimum_drop)
    }

    pub fn should_slash(&self, confidence: Confidence) -> bool {
        confidence.value() < self.config.slash_threshold
    }

    pub fn should_reward(&self, confidence: Confidence) -> bool {
        confidence.value() > self.config.reward_threshold
    }

    pub fn slash_amount(&self, total_staked: TokenAmount) -> TokenAmount {
        total_staked / TokenAmount::from(self.config.slash_divisor)
    }

    pub fn reward_amount(&self, total_staked: TokenAmount) -> TokenAmount {
        total_staked / TokenAmount::from(self.config.reward_divisor)
    }

    pub fn accounting(&self) -> SlashAccounting {
        self.config.slash_accounting
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }
}
