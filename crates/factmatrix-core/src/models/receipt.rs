use serde::{Deserialize, Serialize};

use super::account::{AccountId, TokenAmount};
use crate::fact::{Confidence, FactHash};

/// Effect of one stake on one competing fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorAdjustment {
    pub fact: FactHash,
    pub old_confidence: Confidence,
    pub new_confidence: Confidence,
    /// Drop that was requested (before clamping at zero).
    pub drop: u8,
    /// Stake removed from the competitor, zero when not slashed.
    pub slashed: TokenAmount,
}

/// Summary of a completed `stake_on_fact` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeReceipt {
    pub fact: FactHash,
    pub staker: AccountId,
    pub amount: TokenAmount,
    /// Whether this stake created the fact.
    pub created: bool,
    /// Final confidence of the staked fact.
    pub confidence: Confidence,
    /// Final total staked on the fact, rewards included.
    pub total_staked: TokenAmount,
    /// Competitors touched, in index order.
    pub adjustments: Vec<CompetitorAdjustment>,
    /// Reward minted for the staked fact, if any.
    pub reward: Option<TokenAmount>,
}

impl StakeReceipt {
    /// Total stake slashed from competitors by this call.
    pub fn total_slashed(&self) -> TokenAmount {
        self.adjustments.iter().map(|a| a.slashed).sum()
    }
}
