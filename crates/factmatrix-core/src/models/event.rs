//! Notifications emitted by the cascade.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::{AccountId, TokenAmount};
use crate::fact::{Confidence, FactHash};

/// A stake was recorded on a fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeRecordedEvent {
    pub fact: FactHash,
    pub staker: AccountId,
    /// Account that received the staked tokens.
    pub pool: AccountId,
    pub amount: TokenAmount,
    /// Confidence of the fact after recalculation.
    pub confidence: Confidence,
    pub timestamp: DateTime<Utc>,
}

/// A fact's confidence moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceChangedEvent {
    pub fact: FactHash,
    pub old: Confidence,
    pub new: Confidence,
    pub timestamp: DateTime<Utc>,
}

/// Tokens were minted into a fact's pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardIssuedEvent {
    pub fact: FactHash,
    pub amount: TokenAmount,
    pub timestamp: DateTime<Utc>,
}

/// Stake was removed from a fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashAppliedEvent {
    pub fact: FactHash,
    pub amount: TokenAmount,
    pub timestamp: DateTime<Utc>,
}

/// Any notification, tagged by kind when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FactEvent {
    StakeRecorded(StakeRecordedEvent),
    ConfidenceChanged(ConfidenceChangedEvent),
    RewardIssued(RewardIssuedEvent),
    SlashApplied(SlashAppliedEvent),
}

impl FactEvent {
    /// The fact this event concerns.
    pub fn fact(&self) -> FactHash {
        match self {
            Self::StakeRecorded(e) => e.fact,
            Self::ConfidenceChanged(e) => e.fact,
            Self::RewardIssued(e) => e.fact,
            Self::SlashApplied(e) => e.fact,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::StakeRecorded(_) => "stake_recorded",
            Self::ConfidenceChanged(_) => "confidence_changed",
            Self::RewardIssued(_) => "reward_issued",
            Self::SlashApplied(_) => "slash_applied",
        }
    }
}
