use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// What happens to slashed tokens held by the pool account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlashAccounting {
    /// Burn slashed tokens so the pool balance always equals total stake.
    #[default]
    Burn,
    /// Leave slashed tokens in the pool, untracked by any fact.
    Retain,
}

/// Reward, slash, and competition-drop parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Confidence strictly above this rewards the staked fact. Default: 80.
    pub reward_threshold: u8,
    /// Competitor confidence strictly below this is slashed. Default: 20.
    pub slash_threshold: u8,
    /// Floor of the per-stake competitor drop. Default: 5.
    pub minimum_drop: u8,
    /// Reward = total / divisor. Default: 20.
    pub reward_divisor: u64,
    /// Slash = total / divisor. Default: 10.
    pub slash_divisor: u64,
    /// Default: burn.
    pub slash_accounting: SlashAccounting,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            reward_threshold: constants::DEFAULT_REWARD_THRESHOLD,
            slash_threshold: constants::DEFAULT_SLASH_THRESHOLD,
            minimum_drop: constants::DEFAULT_MINIMUM_DROP,
            reward_divisor: constants::DEFAULT_REWARD_DIVISOR,
            slash_divisor: constants::DEFAULT_SLASH_DIVISOR,
            slash_accounting: SlashAccounting::Burn,
        }
    }
}

impl PolicyConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("policy.reward_threshold", self.reward_threshold),
            ("policy.slash_threshold", self.slash_threshold),
            ("policy.minimum_drop", self.minimum_drop),
        ] {
            if value > 100 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("{value} exceeds 100"),
                });
            }
        }
        for (field, value) in [
            ("policy.reward_divisor", self.reward_divisor),
            ("policy.slash_divisor", self.slash_divisor),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }
}
