use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;
use crate::models::AccountId;

/// Stake admission and account layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakingConfig {
    /// Smallest accepted stake. Default: 100.
    pub minimum_stake: u64,
    /// Ledger account holding staked tokens. Default: "factmatrix://pool".
    pub pool_account: AccountId,
    /// Identity allowed to mint initial reputation. Default: "factmatrix://admin".
    pub administrator: AccountId,
}

impl Default for StakingConfig {
    fn default() -> Self {
        Self {
            minimum_stake: constants::DEFAULT_MINIMUM_STAKE,
            pool_account: AccountId::from(constants::DEFAULT_POOL_ACCOUNT),
            administrator: AccountId::from(constants::DEFAULT_ADMINISTRATOR),
        }
    }
}

impl StakingConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_stake == 0 {
            return Err(ConfigError::InvalidValue {
                field: "staking.minimum_stake".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.pool_account.0.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "staking.pool_account".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
