//! Configuration for the Fact Matrix engine, loaded from TOML.
//!
//! Every section uses `#[serde(default)]`, so an empty document yields the
//! documented defaults.

mod observability_config;
mod policy_config;
mod staking_config;

pub use observability_config::ObservabilityConfig;
pub use policy_config::{PolicyConfig, SlashAccounting};
pub use staking_config::StakingConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, FactMatrixResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactMatrixConfig {
    pub staking: StakingConfig,
    pub policy: PolicyConfig,
    pub observability: ObservabilityConfig,
}

impl FactMatrixConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> FactMatrixResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: &Path) -> FactMatrixResult<Self> {
        let display = path.display().to_string();
        let source = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: display.clone(),
        })?;
        let config: Self = toml::from_str(&source).map_err(|e| ConfigError::ParseError {
            path: display,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.staking.validate()?;
        self.policy.validate()?;
        if self.staking.pool_account == self.staking.administrator {
            return Err(ConfigError::InvalidValue {
                field: "staking.pool_account".to_string(),
                message: "pool account must differ from the administrator".to_string(),
            });
        }
        Ok(())
    }
}
