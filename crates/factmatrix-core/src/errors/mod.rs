//! Error types for the Fact Matrix engine.
//!
//! One top-level [`FactMatrixError`] with sub-enums for the ledger and config
//! layers, converted with `#[from]`.

mod config_error;
pub mod error_code;
mod ledger_error;

pub use config_error::ConfigError;
pub use error_code::FactMatrixErrorCode;
pub use ledger_error::LedgerError;

use crate::fact::FactHash;
use crate::models::{AccountId, TokenAmount};

/// Result alias used across the workspace.
pub type FactMatrixResult<T> = Result<T, FactMatrixError>;

/// Top-level error for every Fact Matrix operation.
///
/// All variants are precondition failures surfaced before any state is
/// committed. None are retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum FactMatrixError {
    #[error("stake of {amount} is below the minimum of {minimum}")]
    InsufficientStake {
        amount: TokenAmount,
        minimum: TokenAmount,
    },

    #[error("account {account} holds {available}, needs {needed}")]
    InsufficientBalance {
        account: AccountId,
        needed: TokenAmount,
        available: TokenAmount,
    },

    #[error("{caller} is not authorized for this operation")]
    Unauthorized { caller: AccountId },

    #[error("ledger transfer failed: {0}")]
    TransferFailed(#[source] LedgerError),

    #[error("fact not found: {hash}")]
    FactNotFound { hash: FactHash },

    #[error("amount must be non-zero")]
    ZeroAmount,

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<LedgerError> for FactMatrixError {
    fn from(err: LedgerError) -> Self {
        Self::TransferFailed(err)
    }
}

impl FactMatrixErrorCode for FactMatrixError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientStake { .. } => error_code::INSUFFICIENT_STAKE,
            Self::InsufficientBalance { .. } => error_code::INSUFFICIENT_BALANCE,
            Self::Unauthorized { .. } => error_code::UNAUTHORIZED,
            Self::TransferFailed(_) => error_code::TRANSFER_FAILED,
            Self::FactNotFound { .. } => error_code::FACT_NOT_FOUND,
            Self::ZeroAmount => error_code::ZERO_AMOUNT,
            Self::ConfigError(e) => e.error_code(),
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}
