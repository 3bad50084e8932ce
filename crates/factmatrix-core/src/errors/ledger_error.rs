use super::error_code::{self, FactMatrixErrorCode};
use crate::models::{AccountId, TokenAmount};

/// Errors reported by a token ledger implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("insufficient funds in {account}: needed {needed}, available {available}")]
    InsufficientFunds {
        account: AccountId,
        needed: TokenAmount,
        available: TokenAmount,
    },

    #[error("minting {amount} would overflow total supply")]
    SupplyOverflow { amount: TokenAmount },

    #[error("crediting {amount} would overflow the balance of {account}")]
    BalanceOverflow {
        account: AccountId,
        amount: TokenAmount,
    },

    #[error("ledger rejected the operation: {reason}")]
    Rejected { reason: String },
}

impl FactMatrixErrorCode for LedgerError {
    fn error_code(&self) -> &'static str {
        error_code::LEDGER_ERROR
    }
}
