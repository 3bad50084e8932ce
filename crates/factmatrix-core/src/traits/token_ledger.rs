use crate::errors::LedgerError;
use crate::models::{AccountId, TokenAmount};

/// Fungible-token bookkeeping the engine stakes against.
///
/// Every call either fully succeeds or fails without effect.
pub trait ITokenLedger: Send + Sync {
    /// Move `amount` from `from` to `to`.
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: TokenAmount,
    ) -> Result<(), LedgerError>;

    /// Create `amount` new tokens in `to`, raising total supply.
    fn mint(&mut self, to: &AccountId, amount: TokenAmount) -> Result<(), LedgerError>;

    /// Destroy `amount` tokens held by `from`, lowering total supply.
    fn burn(&mut self, from: &AccountId, amount: TokenAmount) -> Result<(), LedgerError>;

    fn balance_of(&self, account: &AccountId) -> TokenAmount;

    fn total_supply(&self) -> TokenAmount;
}
