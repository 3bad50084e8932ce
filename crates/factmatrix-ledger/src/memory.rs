use std::collections::HashMap;

use tracing::debug;

use factmatrix_core::errors::LedgerError;
use factmatrix_core::traits::ITokenLedger;
use factmatrix_core::{AccountId, TokenAmount};

/// Balances held in memory. Total supply always equals the sum of balances.
///
/// # Examples
///
/// ```
/// use factmatrix_core::traits::ITokenLedger;
/// use factmatrix_core::AccountId;
/// use factmatrix_ledger::InMemoryTokenLedger;
///
/// let alice = AccountId::from("alice");
/// let pool = AccountId::from("pool");
/// let mut ledger = InMemoryTokenLedger::new();
/// ledger.mint(&alice, 1_000).unwrap();
/// ledger.transfer(&alice, &pool, 400).unwrap();
/// assert_eq!(ledger.balance_of(&alice), 600);
/// assert_eq!(ledger.total_supply(), 1_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenLedger {
    balances: HashMap<AccountId, TokenAmount>,
    total_supply: TokenAmount,
}

impl InMemoryTokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts with a non-zero balance, sorted by id.
    pub fn holders(&self) -> Vec<(&AccountId, TokenAmount)> {
        let mut out: Vec<_> = self
            .balances
            .iter()
            .filter(|(_, b)| **b > 0)
            .map(|(a, b)| (a, *b))
            .collect();
        out.sort_unstable_by(|a, b| a.0.cmp(b.0));
        out
    }

    fn debit(&mut self, account: &AccountId, amount: TokenAmount) -> Result<(), LedgerError> {
        let available = self.balance_of(account);
        if available < amount {
            return Err(LedgerError::InsufficientFunds {
                account: account.clone(),
                needed: amount,
                available,
            });
        }
        self.balances.insert(account.clone(), available - amount);
        Ok(())
    }
}

impl ITokenLedger for InMemoryTokenLedger {
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        if from == to {
            // Self-transfer moves nothing but still requires the funds.
            let available = self.balance_of(from);
            if available < amount {
                return Err(LedgerError::InsufficientFunds {
                    account: from.clone(),
                    needed: amount,
                    available,
                });
            }
            return Ok(());
        }
        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or_else(|| LedgerError::BalanceOverflow {
                account: to.clone(),
                amount,
            })?;
        self.debit(from, amount)?;
        self.balances.insert(to.clone(), credited);
        debug!(from = %from, to = %to, amount, "transfer");
        Ok(())
    }

    fn mint(&mut self, to: &AccountId, amount: TokenAmount) -> Result<(), LedgerError> {
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::SupplyOverflow { amount })?;
        // Balance <= supply, so this cannot overflow once supply did not.
        let balance = self.balance_of(to) + amount;
        self.balances.insert(to.clone(), balance);
        self.total_supply = supply;
        debug!(to = %to, amount, supply, "mint");
        Ok(())
    }

    fn burn(&mut self, from: &AccountId, amount: TokenAmount) -> Result<(), LedgerError> {
        self.debit(from, amount)?;
        self.total_supply -= amount;
        debug!(from = %from, amount, supply = self.total_supply, "burn");
        Ok(())
    }

    fn balance_of(&self, account: &AccountId) -> TokenAmount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn total_supply(&self) -> TokenAmount {
        self.total_supply
    }
}
