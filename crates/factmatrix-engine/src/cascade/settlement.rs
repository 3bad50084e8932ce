//! Ledger effects journaled during the in-memory cascade and applied after it.

use tracing::{debug, error};

use factmatrix_core::errors::LedgerError;
use factmatrix_core::traits::ITokenLedger;
use factmatrix_core::{AccountId, TokenAmount};

/// A deferred ledger call against the pool account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LedgerEffect {
    Burn(TokenAmount),
    Mint(TokenAmount),
}

impl LedgerEffect {
    fn apply<L: ITokenLedger>(self, ledger: &mut L, pool: &AccountId) -> Result<(), LedgerError> {
        match self {
            Self::Burn(amount) => ledger.burn(pool, amount),
            Self::Mint(amount) => ledger.mint(pool, amount),
        }
    }

    fn inverse(self) -> Self {
        match self {
            Self::Burn(amount) => Self::Mint(amount),
            Self::Mint(amount) => Self::Burn(amount),
        }
    }
}

/// Apply `effects` in order. On failure, undo the ones already applied in
/// reverse order and return the error.
pub(crate) fn settle<L: ITokenLedger>(
    ledger: &mut L,
    pool: &AccountId,
    effects: &[LedgerEffect],
) -> Result<(), LedgerError> {
    let _span = factmatrix_observability::settlement_span!(effects.len()).entered();
    for (applied, effect) in effects.iter().enumerate() {
        if let Err(err) = effect.apply(ledger, pool) {
            debug!(?effect, applied, error = %err, "settlement failed, compensating");
            compensate(ledger, pool, &effects[..applied]);
            return Err(err);
        }
    }
    Ok(())
}

fn compensate<L: ITokenLedger>(ledger: &mut L, pool: &AccountId, applied: &[LedgerEffect]) {
    for effect in applied.iter().rev() {
        if let Err(err) = effect.inverse().apply(ledger, pool) {
            error!(?effect, error = %err, "compensation failed, ledger diverged from fact state");
        }
    }
}
