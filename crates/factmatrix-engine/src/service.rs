//! Single-writer access to a [`FactMatrix`] from async callers.

use std::sync::Arc;

use tokio::sync::Mutex;

use factmatrix_core::errors::FactMatrixResult;
use factmatrix_core::models::StakeReceipt;
use factmatrix_core::traits::ITokenLedger;
use factmatrix_core::{AccountId, FactQuad, TokenAmount};

use crate::cascade::FactMatrix;

/// A matrix behind `tokio::sync::Mutex`. Every stake runs to completion
/// before the next one starts, so cascades are strictly serialized.
pub struct SharedFactMatrix<L: ITokenLedger> {
    inner: Arc<Mutex<FactMatrix<L>>>,
}

impl<L: ITokenLedger> Clone for SharedFactMatrix<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: ITokenLedger> SharedFactMatrix<L> {
    pub fn new(matrix: FactMatrix<L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(matrix)),
        }
    }

    pub async fn stake_on_fact(
        &self,
        staker: &AccountId,
        quad: FactQuad,
        amount: TokenAmount,
    ) -> FactMatrixResult<StakeReceipt> {
        let mut guard = self.inner.lock().await;
        guard.stake_on_fact(staker, quad, amount)
    }

    pub async fn mint_initial_reputation(
        &self,
        caller: &AccountId,
        recipient: &AccountId,
        amount: TokenAmount,
    ) -> FactMatrixResult<()> {
        let mut guard = self.inner.lock().await;
        guard.mint_initial_reputation(caller, recipient, amount)
    }

    /// Acquire the lock and read.
    pub async fn read<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&FactMatrix<L>) -> T,
    {
        let guard = self.inner.lock().await;
        f(&guard)
    }

    /// Acquire the lock and run several operations as one unit.
    pub async fn write<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut FactMatrix<L>) -> T,
    {
        let mut guard = self.inner.lock().await;
        f(&mut guard)
    }

    /// Synchronous read for non-async contexts. Panics if called from within
    /// an async runtime.
    pub fn read_blocking<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&FactMatrix<L>) -> T,
    {
        let guard = self.inner.blocking_lock();
        f(&guard)
    }
}
