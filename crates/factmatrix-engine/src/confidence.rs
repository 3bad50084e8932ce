//! Confidence of a staked fact as its share of the competing pool.

use tracing::trace;

use factmatrix_core::errors::{FactMatrixError, FactMatrixResult};
use factmatrix_core::{Confidence, FactHash, TokenAmount};
use factmatrix_store::FactStore;

use crate::classifier;

/// `part * 100 / whole`, truncating. Zero when `whole` is zero.
pub(crate) fn percent(part: TokenAmount, whole: TokenAmount) -> TokenAmount {
    if whole == 0 {
        return 0;
    }
    match part.checked_mul(100) {
        Some(scaled) => scaled / whole,
        None => part / (whole / 100).max(1),
    }
}

/// Recalculates the confidence of the fact that was just staked on.
///
/// Competitors are never recalculated; they take a stake-ratio drop in the
/// cascade instead.
pub struct ConfidenceEngine;

impl ConfidenceEngine {
    /// Map a stake share onto [5, 95]; an empty pool gives 50.
    ///
    /// ```
    /// use factmatrix_engine::ConfidenceEngine;
    ///
    /// assert_eq!(ConfidenceEngine::share(800, 905).value(), 84);
    /// assert_eq!(ConfidenceEngine::share(100, 100).value(), 95);
    /// assert_eq!(ConfidenceEngine::share(0, 0).value(), 50);
    /// ```
    pub fn share(own: TokenAmount, pool: TokenAmount) -> Confidence {
        if pool == 0 {
            return Confidence::DEFAULT;
        }
        let raw = percent(own, pool).min(100);
        let floor = TokenAmount::from(Confidence::FLOOR.value());
        let ceiling = TokenAmount::from(Confidence::CEILING.value());
        Confidence::new((floor + raw * 90 / 100).min(ceiling))
    }

    /// Own stake plus the stake of every competitor, in index order.
    pub fn competing_pool(store: &FactStore, hash: &FactHash) -> FactMatrixResult<TokenAmount> {
        let target = store
            .get(hash)
            .ok_or(FactMatrixError::FactNotFound { hash: *hash })?;
        let competing: TokenAmount = store
            .iter()
            .filter(|other| other.hash != *hash && classifier::competes(&target.quad, &other.quad))
            .map(|other| other.total_staked)
            .fold(0, TokenAmount::saturating_add);
        Ok(target.total_staked.saturating_add(competing))
    }

    pub fn recalculate(store: &FactStore, hash: &FactHash) -> FactMatrixResult<Confidence> {
        let own = store
            .get(hash)
            .map(|f| f.total_staked)
            .ok_or(FactMatrixError::FactNotFound { hash: *hash })?;
        let pool = Self::competing_pool(store, hash)?;
        let confidence = Self::share(own, pool);
        trace!(fact = %hash.short(), own, pool, confidence = confidence.value(), "recalculated");
        Ok(confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_truncates() {
        assert_eq!(percent(100, 940), 10);
        assert_eq!(percent(1640, 1740), 94);
        assert_eq!(percent(5, 0), 0);
    }

    #[test]
    fn percent_survives_huge_amounts() {
        assert_eq!(percent(u128::MAX, u128::MAX), 100);
    }

    #[test]
    fn share_is_bounded() {
        assert_eq!(ConfidenceEngine::share(1, 1_000_000), Confidence::FLOOR);
        assert_eq!(ConfidenceEngine::share(500, 500), Confidence::CEILING);
        assert_eq!(ConfidenceEngine::share(100, 940).value(), 14);
    }
}
