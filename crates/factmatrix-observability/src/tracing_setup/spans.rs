//! Span definitions for the staking cascade.

/// Span around one `stake_on_fact` call.
#[macro_export]
macro_rules! stake_span {
    ($fact:expr, $staker:expr, $amount:expr) => {
        tracing::info_span!("factmatrix.stake", fact = %$fact, staker = %$staker, amount = $amount)
    };
}

/// Span around the competitor scan.
#[macro_export]
macro_rules! cascade_span {
    ($fact:expr, $candidates:expr) => {
        tracing::debug_span!("factmatrix.cascade", fact = %$fact, candidates = $candidates)
    };
}

/// Span around ledger settlement of journaled effects.
#[macro_export]
macro_rules! settlement_span {
    ($effects:expr) => {
        tracing::debug_span!("factmatrix.settlement", effects = $effects)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const STAKE: &str = "factmatrix.stake";
    pub const CASCADE: &str = "factmatrix.cascade";
    pub const SETTLEMENT: &str = "factmatrix.settlement";
}
