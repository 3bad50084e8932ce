//! Structured log events for cascade notifications.

use factmatrix_core::models::{
    ConfidenceChangedEvent, RewardIssuedEvent, SlashAppliedEvent, StakeRecordedEvent,
};

pub fn stake_recorded(event: &StakeRecordedEvent) {
    tracing::info!(
        event = "stake_recorded",
        fact = %event.fact.short(),
        staker = %event.staker,
        amount = event.amount,
        confidence = event.confidence.value(),
        "stake recorded"
    );
}

pub fn confidence_changed(event: &ConfidenceChangedEvent) {
    tracing::debug!(
        event = "confidence_changed",
        fact = %event.fact.short(),
        old = event.old.value(),
        new = event.new.value(),
        "confidence changed"
    );
}

pub fn reward_issued(event: &RewardIssuedEvent) {
    tracing::info!(
        event = "reward_issued",
        fact = %event.fact.short(),
        amount = event.amount,
        "reward issued"
    );
}

/// Slashes are logged at warn: they destroy stake.
pub fn slash_applied(event: &SlashAppliedEvent) {
    tracing::warn!(
        event = "slash_applied",
        fact = %event.fact.short(),
        amount = event.amount,
        "slash applied"
    );
}
