use factmatrix_core::models::{
    ConfidenceChangedEvent, RewardIssuedEvent, SlashAppliedEvent, StakeRecordedEvent,
};
use factmatrix_core::traits::IFactEventHandler;

use crate::tracing_setup::events;

/// Logs every notification through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventHandler;

impl IFactEventHandler for TracingEventHandler {
    fn on_stake_recorded(&self, event: &StakeRecordedEvent) {
        events::stake_recorded(event);
    }

    fn on_confidence_changed(&self, event: &ConfidenceChangedEvent) {
        events::confidence_changed(event);
    }

    fn on_reward_issued(&self, event: &RewardIssuedEvent) {
        events::reward_issued(event);
    }

    fn on_slash_applied(&self, event: &SlashAppliedEvent) {
        events::slash_applied(event);
    }
}
