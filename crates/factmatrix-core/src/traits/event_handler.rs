use crate::models::{
    ConfidenceChangedEvent, FactEvent, RewardIssuedEvent, SlashAppliedEvent, StakeRecordedEvent,
};

/// Receives notifications published after a stake commits.
///
/// All methods have no-op defaults, so handlers only override the events they
/// care about. Dispatch is synchronous and in emission order.
pub trait IFactEventHandler: Send + Sync {
    fn on_stake_recorded(&self, _event: &StakeRecordedEvent) {}
    fn on_confidence_changed(&self, _event: &ConfidenceChangedEvent) {}
    fn on_reward_issued(&self, _event: &RewardIssuedEvent) {}
    fn on_slash_applied(&self, _event: &SlashAppliedEvent) {}

    /// Route an event to its typed method.
    fn handle(&self, event: &FactEvent) {
        match event {
            FactEvent::StakeRecorded(e) => self.on_stake_recorded(e),
            FactEvent::ConfidenceChanged(e) => self.on_confidence_changed(e),
            FactEvent::RewardIssued(e) => self.on_reward_issued(e),
            FactEvent::SlashApplied(e) => self.on_slash_applied(e),
        }
    }
}
