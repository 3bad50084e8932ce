//! In-memory record of published notifications.

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

use factmatrix_core::models::FactEvent;
use factmatrix_core::traits::IFactEventHandler;
use factmatrix_core::{FactHash, TokenAmount};

/// Counts and token totals over a journal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JournalSummary {
    pub stakes_recorded: usize,
    pub confidence_changes: usize,
    pub rewards_issued: usize,
    pub slashes_applied: usize,
    pub total_staked: TokenAmount,
    pub total_rewarded: TokenAmount,
    pub total_slashed: TokenAmount,
}

/// Keeps every event it receives, in publication order.
///
/// Register it on a `FactMatrix` through an `Arc` and read it back for
/// reporting.
#[derive(Debug, Default)]
pub struct EventJournal {
    events: Mutex<Vec<FactEvent>>,
}

impl EventJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<FactEvent> {
        self.lock().clone()
    }

    /// Events concerning one fact.
    pub fn events_for(&self, fact: &FactHash) -> Vec<FactEvent> {
        self.lock()
            .iter()
            .filter(|e| e.fact() == *fact)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn summary(&self) -> JournalSummary {
        let mut summary = JournalSummary::default();
        for event in self.lock().iter() {
            match event {
                FactEvent::StakeRecorded(e) => {
                    summary.stakes_recorded += 1;
                    summary.total_staked = summary.total_staked.saturating_add(e.amount);
                }
                FactEvent::ConfidenceChanged(_) => summary.confidence_changes += 1,
                FactEvent::RewardIssued(e) => {
                    summary.rewards_issued += 1;
                    summary.total_rewarded = summary.total_rewarded.saturating_add(e.amount);
                }
                FactEvent::SlashApplied(e) => {
                    summary.slashes_applied += 1;
                    summary.total_slashed = summary.total_slashed.saturating_add(e.amount);
                }
            }
        }
        summary
    }

    // A panic while holding the lock leaves the Vec intact, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Vec<FactEvent>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl IFactEventHandler for EventJournal {
    fn handle(&self, event: &FactEvent) {
        self.lock().push(event.clone());
    }
}
