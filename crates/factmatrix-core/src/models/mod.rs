//! Value types and reporting models shared across crates.

pub mod account;
pub mod details;
pub mod event;
pub mod receipt;
pub mod relationship;

pub use account::{AccountId, TokenAmount};
pub use details::FactDetails;
pub use event::{
    ConfidenceChangedEvent, FactEvent, RewardIssuedEvent, SlashAppliedEvent, StakeRecordedEvent,
};
pub use receipt::{CompetitorAdjustment, StakeReceipt};
pub use relationship::{
    CompetitionRule, ContradictionPath, FactSummary, Relationship, RelationshipReport,
    SupportPath,
};
