//! # factmatrix-engine
//!
//! The staking cascade. [`FactMatrix`] records stakes, recalculates the
//! staked fact's confidence from its share of the competing pool, pushes
//! confidence drops onto competitors, and settles rewards and slashes
//! against an injected [`ITokenLedger`](factmatrix_core::traits::ITokenLedger).
//!
//! [`analysis::RelationshipAnalyzer`] exposes the older trust-path model as a
//! read-only view, and [`scenario::Scenario`] replays recorded stake
//! sequences. [`SharedFactMatrix`] serializes access from async callers.

pub mod analysis;
pub mod cascade;
pub mod classifier;
pub mod confidence;
pub mod policy;
pub mod scenario;
pub mod service;

pub use analysis::RelationshipAnalyzer;
pub use cascade::FactMatrix;
pub use confidence::ConfidenceEngine;
pub use policy::RewardSlashPolicy;
pub use scenario::{ReplayReport, Scenario};
pub use service::SharedFactMatrix;
