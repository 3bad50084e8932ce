//! # factmatrix-core
//!
//! Foundation crate for the Fact Matrix staking engine.
//! Defines the fact data model, hashing, errors, config, constants, and the
//! traits at the seams (token ledger, event handlers).
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod fact;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FactMatrixConfig;
pub use errors::{FactMatrixError, FactMatrixResult};
pub use fact::{create_fact_hash, Confidence, Fact, FactHash, FactQuad};
pub use models::{AccountId, TokenAmount};
