//! # factmatrix-store
//!
//! Owns the canonical fact set. Facts live in a hash-keyed arena; a separate
//! append-only [`FactIndex`] keeps creation order for competition scans.
//! [`CategoryAggregates`] tracks stake per category/value for reporting.

pub mod aggregate;
pub mod index;
pub mod store;

pub use aggregate::CategoryAggregates;
pub use index::FactIndex;
pub use store::{ConfidenceChange, FactStore};
