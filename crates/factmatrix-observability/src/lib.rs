//! # factmatrix-observability
//!
//! Tracing initialization, span definitions for the staking cascade, a
//! handler that logs every notification, and an in-memory event journal.

pub mod handler;
pub mod journal;
pub mod tracing_setup;

pub use handler::TracingEventHandler;
pub use journal::{EventJournal, JournalSummary};
pub use tracing_setup::init_tracing;
