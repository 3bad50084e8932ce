//! Seams between the engine and its collaborators.

mod event_handler;
mod token_ledger;

pub use event_handler::IFactEventHandler;
pub use token_ledger::ITokenLedger;
