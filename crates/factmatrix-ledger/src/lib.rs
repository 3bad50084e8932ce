//! # factmatrix-ledger
//!
//! [`InMemoryTokenLedger`] keeps balances and total supply in a map. It backs
//! tests, scenario replay, and the CLI; production deployments supply their
//! own [`ITokenLedger`](factmatrix_core::traits::ITokenLedger).

mod memory;

pub use memory::InMemoryTokenLedger;
