use serde::{Deserialize, Serialize};

use super::account::TokenAmount;
use crate::fact::{Confidence, FactHash};

/// Read-only view of a fact.
///
/// Unknown hashes yield `FactDetails::default()`: zero hash, empty strings,
/// zero confidence, nothing staked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FactDetails {
    pub hash: FactHash,
    pub category1: String,
    pub value1: String,
    pub category2: String,
    pub value2: String,
    pub confidence: Confidence,
    pub total_staked: TokenAmount,
}

impl FactDetails {
    /// Whether these details describe a stored fact.
    pub fn exists(&self) -> bool {
        self.hash != FactHash::ZERO
    }
}
