//! Relationship classification and analysis reports.

use serde::{Deserialize, Serialize};

use crate::fact::{Confidence, FactHash, FactQuad};

/// Which competition rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionRule {
    /// Same `(category1, value1)` and `category2`, different `value2`.
    SharedHead,
    /// Same `(category2, value2)` and `category1`, different `value1`.
    SharedTail,
    /// Same category pair (direct or mirrored), different aligned values.
    CategoryPair,
}

/// How one fact relates to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rule", rename_all = "snake_case")]
pub enum Relationship {
    /// Same four fields.
    Identical,
    Competing(CompetitionRule),
    /// The first fact's tail is the second fact's head.
    ChainsForward,
    /// The second fact's tail is the first fact's head.
    ChainsBackward,
    Unrelated,
}

impl Relationship {
    pub fn is_competing(self) -> bool {
        matches!(self, Self::Competing(_))
    }

    /// Identical facts and chains support each other; only identity feeds
    /// the cascade.
    pub fn is_supporting(self) -> bool {
        matches!(
            self,
            Self::Identical | Self::ChainsForward | Self::ChainsBackward
        )
    }
}

/// A fact as it appears in an analysis report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSummary {
    pub hash: FactHash,
    pub quad: FactQuad,
    pub confidence: Confidence,
}

/// A chain of facts linking a fact's head to its tail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportPath {
    pub facts: Vec<FactSummary>,
    pub trust: f64,
}

/// A chain of facts whose last link contradicts the analyzed fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContradictionPath {
    pub facts: Vec<FactSummary>,
    /// Path trust halved for every link after the first.
    pub impact: f64,
}

/// Everything the store knows that bears on one fact.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RelationshipReport {
    pub quad: Option<FactQuad>,
    /// Facts competing under the staking rule.
    pub competing: Vec<FactSummary>,
    /// Facts sharing the category pair and exactly one value.
    pub direct_contradictions: Vec<FactSummary>,
    pub supporting_paths: Vec<SupportPath>,
    pub indirect_contradictions: Vec<ContradictionPath>,
    /// Legacy trust estimate on a 0–100 scale.
    pub estimated_trust: f64,
}
