//! Replay of recorded stake sequences.
//!
//! A scenario is a JSON document listing initial mints, stakes in
//! submission order, and optional expectations about the final state.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use factmatrix_core::errors::FactMatrixResult;
use factmatrix_core::models::StakeReceipt;
use factmatrix_core::traits::ITokenLedger;
use factmatrix_core::{create_fact_hash, AccountId, FactQuad, TokenAmount};

use crate::cascade::FactMatrix;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintStep {
    pub recipient: AccountId,
    pub amount: TokenAmount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeStep {
    pub staker: AccountId,
    /// `[category1, value1, category2, value2]`
    pub fact: [String; 4],
    pub amount: TokenAmount,
}

/// Expected state of one fact after replay. Absent fields are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedFact {
    pub fact: [String; 4],
    #[serde(default)]
    pub confidence: Option<u8>,
    #[serde(default)]
    pub total_staked: Option<TokenAmount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Identity the mints run as. Defaults to the matrix's administrator.
    #[serde(default)]
    pub administrator: Option<AccountId>,
    #[serde(default)]
    pub mints: Vec<MintStep>,
    pub stakes: Vec<StakeStep>,
    #[serde(default)]
    pub expected: Vec<ExpectedFact>,
    /// Expected balance of the pool account after replay.
    #[serde(default)]
    pub expected_pool_balance: Option<TokenAmount>,
}

/// What happened to one step of a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepOutcome {
    Minted {
        recipient: AccountId,
        amount: TokenAmount,
    },
    MintFailed {
        recipient: AccountId,
        error: String,
    },
    Staked {
        receipt: StakeReceipt,
    },
    StakeFailed {
        staker: AccountId,
        fact: FactQuad,
        error: String,
    },
}

impl StepOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::MintFailed { .. } | Self::StakeFailed { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplayReport {
    pub scenario: String,
    pub steps: Vec<StepOutcome>,
}

impl ReplayReport {
    pub fn failures(&self) -> usize {
        self.steps.iter().filter(|s| s.is_failure()).count()
    }
}

/// A difference between expected and replayed state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// The fact, or `None` for account-level checks.
    pub fact: Option<FactQuad>,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.fact {
            Some(quad) => write!(
                f,
                "{quad}: {} expected {}, got {}",
                self.field, self.expected, self.actual
            ),
            None => write!(
                f,
                "{}: expected {}, got {}",
                self.field, self.expected, self.actual
            ),
        }
    }
}

fn quad_of(parts: &[String; 4]) -> FactQuad {
    let [c1, v1, c2, v2] = parts.clone();
    FactQuad::new(c1, v1, c2, v2)
}

impl Scenario {
    pub fn from_json(source: &str) -> FactMatrixResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Run mints then stakes against `matrix`. Failed steps are recorded and
    /// replay continues.
    #[instrument(skip_all, fields(scenario = %self.name))]
    pub fn replay<L: ITokenLedger>(&self, matrix: &mut FactMatrix<L>) -> ReplayReport {
        let admin = self
            .administrator
            .clone()
            .unwrap_or_else(|| matrix.config().staking.administrator.clone());
        let mut steps = Vec::with_capacity(self.mints.len() + self.stakes.len());

        for mint in &self.mints {
            let outcome = match matrix.mint_initial_reputation(&admin, &mint.recipient, mint.amount) {
                Ok(()) => StepOutcome::Minted {
                    recipient: mint.recipient.clone(),
                    amount: mint.amount,
                },
                Err(err) => {
                    warn!(recipient = %mint.recipient, error = %err, "mint failed");
                    StepOutcome::MintFailed {
                        recipient: mint.recipient.clone(),
                        error: err.to_string(),
                    }
                }
            };
            steps.push(outcome);
        }

        for stake in &self.stakes {
            let quad = quad_of(&stake.fact);
            let outcome = match matrix.stake_on_fact(&stake.staker, quad.clone(), stake.amount) {
                Ok(receipt) => StepOutcome::Staked { receipt },
                Err(err) => {
                    warn!(staker = %stake.staker, fact = %quad, error = %err, "stake failed");
                    StepOutcome::StakeFailed {
                        staker: stake.staker.clone(),
                        fact: quad,
                        error: err.to_string(),
                    }
                }
            };
            steps.push(outcome);
        }

        let report = ReplayReport {
            scenario: self.name.clone(),
            steps,
        };
        info!(steps = report.steps.len(), failures = report.failures(), "replay finished");
        report
    }

    /// Compare `matrix` against the expectations. Empty means everything held.
    pub fn verify<L: ITokenLedger>(&self, matrix: &FactMatrix<L>) -> Vec<Mismatch> {
        let mut mismatches = Vec::new();
        for expected in &self.expected {
            let quad = quad_of(&expected.fact);
            let details = matrix.fact_details(&create_fact_hash(&quad));
            if !details.exists() {
                mismatches.push(Mismatch {
                    fact: Some(quad),
                    field: "exists".to_string(),
                    expected: "true".to_string(),
                    actual: "false".to_string(),
                });
                continue;
            }
            if let Some(confidence) = expected.confidence {
                if details.confidence.value() != confidence {
                    mismatches.push(Mismatch {
                        fact: Some(quad.clone()),
                        field: "confidence".to_string(),
                        expected: confidence.to_string(),
                        actual: details.confidence.value().to_string(),
                    });
                }
            }
            if let Some(total) = expected.total_staked {
                if details.total_staked != total {
                    mismatches.push(Mismatch {
                        fact: Some(quad),
                        field: "total_staked".to_string(),
                        expected: total.to_string(),
                        actual: details.total_staked.to_string(),
                    });
                }
            }
        }
        if let Some(expected) = self.expected_pool_balance {
            let actual = matrix.balance_of(&matrix.config().staking.pool_account);
            if actual != expected {
                mismatches.push(Mismatch {
                    fact: None,
                    field: "pool_balance".to_string(),
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        }
        mismatches
    }
}
