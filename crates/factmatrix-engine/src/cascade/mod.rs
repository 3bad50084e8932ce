//! The staking cascade.
//!
//! One call to [`FactMatrix::stake_on_fact`] debits the staker, records the
//! stake, recalculates the staked fact, drops every competitor in index
//! order, slashes competitors that fall too low, and rewards the staked fact
//! if it ends high enough. Ledger effects of slashes and rewards are journaled
//! and settled after the in-memory pass; events are published only once the
//! whole call has committed.

mod settlement;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use factmatrix_core::config::SlashAccounting;
use factmatrix_core::errors::{FactMatrixError, FactMatrixResult};
use factmatrix_core::models::{
    CompetitorAdjustment, ConfidenceChangedEvent, FactDetails, FactEvent, RewardIssuedEvent,
    SlashAppliedEvent, StakeReceipt, StakeRecordedEvent,
};
use factmatrix_core::traits::{IFactEventHandler, ITokenLedger};
use factmatrix_core::{
    create_fact_hash, AccountId, Confidence, Fact, FactHash, FactMatrixConfig, FactQuad,
    TokenAmount,
};
use factmatrix_store::{CategoryAggregates, ConfidenceChange, FactStore};

use crate::analysis::RelationshipAnalyzer;
use crate::classifier;
use crate::confidence::ConfidenceEngine;
use crate::policy::RewardSlashPolicy;
use settlement::LedgerEffect;

/// Everything a stake can mutate in memory. Cloned as the rollback snapshot.
#[derive(Debug, Clone, Default)]
struct MatrixState {
    store: FactStore,
    aggregates: CategoryAggregates,
}

/// Events and ledger effects staged by one stake, discarded on failure.
#[derive(Debug)]
struct Staged {
    now: DateTime<Utc>,
    events: Vec<FactEvent>,
    effects: Vec<LedgerEffect>,
}

impl Staged {
    fn new() -> Self {
        Self {
            now: Utc::now(),
            events: Vec::new(),
            effects: Vec::new(),
        }
    }

    fn confidence_changed(&mut self, change: ConfidenceChange) {
        self.events
            .push(FactEvent::ConfidenceChanged(ConfidenceChangedEvent {
                fact: change.fact,
                old: change.old,
                new: change.new,
                timestamp: self.now,
            }));
    }
}

/// The fact matrix: fact store, category aggregates, and the cascade that
/// keeps them consistent with an external token ledger.
///
/// # Examples
///
/// ```
/// use factmatrix_core::{AccountId, FactQuad};
/// use factmatrix_engine::FactMatrix;
/// use factmatrix_ledger::InMemoryTokenLedger;
///
/// let mut matrix = FactMatrix::new(InMemoryTokenLedger::new());
/// let admin = matrix.config().staking.administrator.clone();
/// let alice = AccountId::from("alice");
/// matrix.mint_initial_reputation(&admin, &alice, 1_000).unwrap();
///
/// let quad = FactQuad::from(["Name", "Alex", "House", "Blue"]);
/// let receipt = matrix.stake_on_fact(&alice, quad.clone(), 100).unwrap();
/// assert!(receipt.created);
/// assert_eq!(matrix.fact_confidence(&quad).value(), 95);
/// ```
pub struct FactMatrix<L: ITokenLedger> {
    config: FactMatrixConfig,
    policy: RewardSlashPolicy,
    ledger: L,
    state: MatrixState,
    handlers: Vec<Arc<dyn IFactEventHandler>>,
    events: Vec<FactEvent>,
}

impl<L: ITokenLedger> FactMatrix<L> {
    /// A matrix with the default configuration.
    pub fn new(ledger: L) -> Self {
        let config = FactMatrixConfig::default();
        Self {
            policy: RewardSlashPolicy::new(config.policy.clone()),
            config,
            ledger,
            state: MatrixState::default(),
            handlers: Vec::new(),
            events: Vec::new(),
        }
    }

    /// A matrix with a validated configuration.
    pub fn with_config(config: FactMatrixConfig, ledger: L) -> FactMatrixResult<Self> {
        config.validate()?;
        Ok(Self {
            policy: RewardSlashPolicy::new(config.policy.clone()),
            config,
            ledger,
            state: MatrixState::default(),
            handlers: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Register a handler. Handlers see committed events in emission order.
    pub fn add_handler(&mut self, handler: Arc<dyn IFactEventHandler>) {
        self.handlers.push(handler);
    }

    /// Stake `amount` of `staker`'s tokens on `quad`, creating the fact if
    /// needed, and run the cascade.
    ///
    /// Fails without mutating anything if `amount` is below the minimum stake
    /// or `staker` cannot cover it. If ledger settlement fails after the
    /// in-memory cascade, every effect of the call is undone, the staker is
    /// refunded, and no events are published.
    pub fn stake_on_fact(
        &mut self,
        staker: &AccountId,
        quad: FactQuad,
        amount: TokenAmount,
    ) -> FactMatrixResult<StakeReceipt> {
        let minimum = TokenAmount::from(self.config.staking.minimum_stake);
        if amount < minimum {
            return Err(FactMatrixError::InsufficientStake { amount, minimum });
        }
        let available = self.ledger.balance_of(staker);
        if available < amount {
            return Err(FactMatrixError::InsufficientBalance {
                account: staker.clone(),
                needed: amount,
                available,
            });
        }

        let hash = create_fact_hash(&quad);
        let _span = factmatrix_observability::stake_span!(hash.short(), staker, amount).entered();

        let pool = self.config.staking.pool_account.clone();
        self.ledger.transfer(staker, &pool, amount)?;

        let snapshot = self.state.clone();
        let mut staged = Staged::new();
        let outcome = self
            .run_cascade(staker, hash, quad, amount, &mut staged)
            .and_then(|receipt| {
                settlement::settle(&mut self.ledger, &pool, &staged.effects)?;
                Ok(receipt)
            });

        match outcome {
            Ok(receipt) => {
                info!(
                    fact = %hash.short(),
                    confidence = receipt.confidence.value(),
                    total = receipt.total_staked,
                    competitors = receipt.adjustments.len(),
                    "stake committed"
                );
                self.publish(staged.events);
                Ok(receipt)
            }
            Err(err) => {
                warn!(fact = %hash.short(), error = %err, "stake rolled back");
                self.state = snapshot;
                self.refund(staker, &pool, amount);
                Err(err)
            }
        }
    }

    /// Credit `amount` of new tokens to `recipient`. Administrator only.
    #[instrument(skip(self, caller, recipient), fields(caller = %caller, recipient = %recipient))]
    pub fn mint_initial_reputation(
        &mut self,
        caller: &AccountId,
        recipient: &AccountId,
        amount: TokenAmount,
    ) -> FactMatrixResult<()> {
        if *caller != self.config.staking.administrator {
            return Err(FactMatrixError::Unauthorized {
                caller: caller.clone(),
            });
        }
        if amount == 0 {
            return Err(FactMatrixError::ZeroAmount);
        }
        self.ledger.mint(recipient, amount)?;
        debug!(amount, "initial reputation minted");
        Ok(())
    }

    fn run_cascade(
        &mut self,
        staker: &AccountId,
        hash: FactHash,
        quad: FactQuad,
        amount: TokenAmount,
        staged: &mut Staged,
    ) -> FactMatrixResult<StakeReceipt> {
        let (_, created) = self.state.store.get_or_create(hash, &quad);
        self.state.store.record_stake(&hash, staker, amount)?;
        self.state.aggregates.credit(&quad, amount);

        let confidence = ConfidenceEngine::recalculate(&self.state.store, &hash)?;
        if let Some(change) = self.state.store.apply_confidence(&hash, confidence)? {
            staged.confidence_changed(change);
        }
        staged.events.push(FactEvent::StakeRecorded(StakeRecordedEvent {
            fact: hash,
            staker: staker.clone(),
            pool: self.config.staking.pool_account.clone(),
            amount,
            confidence,
            timestamp: staged.now,
        }));

        let adjustments = self.adjust_competitors(hash, &quad, staged)?;
        let reward = self.reward_if_confident(hash, &quad, confidence, staged)?;

        let fact = self.fact(&hash)?;
        Ok(StakeReceipt {
            fact: hash,
            staker: staker.clone(),
            amount,
            created,
            confidence: fact.confidence,
            total_staked: fact.total_staked,
            adjustments,
            reward,
        })
    }

    /// Drop every competitor of `hash` by the stake-ratio rule, slashing the
    /// ones that end below the slash threshold.
    fn adjust_competitors(
        &mut self,
        hash: FactHash,
        quad: &FactQuad,
        staged: &mut Staged,
    ) -> FactMatrixResult<Vec<CompetitorAdjustment>> {
        let target_total = self.fact(&hash)?.total_staked;
        let competitors: Vec<FactHash> = self
            .state
            .store
            .iter()
            .filter(|other| other.hash != hash && classifier::competes(quad, &other.quad))
            .map(|other| other.hash)
            .collect();

        let _span =
            factmatrix_observability::cascade_span!(hash.short(), competitors.len()).entered();
        let mut adjustments = Vec::with_capacity(competitors.len());
        for other in competitors {
            let (old, other_total) = {
                let fact = self.fact(&other)?;
                (fact.confidence, fact.total_staked)
            };
            let drop = self.policy.competition_drop(target_total, other_total);
            let new = old.saturating_drop(drop);
            if let Some(change) = self.state.store.apply_confidence(&other, new)? {
                staged.confidence_changed(change);
            }
            let slashed = if self.policy.should_slash(new) {
                self.slash(&other, staged)?
            } else {
                0
            };
            debug!(competitor = %other.short(), old = old.value(), new = new.value(), drop, slashed, "competitor adjusted");
            adjustments.push(CompetitorAdjustment {
                fact: other,
                old_confidence: old,
                new_confidence: new,
                drop,
                slashed,
            });
        }
        Ok(adjustments)
    }

    fn slash(&mut self, hash: &FactHash, staged: &mut Staged) -> FactMatrixResult<TokenAmount> {
        let (quad, total) = {
            let fact = self.fact(hash)?;
            (fact.quad.clone(), fact.total_staked)
        };
        let amount = self.policy.slash_amount(total);
        if amount == 0 {
            return Ok(0);
        }
        let applied = self.state.store.apply_slash(hash, amount)?;
        self.state.aggregates.debit(&quad, applied);
        if self.policy.accounting() == SlashAccounting::Burn {
            staged.effects.push(LedgerEffect::Burn(applied));
        }
        staged.events.push(FactEvent::SlashApplied(SlashAppliedEvent {
            fact: *hash,
            amount: applied,
            timestamp: staged.now,
        }));
        Ok(applied)
    }

    fn reward_if_confident(
        &mut self,
        hash: FactHash,
        quad: &FactQuad,
        confidence: Confidence,
        staged: &mut Staged,
    ) -> FactMatrixResult<Option<TokenAmount>> {
        if !self.policy.should_reward(confidence) {
            return Ok(None);
        }
        let amount = self.policy.reward_amount(self.fact(&hash)?.total_staked);
        if amount == 0 {
            return Ok(None);
        }
        staged.effects.push(LedgerEffect::Mint(amount));
        self.state.store.apply_reward(&hash, amount)?;
        self.state.aggregates.credit(quad, amount);
        staged.events.push(FactEvent::RewardIssued(RewardIssuedEvent {
            fact: hash,
            amount,
            timestamp: staged.now,
        }));
        Ok(Some(amount))
    }

    fn refund(&mut self, staker: &AccountId, pool: &AccountId, amount: TokenAmount) {
        if let Err(err) = self.ledger.transfer(pool, staker, amount) {
            tracing::error!(staker = %staker, amount, error = %err, "refund failed");
        }
    }

    fn publish(&mut self, events: Vec<FactEvent>) {
        for event in events {
            for handler in &self.handlers {
                handler.handle(&event);
            }
            self.events.push(event);
        }
    }

    fn fact(&self, hash: &FactHash) -> FactMatrixResult<&Fact> {
        self.state
            .store
            .get(hash)
            .ok_or(FactMatrixError::FactNotFound { hash: *hash })
    }

    /// Drain the events published since the last call.
    pub fn take_events(&mut self) -> Vec<FactEvent> {
        std::mem::take(&mut self.events)
    }

    /// Details of a fact; zero-valued for unknown hashes.
    pub fn fact_details(&self, hash: &FactHash) -> FactDetails {
        self.state
            .store
            .get(hash)
            .map(Fact::details)
            .unwrap_or_default()
    }

    /// Confidence of a fact; zero for unknown facts.
    pub fn fact_confidence(&self, quad: &FactQuad) -> Confidence {
        self.state
            .store
            .get(&create_fact_hash(quad))
            .map(|f| f.confidence)
            .unwrap_or(Confidence::ZERO)
    }

    pub fn category_value_stake(&self, category: &str, value: &str) -> TokenAmount {
        self.state.aggregates.value_stake(category, value)
    }

    pub fn category_total_stake(&self, category: &str) -> TokenAmount {
        self.state.aggregates.category_stake(category)
    }

    /// Cumulative contribution of `staker` to a fact. Not reduced by slashes.
    pub fn stake_of(&self, hash: &FactHash, staker: &AccountId) -> TokenAmount {
        self.state.store.stake_of(hash, staker)
    }

    pub fn balance_of(&self, account: &AccountId) -> TokenAmount {
        self.ledger.balance_of(account)
    }

    /// Facts in creation order.
    pub fn facts(&self) -> impl Iterator<Item = &Fact> + '_ {
        self.state.store.iter()
    }

    pub fn fact_count(&self) -> usize {
        self.state.store.len()
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn config(&self) -> &FactMatrixConfig {
        &self.config
    }

    pub fn store(&self) -> &FactStore {
        &self.state.store
    }

    pub fn aggregates(&self) -> &CategoryAggregates {
        &self.state.aggregates
    }

    /// Trust-path analysis over the current facts.
    pub fn analyzer(&self) -> RelationshipAnalyzer<'_> {
        RelationshipAnalyzer::new(&self.state.store)
    }
}
