/// Fact Matrix version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum stake accepted by `stake_on_fact`, in the token's smallest unit.
pub const DEFAULT_MINIMUM_STAKE: u64 = 100;

/// Ledger account that custodies all staked tokens.
pub const DEFAULT_POOL_ACCOUNT: &str = "factmatrix://pool";

/// Identity allowed to mint initial reputation.
pub const DEFAULT_ADMINISTRATOR: &str = "factmatrix://admin";

/// Confidence strictly above this triggers a reward for the staked fact.
pub const DEFAULT_REWARD_THRESHOLD: u8 = 80;

/// Competitor confidence strictly below this triggers a slash.
pub const DEFAULT_SLASH_THRESHOLD: u8 = 20;

/// Smallest confidence drop applied to a competitor per stake.
pub const DEFAULT_MINIMUM_DROP: u8 = 5;

/// Reward = total staked / divisor (5%).
pub const DEFAULT_REWARD_DIVISOR: u64 = 20;

/// Slash = total staked / divisor (10%).
pub const DEFAULT_SLASH_DIVISOR: u64 = 10;

/// Maximum recursion depth when searching supporting paths.
pub const MAX_SUPPORT_PATH_DEPTH: usize = 3;

/// Trust assigned by the legacy model when nothing relates to a fact.
pub const NEUTRAL_TRUST: f64 = 50.0;

/// Environment variable holding per-target log directives.
pub const LOG_ENV_VAR: &str = "FACTMATRIX_LOG";
