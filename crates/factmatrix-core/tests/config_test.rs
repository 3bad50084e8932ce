use factmatrix_core::config::*;
use factmatrix_core::errors::{ConfigError, FactMatrixError};
use factmatrix_core::AccountId;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = FactMatrixConfig::from_toml("").unwrap();

    // Staking defaults
    assert_eq!(config.staking.minimum_stake, 100);
    assert_eq!(config.staking.pool_account, AccountId::from("factmatrix://pool"));
    assert_eq!(config.staking.administrator, AccountId::from("factmatrix://admin"));

    // Policy defaults
    assert_eq!(config.policy.reward_threshold, 80);
    assert_eq!(config.policy.slash_threshold, 20);
    assert_eq!(config.policy.minimum_drop, 5);
    assert_eq!(config.policy.reward_divisor, 20);
    assert_eq!(config.policy.slash_divisor, 10);
    assert_eq!(config.policy.slash_accounting, SlashAccounting::Burn);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[staking]
minimum_stake = 250
administrator = "ops"

[policy]
slash_accounting = "retain"
"#;
    let config = FactMatrixConfig::from_toml(toml).unwrap();
    assert_eq!(config.staking.minimum_stake, 250);
    assert_eq!(config.staking.administrator, AccountId::from("ops"));
    assert_eq!(config.policy.slash_accounting, SlashAccounting::Retain);
    // Non-overridden fields keep defaults
    assert_eq!(config.staking.pool_account, AccountId::from("factmatrix://pool"));
    assert_eq!(config.policy.reward_divisor, 20);
}

#[test]
fn config_rejects_zero_minimum_stake() {
    let err = FactMatrixConfig::from_toml("[staking]\nminimum_stake = 0\n").unwrap_err();
    match err {
        FactMatrixError::ConfigError(ConfigError::InvalidValue { field, .. }) => {
            assert_eq!(field, "staking.minimum_stake");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_rejects_zero_divisor_and_out_of_range_threshold() {
    assert!(FactMatrixConfig::from_toml("[policy]\nslash_divisor = 0\n").is_err());
    assert!(FactMatrixConfig::from_toml("[policy]\nreward_threshold = 101\n").is_err());
}

#[test]
fn config_rejects_pool_equal_to_administrator() {
    let toml = r#"
[staking]
pool_account = "same"
administrator = "same"
"#;
    assert!(FactMatrixConfig::from_toml(toml).is_err());
}

#[test]
fn config_reports_parse_errors() {
    let err = FactMatrixConfig::from_toml("[staking\n").unwrap_err();
    assert!(matches!(
        err,
        FactMatrixError::ConfigError(ConfigError::ParseError { .. })
    ));
}

#[test]
fn config_from_file_and_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("factmatrix.toml");
    std::fs::write(&path, "[policy]\nminimum_drop = 7\n").unwrap();

    let config = FactMatrixConfig::from_file(&path).unwrap();
    assert_eq!(config.policy.minimum_drop, 7);

    let missing = dir.path().join("absent.toml");
    let err = FactMatrixConfig::from_file(&missing).unwrap_err();
    assert!(matches!(
        err,
        FactMatrixError::ConfigError(ConfigError::FileNotFound { .. })
    ));
}

#[test]
fn config_serde_roundtrip() {
    let config = FactMatrixConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = FactMatrixConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}
