use factmatrix_core::errors::*;
use factmatrix_core::{AccountId, FactHash};

#[test]
fn insufficient_stake_carries_amounts() {
    let err = FactMatrixError::InsufficientStake {
        amount: 99,
        minimum: 100,
    };
    let msg = err.to_string();
    assert!(msg.contains("99"));
    assert!(msg.contains("100"));
    assert_eq!(err.error_code(), error_code::INSUFFICIENT_STAKE);
}

#[test]
fn insufficient_balance_carries_account() {
    let err = FactMatrixError::InsufficientBalance {
        account: AccountId::from("alice"),
        needed: 500,
        available: 20,
    };
    let msg = err.to_string();
    assert!(msg.contains("alice"));
    assert!(msg.contains("500"));
    assert!(msg.contains("20"));
}

#[test]
fn unauthorized_carries_caller() {
    let err = FactMatrixError::Unauthorized {
        caller: AccountId::from("mallory"),
    };
    assert!(err.to_string().contains("mallory"));
    assert_eq!(err.coded_string(), format!("[UNAUTHORIZED] {err}"));
}

#[test]
fn fact_not_found_prints_hex() {
    let err = FactMatrixError::FactNotFound {
        hash: FactHash::ZERO,
    };
    assert!(err.to_string().contains(&"0".repeat(64)));
}

// --- From impls ---

#[test]
fn ledger_error_converts_to_transfer_failed() {
    let ledger_err = LedgerError::InsufficientFunds {
        account: AccountId::from("bob"),
        needed: 10,
        available: 0,
    };
    let err: FactMatrixError = ledger_err.clone().into();
    match err {
        FactMatrixError::TransferFailed(inner) => assert_eq!(inner, ledger_err),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_error_converts_and_keeps_code() {
    let cfg_err = ConfigError::InvalidValue {
        field: "policy.slash_divisor".into(),
        message: "must be at least 1".into(),
    };
    let err: FactMatrixError = cfg_err.into();
    assert!(matches!(err, FactMatrixError::ConfigError(_)));
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn serde_error_converts() {
    let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err: FactMatrixError = serde_err.into();
    assert_eq!(err.error_code(), error_code::SERIALIZATION_ERROR);
}
