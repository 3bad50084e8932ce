//! Stable error codes for callers that match on strings (CLI output, logs).

/// Trait giving every error enum a structured error code.
pub trait FactMatrixErrorCode {
    /// Returns the error code string (e.g., "INSUFFICIENT_STAKE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INSUFFICIENT_STAKE: &str = "INSUFFICIENT_STAKE";
pub const INSUFFICIENT_BALANCE: &str = "INSUFFICIENT_BALANCE";
pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const TRANSFER_FAILED: &str = "TRANSFER_FAILED";
pub const FACT_NOT_FOUND: &str = "FACT_NOT_FOUND";
pub const ZERO_AMOUNT: &str = "ZERO_AMOUNT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const LEDGER_ERROR: &str = "LEDGER_ERROR";
