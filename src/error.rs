//! Error types for configuration loading and validation.
//!
//! Each layer wraps the one below it and prefixes its own context, so the
//! rendered message of a [`ConfigError`] reads as the full chain from the
//! failing rule up to the pipeline stage. The wrapped error is part of the
//! message rather than a `source()`, so chain walkers print each cause once.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single resolution call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to load configuration from {source_name}: {error}")]
    Decode {
        source_name: String,
        error: DecodeError,
    },

    #[error("invalid configuration: {0}")]
    Validation(ValidationError),
}

impl From<ValidationError> for ConfigError {
    fn from(err: ValidationError) -> Self {
        ConfigError::Validation(err)
    }
}

/// Structural decoding failure: unreadable source, bad syntax, wrong type
/// or an unknown field.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read file: {0}")]
    Read(std::io::Error),

    #[error("invalid JSON document: {0}")]
    Json(serde_json::Error),

    #[error("invalid TOML document: {0}")]
    Toml(toml::de::Error),
}

/// First rule the resolved settings document violated.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid network identifier: {0}")]
    Network(AssertionError),

    #[error("invalid data configuration: {0}")]
    Data(DataConfigError),

    #[error("invalid construction configuration: {0}")]
    Construction(ConstructionConfigError),
}

impl From<DataConfigError> for ValidationError {
    fn from(err: DataConfigError) -> Self {
        ValidationError::Data(err)
    }
}

impl From<ConstructionConfigError> for ValidationError {
    fn from(err: ConstructionConfigError) -> Self {
        ValidationError::Construction(err)
    }
}

/// Data-check settings violations.
#[derive(Debug, Error, PartialEq)]
pub enum DataConfigError {
    #[error("start index {0} cannot be negative")]
    NegativeStartIndex(i64),

    #[error("end index {0} cannot be negative")]
    NegativeEndIndex(i64),

    #[error("reconciliation coverage {0} must be in [0.0, 1.0]")]
    CoverageOutOfRange(f64),

    #[error("balance tracking must be enabled for reconciliation coverage end condition")]
    CoverageRequiresBalanceTracking,

    #[error("reconciliation errors cannot be ignored for reconciliation coverage end condition")]
    CoverageRequiresReconciliationErrors,

    #[error("reconciliation cannot be disabled for reconciliation coverage end condition")]
    CoverageRequiresReconciliation,
}

/// Construction-check settings violations.
#[derive(Debug, Error)]
pub enum ConstructionConfigError {
    #[error("cannot populate both workflows and DSL file path")]
    WorkflowSourceConflict,

    #[error("both workflows and DSL file path are empty")]
    WorkflowSourceMissing,

    #[error("compilation of {} failed: {}", .path.display(), .error)]
    DslCompilation { path: PathBuf, error: anyhow::Error },

    #[error("reserved workflow {workflow} must have concurrency {required}, found {concurrency}")]
    ReservedConcurrency {
        workflow: String,
        concurrency: usize,
        required: usize,
    },

    #[error("prefunded account {index}: {error}")]
    PrefundedAccount {
        index: usize,
        error: PrefundedAccountError,
    },
}

/// Checks run against a single prefunded account, in evaluation order.
#[derive(Debug, Error, PartialEq)]
pub enum PrefundedAccountError {
    #[error("private key is not hex encoded: {0}")]
    PrivateKeyNotHex(hex::FromHexError),

    #[error("invalid curve type: {0}")]
    CurveType(AssertionError),

    #[error("invalid account identifier: {0}")]
    AccountIdentifier(AssertionError),

    #[error("invalid currency: {0}")]
    Currency(AssertionError),
}

/// Semantic check failure reported by an [`crate::asserter::Asserter`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssertionError {
    #[error("network identifier blockchain is missing")]
    NetworkBlockchainMissing,

    #[error("network identifier network is missing")]
    NetworkNetworkMissing,

    #[error("sub network identifier network is missing")]
    SubNetworkMissing,

    #[error("curve type {0} is not supported")]
    UnsupportedCurveType(String),

    #[error("account address is missing")]
    AccountAddressMissing,

    #[error("sub account address is missing")]
    SubAccountAddressMissing,

    #[error("currency symbol is empty")]
    CurrencySymbolEmpty,

    #[error("currency decimals {0} cannot be negative")]
    CurrencyDecimalsNegative(i32),

    #[error("{0}")]
    Rejected(String),
}

/// Failure to install the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log format: {0} (must be 'json' or 'text')")]
    InvalidFormat(String),

    #[error("invalid log output: {0} (must be 'stdout', 'stderr' or 'file')")]
    InvalidOutput(String),

    #[error("invalid log directive: {0}")]
    InvalidDirective(String),

    #[error("failed to open log file {}: {}", .path.display(), .error)]
    File {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("a global log subscriber is already installed")]
    AlreadyInitialized,
}
