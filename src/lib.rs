//! Ledgercheck: configuration resolution and validation for ledger checks
//!
//! Loads the settings document that drives a data check (sync and
//! reconciliation monitoring) and a construction check (transaction
//! building workflows), fills in defaults, and rejects inconsistent
//! settings before any check starts.

pub mod asserter;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod workflow;
