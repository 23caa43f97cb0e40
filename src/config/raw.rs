//! Settings document exactly as decoded, before defaulting.
//!
//! Every setting that has a catalog default is an `Option`: `None` means the
//! document left it out. Explicit values, including zeros and empty strings,
//! survive resolution untouched.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::construction::PrefundedAccount;
use super::data::DataEndConditions;
use crate::types::NetworkIdentifier;
use crate::workflow::Workflow;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfiguration {
    #[serde(default)]
    pub network: Option<NetworkIdentifier>,

    #[serde(default)]
    pub online_url: Option<String>,

    #[serde(default)]
    pub data_directory: Option<PathBuf>,

    #[serde(default)]
    pub http_timeout: Option<u64>,

    #[serde(default)]
    pub max_retries: Option<u64>,

    #[serde(default)]
    pub retry_elapsed_time: Option<u64>,

    #[serde(default)]
    pub max_online_connections: Option<usize>,

    #[serde(default)]
    pub max_sync_concurrency: Option<u64>,

    #[serde(default)]
    pub tip_delay: Option<u64>,

    #[serde(default)]
    pub log_configuration: bool,

    #[serde(default)]
    pub construction: Option<RawConstructionConfiguration>,

    #[serde(default)]
    pub data: Option<RawDataConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDataConfiguration {
    #[serde(default)]
    pub active_reconciliation_concurrency: Option<u64>,

    #[serde(default)]
    pub inactive_reconciliation_concurrency: Option<u64>,

    #[serde(default)]
    pub inactive_reconciliation_frequency: Option<u64>,

    #[serde(default)]
    pub log_blocks: bool,

    #[serde(default)]
    pub log_transactions: bool,

    #[serde(default)]
    pub log_balance_changes: bool,

    #[serde(default)]
    pub log_reconciliations: bool,

    #[serde(default)]
    pub ignore_reconciliation_error: bool,

    #[serde(default)]
    pub exempt_accounts: Option<PathBuf>,

    #[serde(default)]
    pub bootstrap_balances: Option<PathBuf>,

    #[serde(default)]
    pub historical_balance_enabled: Option<bool>,

    #[serde(default)]
    pub interesting_accounts: Option<PathBuf>,

    #[serde(default)]
    pub reconciliation_disabled: bool,

    #[serde(default, rename = "inactive_discrepency_search_disabled")]
    pub inactive_discrepancy_search_disabled: bool,

    #[serde(default)]
    pub balance_tracking_disabled: bool,

    #[serde(default)]
    pub coin_tracking_disabled: bool,

    #[serde(default)]
    pub start_index: Option<i64>,

    #[serde(default)]
    pub end_conditions: Option<DataEndConditions>,

    #[serde(default)]
    pub status_port: Option<u16>,

    #[serde(default)]
    pub results_output_file: Option<PathBuf>,

    #[serde(default)]
    pub pruning_disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConstructionConfiguration {
    #[serde(default)]
    pub offline_url: Option<String>,

    #[serde(default)]
    pub max_offline_connections: Option<usize>,

    #[serde(default)]
    pub stale_depth: Option<u64>,

    #[serde(default)]
    pub broadcast_limit: Option<u64>,

    #[serde(default)]
    pub ignore_broadcast_failures: bool,

    #[serde(default)]
    pub clear_broadcasts: bool,

    #[serde(default)]
    pub broadcast_behind_tip: bool,

    #[serde(default)]
    pub block_broadcast_limit: Option<u64>,

    #[serde(default)]
    pub rebroadcast_all: bool,

    #[serde(default)]
    pub prefunded_accounts: Vec<PrefundedAccount>,

    #[serde(default)]
    pub workflows: Vec<Workflow>,

    #[serde(default)]
    pub constructor_dsl_file: Option<PathBuf>,

    #[serde(default)]
    pub end_conditions: BTreeMap<String, i64>,

    #[serde(default)]
    pub status_port: Option<u16>,

    #[serde(default)]
    pub results_output_file: Option<PathBuf>,

    #[serde(default)]
    pub quiet: bool,
}
