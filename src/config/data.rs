//! Resolved settings for the data check (sync and reconciliation).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::defaults::Defaults;

/// Data-check settings after defaulting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataConfiguration {
    /// Concurrency used while fetching accounts during active reconciliation.
    pub active_reconciliation_concurrency: u64,

    /// Concurrency used while fetching accounts during inactive reconciliation.
    pub inactive_reconciliation_concurrency: u64,

    /// Blocks to wait between inactive reconciliations of the same account.
    pub inactive_reconciliation_frequency: u64,

    pub log_blocks: bool,
    pub log_transactions: bool,
    pub log_balance_changes: bool,
    pub log_reconciliations: bool,

    /// Keep processing blocks after a reconciliation failure.
    pub ignore_reconciliation_error: bool,

    /// File listing accounts exempt from balance tracking and reconciliation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exempt_accounts: Option<PathBuf>,

    /// File of balances to seed before syncing starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootstrap_balances: Option<PathBuf>,

    /// Look up balances at the block of the change rather than the current block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_balance_enabled: Option<bool>,

    /// File listing accounts to check on every block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interesting_accounts: Option<PathBuf>,

    pub reconciliation_disabled: bool,

    #[serde(rename = "inactive_discrepency_search_disabled")]
    pub inactive_discrepancy_search_disabled: bool,

    pub balance_tracking_disabled: bool,
    pub coin_tracking_disabled: bool,

    /// Block height to start syncing from; the last saved block otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_conditions: Option<DataEndConditions>,

    pub status_port: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_output_file: Option<PathBuf>,

    pub pruning_disabled: bool,
}

impl DataConfiguration {
    /// Data settings synthesized when the document has no `data` section.
    pub fn default_with(defaults: &Defaults) -> Self {
        Self {
            active_reconciliation_concurrency: defaults.active_reconciliation_concurrency,
            inactive_reconciliation_concurrency: defaults.inactive_reconciliation_concurrency,
            inactive_reconciliation_frequency: defaults.inactive_reconciliation_frequency,
            log_blocks: false,
            log_transactions: false,
            log_balance_changes: false,
            log_reconciliations: false,
            ignore_reconciliation_error: false,
            exempt_accounts: None,
            bootstrap_balances: None,
            historical_balance_enabled: None,
            interesting_accounts: None,
            reconciliation_disabled: false,
            inactive_discrepancy_search_disabled: false,
            balance_tracking_disabled: false,
            coin_tracking_disabled: false,
            start_index: None,
            end_conditions: None,
            status_port: defaults.status_port,
            results_output_file: None,
            pruning_disabled: false,
        }
    }
}

impl Default for DataConfiguration {
    fn default() -> Self {
        Self::default_with(&Defaults::default())
    }
}

/// Conditions under which the data check stops successfully.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataEndConditions {
    /// Stop once this block height is synced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,

    /// Stop once tip is reached. Pair with `tip_delay`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<bool>,

    /// Stop after running for this many seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,

    /// Stop once tip is reached and this fraction of accounts has been
    /// reconciled at or above the height where tip was first seen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reconciliation_coverage: Option<f64>,
}

impl DataEndConditions {
    /// End conditions that are set, in a fixed order.
    pub fn configured(&self) -> Vec<DataEndCondition> {
        let mut kinds = Vec::new();
        if self.index.is_some() {
            kinds.push(DataEndCondition::Index);
        }
        if self.duration.is_some() {
            kinds.push(DataEndCondition::Duration);
        }
        if self.tip.is_some() {
            kinds.push(DataEndCondition::Tip);
        }
        if self.reconciliation_coverage.is_some() {
            kinds.push(DataEndCondition::ReconciliationCoverage);
        }
        kinds
    }
}

/// Kind of successful end reached by the data check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataEndCondition {
    Index,
    Duration,
    Tip,
    ReconciliationCoverage,
}

impl DataEndCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataEndCondition::Index => "Index End Condition",
            DataEndCondition::Duration => "Duration End Condition",
            DataEndCondition::Tip => "Tip End Condition",
            DataEndCondition::ReconciliationCoverage => "Reconciliation Coverage End Condition",
        }
    }
}

impl fmt::Display for DataEndCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
