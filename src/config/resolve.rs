//! Field resolver: fills every omitted setting from the default catalog.
//!
//! Resolution is total. A missing `data` section is synthesized in full; a
//! missing `construction` section stays missing since the construction check
//! is opt-in.

use super::construction::ConstructionConfiguration;
use super::data::DataConfiguration;
use super::defaults::Defaults;
use super::raw::{RawConfiguration, RawConstructionConfiguration, RawDataConfiguration};
use super::Configuration;

impl RawConfiguration {
    pub fn resolve(self, defaults: &Defaults) -> Configuration {
        Configuration {
            network: self.network.unwrap_or_else(|| defaults.network.clone()),
            online_url: self.online_url.unwrap_or_else(|| defaults.url.clone()),
            data_directory: self.data_directory,
            http_timeout: self.http_timeout.unwrap_or(defaults.http_timeout),
            max_retries: self.max_retries.unwrap_or(defaults.max_retries),
            retry_elapsed_time: self.retry_elapsed_time,
            max_online_connections: self
                .max_online_connections
                .unwrap_or(defaults.max_online_connections),
            max_sync_concurrency: self
                .max_sync_concurrency
                .unwrap_or(defaults.max_sync_concurrency),
            tip_delay: self.tip_delay.unwrap_or(defaults.tip_delay),
            log_configuration: self.log_configuration,
            construction: self.construction.map(|c| c.resolve(defaults)),
            data: match self.data {
                Some(data) => data.resolve(defaults),
                None => DataConfiguration::default_with(defaults),
            },
        }
    }
}

impl RawDataConfiguration {
    pub fn resolve(self, defaults: &Defaults) -> DataConfiguration {
        DataConfiguration {
            active_reconciliation_concurrency: self
                .active_reconciliation_concurrency
                .unwrap_or(defaults.active_reconciliation_concurrency),
            inactive_reconciliation_concurrency: self
                .inactive_reconciliation_concurrency
                .unwrap_or(defaults.inactive_reconciliation_concurrency),
            inactive_reconciliation_frequency: self
                .inactive_reconciliation_frequency
                .unwrap_or(defaults.inactive_reconciliation_frequency),
            log_blocks: self.log_blocks,
            log_transactions: self.log_transactions,
            log_balance_changes: self.log_balance_changes,
            log_reconciliations: self.log_reconciliations,
            ignore_reconciliation_error: self.ignore_reconciliation_error,
            exempt_accounts: self.exempt_accounts,
            bootstrap_balances: self.bootstrap_balances,
            historical_balance_enabled: self.historical_balance_enabled,
            interesting_accounts: self.interesting_accounts,
            reconciliation_disabled: self.reconciliation_disabled,
            inactive_discrepancy_search_disabled: self.inactive_discrepancy_search_disabled,
            balance_tracking_disabled: self.balance_tracking_disabled,
            coin_tracking_disabled: self.coin_tracking_disabled,
            start_index: self.start_index,
            end_conditions: self.end_conditions,
            status_port: self.status_port.unwrap_or(defaults.status_port),
            results_output_file: self.results_output_file,
            pruning_disabled: self.pruning_disabled,
        }
    }
}

impl RawConstructionConfiguration {
    pub fn resolve(self, defaults: &Defaults) -> ConstructionConfiguration {
        ConstructionConfiguration {
            offline_url: self.offline_url.unwrap_or_else(|| defaults.url.clone()),
            max_offline_connections: self
                .max_offline_connections
                .unwrap_or(defaults.max_offline_connections),
            stale_depth: self.stale_depth.unwrap_or(defaults.stale_depth),
            broadcast_limit: self.broadcast_limit.unwrap_or(defaults.broadcast_limit),
            ignore_broadcast_failures: self.ignore_broadcast_failures,
            clear_broadcasts: self.clear_broadcasts,
            broadcast_behind_tip: self.broadcast_behind_tip,
            block_broadcast_limit: self
                .block_broadcast_limit
                .unwrap_or(defaults.block_broadcast_limit),
            rebroadcast_all: self.rebroadcast_all,
            prefunded_accounts: self.prefunded_accounts,
            workflows: self.workflows,
            constructor_dsl_file: self.constructor_dsl_file,
            compiled_from: None,
            end_conditions: self.end_conditions,
            status_port: self.status_port.unwrap_or(defaults.status_port),
            results_output_file: self.results_output_file,
            quiet: self.quiet,
        }
    }
}
