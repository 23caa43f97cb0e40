//! Configuration System
//!
//! Turns a partially specified settings document into a fully resolved,
//! validated [`Configuration`] for the data check and the construction
//! check. The pipeline is decode, resolve defaults, validate, log; see
//! [`ConfigLoader`].

use serde::Serialize;
use std::path::PathBuf;

use crate::types::NetworkIdentifier;

mod construction;
mod data;
mod defaults;
mod loader;
mod raw;
mod resolve;
mod validate;

pub use construction::{ConstructionConfiguration, PrefundedAccount};
pub use data::{DataConfiguration, DataEndCondition, DataEndConditions};
pub use defaults::*;
pub use loader::{ConfigLoader, DocumentFormat};
pub use raw::{RawConfiguration, RawConstructionConfiguration, RawDataConfiguration};

/// Root configuration shared read-only by every check once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    /// Network where blocks are synced and transactions constructed.
    pub network: NetworkIdentifier,

    /// Endpoint of the ledger API running in online mode.
    pub online_url: String,

    /// Folder for logs and check state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_directory: Option<PathBuf>,

    /// Request timeout in seconds.
    pub http_timeout: u64,

    pub max_retries: u64,

    /// Upper bound in seconds on time spent retrying one request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_elapsed_time: Option<u64>,

    pub max_online_connections: usize,

    pub max_sync_concurrency: u64,

    /// Seconds behind wall-clock time after which the syncer counts as behind tip.
    pub tip_delay: u64,

    /// Log the resolved configuration when it is loaded.
    pub log_configuration: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction: Option<ConstructionConfiguration>,

    pub data: DataConfiguration,
}

impl Configuration {
    /// Configuration an empty document resolves to under `defaults`.
    pub fn default_with(defaults: &Defaults) -> Self {
        Self {
            network: defaults.network.clone(),
            online_url: defaults.url.clone(),
            data_directory: None,
            http_timeout: defaults.http_timeout,
            max_retries: defaults.max_retries,
            retry_elapsed_time: None,
            max_online_connections: defaults.max_online_connections,
            max_sync_concurrency: defaults.max_sync_concurrency,
            tip_delay: defaults.tip_delay,
            log_configuration: false,
            construction: None,
            data: DataConfiguration::default_with(defaults),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::default_with(&Defaults::default())
    }
}
