//! Default catalog: the value each optional setting takes when omitted.

use crate::types::NetworkIdentifier;

pub const DEFAULT_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: u64 = 10;
pub const DEFAULT_MAX_RETRIES: u64 = 5;
pub const DEFAULT_MAX_ONLINE_CONNECTIONS: usize = 120; // most OSes cap open files at 128
pub const DEFAULT_MAX_OFFLINE_CONNECTIONS: usize = 4;
pub const DEFAULT_MAX_SYNC_CONCURRENCY: u64 = 64;
pub const DEFAULT_ACTIVE_RECONCILIATION_CONCURRENCY: u64 = 16;
pub const DEFAULT_INACTIVE_RECONCILIATION_CONCURRENCY: u64 = 4;
pub const DEFAULT_INACTIVE_RECONCILIATION_FREQUENCY: u64 = 250;
pub const DEFAULT_STALE_DEPTH: u64 = 30;
pub const DEFAULT_BROADCAST_LIMIT: u64 = 3;
pub const DEFAULT_TIP_DELAY: u64 = 300;
pub const DEFAULT_BLOCK_BROADCAST_LIMIT: u64 = 5;
pub const DEFAULT_STATUS_PORT: u16 = 9090;

pub const DEFAULT_BLOCKCHAIN: &str = "Ethereum";
pub const DEFAULT_NETWORK: &str = "Ropsten";

/// Fallback values applied by the field resolver.
///
/// `Defaults::default()` is the stock catalog. Deployments targeting another
/// network replace `network` (or any other entry) before handing the catalog
/// to [`super::ConfigLoader::with_defaults`].
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub network: NetworkIdentifier,
    pub url: String,
    pub http_timeout: u64,
    pub max_retries: u64,
    pub max_online_connections: usize,
    pub max_offline_connections: usize,
    pub max_sync_concurrency: u64,
    pub tip_delay: u64,
    pub active_reconciliation_concurrency: u64,
    pub inactive_reconciliation_concurrency: u64,
    pub inactive_reconciliation_frequency: u64,
    pub stale_depth: u64,
    pub broadcast_limit: u64,
    pub block_broadcast_limit: u64,
    pub status_port: u16,
}

impl Defaults {
    pub fn with_network(mut self, network: NetworkIdentifier) -> Self {
        self.network = network;
        self
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            network: NetworkIdentifier::new(DEFAULT_BLOCKCHAIN, DEFAULT_NETWORK),
            url: DEFAULT_URL.to_string(),
            http_timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            max_online_connections: DEFAULT_MAX_ONLINE_CONNECTIONS,
            max_offline_connections: DEFAULT_MAX_OFFLINE_CONNECTIONS,
            max_sync_concurrency: DEFAULT_MAX_SYNC_CONCURRENCY,
            tip_delay: DEFAULT_TIP_DELAY,
            active_reconciliation_concurrency: DEFAULT_ACTIVE_RECONCILIATION_CONCURRENCY,
            inactive_reconciliation_concurrency: DEFAULT_INACTIVE_RECONCILIATION_CONCURRENCY,
            inactive_reconciliation_frequency: DEFAULT_INACTIVE_RECONCILIATION_FREQUENCY,
            stale_depth: DEFAULT_STALE_DEPTH,
            broadcast_limit: DEFAULT_BROADCAST_LIMIT,
            block_broadcast_limit: DEFAULT_BLOCK_BROADCAST_LIMIT,
            status_port: DEFAULT_STATUS_PORT,
        }
    }
}
