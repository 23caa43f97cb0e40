//! Resolved settings for the construction check (transaction building).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::types::{AccountIdentifier, Currency, CurveType};
use crate::workflow::Workflow;

/// Construction-check settings after defaulting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstructionConfiguration {
    /// Endpoint of the ledger API running in offline mode.
    pub offline_url: String,

    pub max_offline_connections: usize,

    /// Blocks to wait for an unconfirmed transaction before rebroadcasting.
    pub stale_depth: u64,

    /// Broadcast attempts before a transaction is given up on.
    pub broadcast_limit: u64,

    /// Keep running when a transaction exhausts `broadcast_limit`.
    pub ignore_broadcast_failures: bool,

    /// Drop pending broadcasts on restart.
    pub clear_broadcasts: bool,

    /// Broadcast while the syncer is behind tip.
    pub broadcast_behind_tip: bool,

    /// Broadcasts attempted per block.
    pub block_broadcast_limit: u64,

    /// Rebroadcast every pending transaction on restart.
    pub rebroadcast_all: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefunded_accounts: Vec<PrefundedAccount>,

    /// Inline workflows, or the output of compiling the DSL file once
    /// validation has run.
    pub workflows: Vec<Workflow>,

    /// DSL file still to be compiled. Cleared once validation compiles it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor_dsl_file: Option<PathBuf>,

    /// DSL file `workflows` were compiled from. Not part of the wire form,
    /// so serialized output reloads as an inline workflow list.
    #[serde(skip)]
    pub compiled_from: Option<PathBuf>,

    /// Workflow name to completions required before the check stops.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub end_conditions: BTreeMap<String, i64>,

    pub status_port: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_output_file: Option<PathBuf>,

    /// Silence request and response logging.
    pub quiet: bool,
}

impl ConstructionConfiguration {
    /// DSL path if one was given; an empty path counts as none.
    pub fn dsl_file(&self) -> Option<&PathBuf> {
        self.constructor_dsl_file
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

/// Test account with known keys used to originate transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrefundedAccount {
    #[serde(rename = "privkey")]
    pub private_key_hex: String,

    pub account_identifier: AccountIdentifier,

    pub curve_type: CurveType,

    pub currency: Currency,
}
