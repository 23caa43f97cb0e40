//! Integration tests for loading settings documents from disk

use ledgercheck::config::{
    ConfigLoader, Configuration, DataEndCondition, DEFAULT_STATUS_PORT, DEFAULT_TIMEOUT,
    DEFAULT_URL,
};
use ledgercheck::cli::format_configuration_json;
use ledgercheck::error::{
    ConfigError, ConstructionConfigError, DataConfigError, DecodeError, ValidationError,
};
use ledgercheck::types::NetworkIdentifier;
use ledgercheck::workflow::{Workflow, WorkflowCompiler};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::test_utils::{write_config, FULL_DOCUMENT};

#[test]
fn test_full_document_loads_every_section() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "config.json", FULL_DOCUMENT);

    let config = ConfigLoader::new().load_from_file(&path).unwrap();

    assert_eq!(config.network.blockchain, "Bitcoin");
    assert_eq!(
        config
            .network
            .sub_network_identifier
            .as_ref()
            .map(|s| s.network.as_str()),
        Some("shard 0")
    );
    assert_eq!(config.online_url, "http://localhost:9000");
    assert_eq!(config.data_directory, Some(PathBuf::from("cli-data")));
    assert_eq!(config.http_timeout, 30);
    assert_eq!(config.max_retries, 8);
    assert_eq!(config.retry_elapsed_time, Some(120));
    assert_eq!(config.max_online_connections, 50);
    assert_eq!(config.max_sync_concurrency, 16);
    assert_eq!(config.tip_delay, 120);
    assert!(config.log_configuration);

    let data = &config.data;
    assert_eq!(data.active_reconciliation_concurrency, 32);
    assert_eq!(data.inactive_reconciliation_frequency, 100);
    assert_eq!(data.historical_balance_enabled, Some(true));
    assert!(data.inactive_discrepancy_search_disabled);
    assert_eq!(data.start_index, Some(100));
    assert_eq!(data.status_port, 9092);
    let end_conditions = data.end_conditions.as_ref().unwrap();
    assert_eq!(end_conditions.reconciliation_coverage, Some(0.95));
    assert_eq!(
        end_conditions.configured(),
        vec![
            DataEndCondition::Index,
            DataEndCondition::Duration,
            DataEndCondition::Tip,
            DataEndCondition::ReconciliationCoverage,
        ]
    );

    let construction = config.construction.as_ref().unwrap();
    assert_eq!(construction.offline_url, "http://localhost:9001");
    assert_eq!(construction.block_broadcast_limit, 7);
    assert_eq!(construction.workflows.len(), 3);
    assert_eq!(construction.workflows[0].scenarios[0].actions.len(), 1);
    assert_eq!(construction.prefunded_accounts.len(), 1);
    assert_eq!(construction.end_conditions.get("transfer"), Some(&20));
    assert!(construction.quiet);
}

#[test]
fn test_empty_document_resolves_to_documented_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "config.json", "{}");

    let config = ConfigLoader::new().load_from_file(&path).unwrap();

    assert_eq!(config, Configuration::default());
    assert_eq!(config.network, NetworkIdentifier::new("Ethereum", "Ropsten"));
    assert_eq!(config.online_url, DEFAULT_URL);
    assert_eq!(config.http_timeout, DEFAULT_TIMEOUT);
    assert_eq!(config.data.status_port, DEFAULT_STATUS_PORT);
    assert!(config.construction.is_none());
}

#[test]
fn test_empty_construction_section_needs_a_workflow_source() {
    let loader = ConfigLoader::new();

    let err = loader
        .load_from_str("no-source", r#"{"construction": {}}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Validation(ValidationError::Construction(
            ConstructionConfigError::WorkflowSourceMissing
        ))
    ));

    let config = loader
        .load_from_str(
            "inline",
            r#"{"construction": {"workflows": [{"name": "transfer", "concurrency": 2}]}}"#,
        )
        .unwrap();
    let construction = config.construction.unwrap();
    assert_eq!(construction.offline_url, DEFAULT_URL);
    assert_eq!(construction.status_port, DEFAULT_STATUS_PORT);
}

#[test]
fn test_toml_document_loads() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        temp_dir.path(),
        "config.toml",
        r#"
online_url = "http://localhost:9000"

[network]
blockchain = "Bitcoin"
network = "Testnet3"

[data]
start_index = 10

[data.end_conditions]
tip = true

[[construction.workflows]]
name = "create_account"
concurrency = 1
"#,
    );

    let config = ConfigLoader::new().load_from_file(&path).unwrap();
    assert_eq!(config.network, NetworkIdentifier::new("Bitcoin", "Testnet3"));
    assert_eq!(config.data.start_index, Some(10));
    assert_eq!(
        config.data.end_conditions.unwrap().tip,
        Some(true)
    );
    assert_eq!(config.construction.unwrap().workflows[0].name, "create_account");
}

#[test]
fn test_missing_file_is_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    let err = ConfigLoader::new().load_from_file(&path).unwrap_err();
    match err {
        ConfigError::Decode { source_name, .. } => {
            assert_eq!(source_name, path.display().to_string());
        }
        other => panic!("expected decode error, got {other}"),
    }
}

#[test]
fn test_unknown_field_is_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        temp_dir.path(),
        "config.json",
        r#"{"data": {"reconciliation_disable": true}}"#,
    );

    let err = ConfigLoader::new().load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Decode { .. }));
}

#[test]
fn test_coverage_with_balance_tracking_disabled_fails() {
    let err = ConfigLoader::new()
        .load_from_str(
            "coverage",
            r#"{
                "data": {
                    "balance_tracking_disabled": true,
                    "end_conditions": {"reconciliation_coverage": 0.5}
                }
            }"#,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Validation(ValidationError::Data(
            DataConfigError::CoverageRequiresBalanceTracking
        ))
    ));
}

#[test]
fn test_coverage_bounds_are_inclusive() {
    let loader = ConfigLoader::new();
    for coverage in ["0.0", "1.0"] {
        let document = format!(
            r#"{{"data": {{"end_conditions": {{"reconciliation_coverage": {}}}}}}}"#,
            coverage
        );
        assert!(
            loader.load_from_str("coverage", &document).is_ok(),
            "coverage {} should be accepted",
            coverage
        );
    }

    let err = loader
        .load_from_str(
            "coverage",
            r#"{"data": {"end_conditions": {"reconciliation_coverage": 1.5}}}"#,
        )
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid configuration: invalid data configuration: reconciliation coverage 1.5 must be in [0.0, 1.0]"
    );
}

#[test]
fn test_loading_is_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "config.json", FULL_DOCUMENT);
    let loader = ConfigLoader::new();

    let first = loader.load_from_file(&path).unwrap();
    let second = loader.load_from_file(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_keys_and_metadata_keep_their_case() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        temp_dir.path(),
        "config.json",
        r#"{
            "network": {
                "blockchain": "Bitcoin",
                "network": "Testnet3",
                "sub_network_identifier": {"network": "shard 0", "metadata": {"ShardID": 1}}
            },
            "construction": {
                "workflows": [{"name": "Transfer", "concurrency": 2}],
                "end_conditions": {"Transfer": 5},
                "prefunded_accounts": [{
                    "privkey": "00ff",
                    "account_identifier": {"address": "0xabc", "metadata": {"KeyIndex": 3}},
                    "curve_type": "secp256k1",
                    "currency": {"symbol": "ETH", "decimals": 18, "metadata": {"Issuer": "Foundation"}}
                }]
            }
        }"#,
    );

    let config = ConfigLoader::new().load_from_file(&path).unwrap();

    let sub_network = config.network.sub_network_identifier.unwrap();
    let metadata = sub_network.metadata.unwrap();
    assert_eq!(metadata.get("ShardID"), Some(&serde_json::json!(1)));
    assert!(metadata.get("shardid").is_none());

    let construction = config.construction.unwrap();
    assert_eq!(construction.workflows[0].name, "Transfer");
    assert_eq!(construction.end_conditions.get("Transfer"), Some(&5));
    assert!(construction.end_conditions.get("transfer").is_none());

    let account = &construction.prefunded_accounts[0];
    let account_metadata = account.account_identifier.metadata.as_ref().unwrap();
    assert!(account_metadata.contains_key("KeyIndex"));
    let currency_metadata = account.currency.metadata.as_ref().unwrap();
    assert_eq!(
        currency_metadata.get("Issuer"),
        Some(&serde_json::json!("Foundation"))
    );
}

#[test]
fn test_wrongly_typed_value_is_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new();

    for (name, content) in [
        ("timeout.json", r#"{"http_timeout": "10"}"#),
        ("url.json", r#"{"online_url": 5}"#),
        ("flag.json", r#"{"log_configuration": "true"}"#),
    ] {
        let path = write_config(temp_dir.path(), name, content);
        let err = loader.load_from_file(&path).unwrap_err();
        assert!(
            matches!(err, ConfigError::Decode { error: DecodeError::Json(_), .. }),
            "{} should not decode, got {}",
            content,
            err
        );
    }

    let path = write_config(temp_dir.path(), "timeout.toml", "http_timeout = \"10\"\n");
    let err = loader.load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Decode {
            error: DecodeError::Toml(_),
            ..
        }
    ));
}

struct FixedCompiler;

impl WorkflowCompiler for FixedCompiler {
    fn compile(&self, _path: &Path) -> anyhow::Result<Vec<Workflow>> {
        Ok(vec![
            Workflow::new("create_account", 1),
            Workflow::new("transfer", 4),
        ])
    }
}

#[test]
fn test_rendered_json_reloads_after_dsl_compile() {
    let loader = ConfigLoader::new().with_compiler(FixedCompiler);
    let compiled = loader
        .load_from_str(
            "dsl",
            r#"{"construction": {"constructor_dsl_file": "transfer.ros"}}"#,
        )
        .unwrap();

    let json = format_configuration_json(&compiled).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["construction"].get("constructor_dsl_file").is_none());

    // Reloading needs no compiler: the output carries the inline workflows.
    let reloaded = ConfigLoader::new().load_from_str("show", &json).unwrap();
    let reloaded_construction = reloaded.construction.as_ref().unwrap();
    let compiled_construction = compiled.construction.as_ref().unwrap();
    assert_eq!(
        reloaded_construction.workflows,
        compiled_construction.workflows
    );
    assert_eq!(
        compiled_construction.compiled_from,
        Some(PathBuf::from("transfer.ros"))
    );
    assert_eq!(reloaded_construction.compiled_from, None);

    let mut expected = compiled.clone();
    if let Some(construction) = expected.construction.as_mut() {
        construction.compiled_from = None;
    }
    assert_eq!(reloaded, expected);
}
