//! Presentation: resolved configuration as text tables or JSON.

use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::PathBuf;

use crate::config::{Configuration, ConstructionConfiguration, DataConfiguration};

/// Confirmation printed by `ledgercheck validate`.
pub fn format_validation_summary(source: &str, config: &Configuration) -> String {
    let mut out = format!("{}\n", format!("loaded configuration file: {}", source).cyan());
    out.push_str(&format!("Configuration is valid for network {}", config.network));
    match config.construction {
        Some(ref construction) => out.push_str(&format!(
            " (construction check: {} workflows, {} prefunded accounts)",
            construction.workflows.len(),
            construction.prefunded_accounts.len()
        )),
        None => out.push_str(" (construction check not configured)"),
    }
    out
}

/// Pretty JSON. Loading it again yields the same configuration, with
/// DSL-compiled workflows carried inline.
pub fn format_configuration_json(config: &Configuration) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(config)
}

fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn settings_table(rows: Vec<(&str, String)>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Setting", "Value"]);
    for (setting, value) in rows {
        table.add_row(vec![setting.to_string(), value]);
    }
    table
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn optional_path(path: Option<&PathBuf>) -> String {
    optional(path.map(|p| p.display().to_string()))
}

fn enabled(disabled: bool) -> String {
    if disabled { "disabled" } else { "enabled" }.to_string()
}

/// Human-readable summary for `ledgercheck show`.
pub fn format_configuration_text(config: &Configuration) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", format_section_heading("Configuration")));
    let table = settings_table(vec![
        ("network", config.network.to_string()),
        ("online_url", config.online_url.clone()),
        ("data_directory", optional_path(config.data_directory.as_ref())),
        ("http_timeout", format!("{}s", config.http_timeout)),
        ("max_retries", config.max_retries.to_string()),
        ("retry_elapsed_time", optional(config.retry_elapsed_time)),
        ("max_online_connections", config.max_online_connections.to_string()),
        ("max_sync_concurrency", config.max_sync_concurrency.to_string()),
        ("tip_delay", format!("{}s", config.tip_delay)),
    ]);
    out.push_str(&format!("{}\n\n", table));

    out.push_str(&format!("{}\n\n", format_section_heading("Data check")));
    out.push_str(&format!("{}\n\n", data_table(&config.data)));

    out.push_str(&format!("{}\n\n", format_section_heading("Construction check")));
    match config.construction {
        Some(ref construction) => {
            out.push_str(&format!("{}\n\n", construction_table(construction)));
            out.push_str(&workflow_table(construction));
        }
        None => out.push_str("Not configured.\n"),
    }

    out
}

fn data_table(data: &DataConfiguration) -> Table {
    let end_conditions = data
        .end_conditions
        .as_ref()
        .map(|conditions| conditions.configured())
        .filter(|kinds| !kinds.is_empty())
        .map(|kinds| {
            kinds
                .iter()
                .map(|kind| kind.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_else(|| "none".to_string());

    settings_table(vec![
        (
            "active_reconciliation_concurrency",
            data.active_reconciliation_concurrency.to_string(),
        ),
        (
            "inactive_reconciliation_concurrency",
            data.inactive_reconciliation_concurrency.to_string(),
        ),
        (
            "inactive_reconciliation_frequency",
            data.inactive_reconciliation_frequency.to_string(),
        ),
        ("reconciliation", enabled(data.reconciliation_disabled)),
        ("balance_tracking", enabled(data.balance_tracking_disabled)),
        ("coin_tracking", enabled(data.coin_tracking_disabled)),
        ("pruning", enabled(data.pruning_disabled)),
        ("start_index", optional(data.start_index)),
        ("end_conditions", end_conditions),
        ("status_port", data.status_port.to_string()),
    ])
}

fn construction_table(construction: &ConstructionConfiguration) -> Table {
    settings_table(vec![
        ("offline_url", construction.offline_url.clone()),
        (
            "max_offline_connections",
            construction.max_offline_connections.to_string(),
        ),
        ("stale_depth", construction.stale_depth.to_string()),
        ("broadcast_limit", construction.broadcast_limit.to_string()),
        (
            "block_broadcast_limit",
            construction.block_broadcast_limit.to_string(),
        ),
        (
            "constructor_dsl_file",
            optional_path(construction.dsl_file().or(construction.compiled_from.as_ref())),
        ),
        (
            "prefunded_accounts",
            construction.prefunded_accounts.len().to_string(),
        ),
        ("status_port", construction.status_port.to_string()),
    ])
}

fn workflow_table(construction: &ConstructionConfiguration) -> String {
    if construction.workflows.is_empty() {
        return "No workflows.\n".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Workflow", "Concurrency", "Scenarios", "End condition"]);
    for workflow in &construction.workflows {
        table.add_row(vec![
            workflow.name.clone(),
            workflow.concurrency.to_string(),
            workflow.scenarios.len().to_string(),
            optional(construction.end_conditions.get(&workflow.name)),
        ]);
    }
    format!("{}\n", table)
}
