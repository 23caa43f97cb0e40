//! Integration tests for configuration loading and the ledgercheck CLI

mod cli_commands;
mod config_loading;
