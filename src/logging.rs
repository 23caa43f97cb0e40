//! Logging System
//!
//! Structured logging using the `tracing` crate. Level, format and
//! destination come from [`LoggingConfig`], with environment overrides
//! taking precedence:
//!
//! - `LEDGERCHECK_LOG`: full filter directive (e.g. `ledgercheck=debug`)
//! - `LEDGERCHECK_LOG_FORMAT`: `json` or `text`
//! - `LEDGERCHECK_LOG_OUTPUT`: `stdout`, `stderr` or `file`

use crate::error::LoggingError;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration, built from CLI flags by the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Install a subscriber at all
    pub enabled: bool,

    /// Filter directive: a level (trace, debug, info, warn, error, off) or
    /// a full directive such as `ledgercheck::config=debug,info`
    pub level: String,

    /// Output format: json, text
    pub format: String,

    /// Output destination: stdout, stderr, file
    pub output: String,

    /// Log file path, used when output is "file"
    pub file: Option<PathBuf>,

    /// Colored output (text format on a terminal stream only)
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            format: "text".to_string(),
            // Keeps stdout free for command output.
            output: "stderr".to_string(),
            file: None,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogOutput {
    Stdout,
    Stderr,
    File,
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (LEDGERCHECK_LOG, LEDGERCHECK_LOG_FORMAT, ...)
/// 2. The given config (built from CLI flags by the binary)
/// 3. Defaults
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;

    let writer = match output {
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::File => BoxMakeWriter::new(Mutex::new(open_log_file(config)?)),
    };
    let use_color = config.color && output != LogOutput::File;

    let registry = Registry::default().with(filter);
    let installed = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init(),
    };

    installed.map_err(|_| LoggingError::AlreadyInitialized)
}

fn open_log_file(config: &LoggingConfig) -> Result<std::fs::File, LoggingError> {
    let path = config
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from("ledgercheck.log"));

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|error| LoggingError::File {
            path: path.clone(),
            error,
        })?;
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|error| LoggingError::File { path, error })
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_env("LEDGERCHECK_LOG") {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|_| LoggingError::InvalidDirective(config.level.clone()))
}

fn determine_format(config: &LoggingConfig) -> Result<LogFormat, LoggingError> {
    let format = std::env::var("LEDGERCHECK_LOG_FORMAT").unwrap_or_else(|_| config.format.clone());
    parse_format(&format)
}

fn parse_format(format: &str) -> Result<LogFormat, LoggingError> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::InvalidFormat(other.to_string())),
    }
}

fn determine_output(config: &LoggingConfig) -> Result<LogOutput, LoggingError> {
    let output = std::env::var("LEDGERCHECK_LOG_OUTPUT").unwrap_or_else(|_| config.output.clone());
    parse_output(&output)
}

fn parse_output(output: &str) -> Result<LogOutput, LoggingError> {
    match output {
        "stdout" => Ok(LogOutput::Stdout),
        "stderr" => Ok(LogOutput::Stderr),
        "file" => Ok(LogOutput::File),
        other => Err(LoggingError::InvalidOutput(other.to_string())),
    }
}
