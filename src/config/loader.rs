//! Resolution pipeline: decode, resolve defaults, validate, log.

use std::path::Path;
use tracing::{debug, info, warn};

use super::defaults::Defaults;
use super::raw::RawConfiguration;
use super::Configuration;
use crate::asserter::{Asserter, StructuralAsserter};
use crate::error::{ConfigError, DecodeError};
use crate::workflow::{UnavailableCompiler, WorkflowCompiler};

/// Syntax a settings document is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// `.toml` files are TOML, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json,
        }
    }

    /// Strict decode: keys are kept as written, values are never coerced
    /// between types and unknown fields are rejected.
    pub fn decode(self, content: &str) -> Result<RawConfiguration, DecodeError> {
        match self {
            DocumentFormat::Json => serde_json::from_str(content).map_err(DecodeError::Json),
            DocumentFormat::Toml => toml::from_str(content).map_err(DecodeError::Toml),
        }
    }
}

/// Loads settings documents into validated configurations.
///
/// Holds no state between calls: loading the same document twice yields the
/// same configuration. Collaborators default to [`StructuralAsserter`] and
/// [`UnavailableCompiler`].
pub struct ConfigLoader {
    defaults: Defaults,
    asserter: Box<dyn Asserter>,
    compiler: Box<dyn WorkflowCompiler>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            defaults: Defaults::default(),
            asserter: Box::new(StructuralAsserter),
            compiler: Box::new(UnavailableCompiler),
        }
    }

    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_asserter(mut self, asserter: impl Asserter + 'static) -> Self {
        self.asserter = Box::new(asserter);
        self
    }

    pub fn with_compiler(mut self, compiler: impl WorkflowCompiler + 'static) -> Self {
        self.compiler = Box::new(compiler);
        self
    }

    /// Load a settings document from disk, in the format its extension names.
    pub fn load_from_file(&self, path: &Path) -> Result<Configuration, ConfigError> {
        let source_name = path.display().to_string();
        debug!(source = %source_name, "Decoding configuration file");

        let raw = std::fs::read_to_string(path)
            .map_err(DecodeError::Read)
            .and_then(|content| DocumentFormat::from_path(path).decode(&content))
            .map_err(|error| ConfigError::Decode {
                source_name: source_name.clone(),
                error,
            })?;

        self.resolve(&source_name, raw)
    }

    /// Load a JSON settings document already held in memory. `source_name`
    /// identifies it in errors and logs.
    pub fn load_from_str(
        &self,
        source_name: &str,
        content: &str,
    ) -> Result<Configuration, ConfigError> {
        debug!(source = source_name, "Decoding configuration document");

        let raw = DocumentFormat::Json
            .decode(content)
            .map_err(|error| ConfigError::Decode {
                source_name: source_name.to_string(),
                error,
            })?;

        self.resolve(source_name, raw)
    }

    /// Validated configuration for a caller that supplied no document.
    pub fn load_default(&self) -> Result<Configuration, ConfigError> {
        self.resolve("defaults", RawConfiguration::default())
    }

    /// Resolve and validate an already decoded document.
    pub fn resolve(
        &self,
        source_name: &str,
        raw: RawConfiguration,
    ) -> Result<Configuration, ConfigError> {
        let mut config = raw.resolve(&self.defaults);

        debug!(source = source_name, "Validating configuration");
        config.validate(self.asserter.as_ref(), self.compiler.as_ref())?;

        if config.log_configuration {
            match serde_json::to_string_pretty(&config) {
                Ok(dump) => info!("Resolved configuration:\n{}", dump),
                Err(e) => warn!(error = %e, "Failed to render resolved configuration"),
            }
        }

        info!(source = source_name, "Loaded configuration file");
        Ok(config)
    }
}
