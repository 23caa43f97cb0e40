//! CLI route: run context and single dispatch table.

use std::path::PathBuf;

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_configuration_json, format_configuration_text, format_validation_summary,
};
use crate::config::{ConfigLoader, Configuration};
use crate::error::ConfigError;

/// Runtime context for CLI execution: the loader and the document to load.
pub struct RunContext {
    loader: ConfigLoader,
    configuration_file: Option<PathBuf>,
}

impl RunContext {
    pub fn new(configuration_file: Option<PathBuf>) -> Self {
        Self::with_loader(ConfigLoader::new(), configuration_file)
    }

    pub fn with_loader(loader: ConfigLoader, configuration_file: Option<PathBuf>) -> Self {
        Self {
            loader,
            configuration_file,
        }
    }

    fn source_name(&self) -> String {
        self.configuration_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string())
    }

    fn load(&self) -> Result<Configuration, ConfigError> {
        match self.configuration_file {
            Some(ref path) => self.loader.load_from_file(path),
            None => self.loader.load_default(),
        }
    }

    /// Run a command and return what should be printed to stdout.
    pub fn execute(&self, command: &Commands) -> anyhow::Result<String> {
        let config = self.load()?;
        match command {
            Commands::Validate => Ok(format_validation_summary(&self.source_name(), &config)),
            Commands::Show { format } => match format {
                OutputFormat::Text => Ok(format_configuration_text(&config)),
                OutputFormat::Json => Ok(format_configuration_json(&config)?),
            },
        }
    }
}
