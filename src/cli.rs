//! CLI domain: parse, route, output and presentation only.
//! Configuration work happens in [`crate::config`]; this layer renders it.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_configuration_json, format_configuration_text, format_validation_summary,
};
pub use route::RunContext;
