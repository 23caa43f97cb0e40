//! CLI output: error mapping from domain errors to the CLI surface.

/// Render an error for stderr. Domain errors already carry their full
/// context chain in their message, so only the top-level message is used.
pub fn map_error(e: &anyhow::Error) -> String {
    format!("Error: {}", e)
}
