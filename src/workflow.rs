//! Construction workflows and the DSL compiler seam.
//!
//! Workflows arrive either inline in the settings document or compiled from
//! a constructor DSL file. Compilation is delegated to a [`WorkflowCompiler`];
//! this crate does not ship a DSL front end.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bootstrap workflow that creates a new account.
pub const CREATE_ACCOUNT: &str = "create_account";

/// Bootstrap workflow that requests funds for an account.
pub const REQUEST_FUNDS: &str = "request_funds";

/// The only concurrency a reserved workflow may run with.
pub const RESERVED_WORKFLOW_CONCURRENCY: usize = 1;

/// Named, ordered sequence of construction scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Workflow {
    pub name: String,

    pub concurrency: usize,

    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

impl Workflow {
    pub fn new(name: impl Into<String>, concurrency: usize) -> Self {
        Self {
            name: name.into(),
            concurrency,
            scenarios: Vec::new(),
        }
    }

    /// True for `create_account` and `request_funds`.
    pub fn is_reserved(&self) -> bool {
        self.name == CREATE_ACCOUNT || self.name == REQUEST_FUNDS
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,

    #[serde(default)]
    pub actions: Vec<Action>,
}

/// Single step of a scenario. Inputs are opaque to configuration loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Action {
    #[serde(default)]
    pub input: String,

    #[serde(rename = "type")]
    pub action_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
}

/// Turns a constructor DSL file into workflows.
pub trait WorkflowCompiler {
    fn compile(&self, path: &Path) -> anyhow::Result<Vec<Workflow>>;
}

/// Compiler used when no DSL front end is linked in; every compile fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableCompiler;

impl WorkflowCompiler for UnavailableCompiler {
    fn compile(&self, path: &Path) -> anyhow::Result<Vec<Workflow>> {
        anyhow::bail!(
            "no constructor DSL compiler is available to compile {}; inline the workflows instead",
            path.display()
        )
    }
}
