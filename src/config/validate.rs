//! Semantic validator for a resolved configuration.
//!
//! Rules run in a fixed order and the first violation is returned:
//! network identity, then data settings, then construction settings.
//! Construction validation compiles the DSL file when one is given,
//! replaces the workflow list with the compiler output and records the
//! file in `compiled_from`.

use tracing::debug;

use super::construction::{ConstructionConfiguration, PrefundedAccount};
use super::data::{DataConfiguration, DataEndConditions};
use super::Configuration;
use crate::asserter::Asserter;
use crate::error::{
    ConstructionConfigError, DataConfigError, PrefundedAccountError, ValidationError,
};
use crate::workflow::{WorkflowCompiler, RESERVED_WORKFLOW_CONCURRENCY};

impl Configuration {
    pub fn validate(
        &mut self,
        asserter: &dyn Asserter,
        compiler: &dyn WorkflowCompiler,
    ) -> Result<(), ValidationError> {
        asserter
            .network_identifier(&self.network)
            .map_err(ValidationError::Network)?;

        self.data.validate()?;

        if let Some(ref mut construction) = self.construction {
            construction.validate(asserter, compiler)?;
        }

        Ok(())
    }
}

impl DataConfiguration {
    pub fn validate(&self) -> Result<(), DataConfigError> {
        if let Some(start_index) = self.start_index {
            if start_index < 0 {
                return Err(DataConfigError::NegativeStartIndex(start_index));
            }
        }

        match self.end_conditions {
            Some(ref end_conditions) => end_conditions.validate(self),
            None => Ok(()),
        }
    }
}

impl DataEndConditions {
    /// Checks the conditions against the data settings that own them.
    fn validate(&self, data: &DataConfiguration) -> Result<(), DataConfigError> {
        if let Some(index) = self.index {
            if index < 0 {
                return Err(DataConfigError::NegativeEndIndex(index));
            }
        }

        let Some(coverage) = self.reconciliation_coverage else {
            return Ok(());
        };

        if !(0.0..=1.0).contains(&coverage) {
            return Err(DataConfigError::CoverageOutOfRange(coverage));
        }
        if data.balance_tracking_disabled {
            return Err(DataConfigError::CoverageRequiresBalanceTracking);
        }
        if data.ignore_reconciliation_error {
            return Err(DataConfigError::CoverageRequiresReconciliationErrors);
        }
        if data.reconciliation_disabled {
            return Err(DataConfigError::CoverageRequiresReconciliation);
        }

        Ok(())
    }
}

impl ConstructionConfiguration {
    pub fn validate(
        &mut self,
        asserter: &dyn Asserter,
        compiler: &dyn WorkflowCompiler,
    ) -> Result<(), ConstructionConfigError> {
        let dsl_file = self.dsl_file().cloned();

        match (self.workflows.is_empty(), dsl_file) {
            (false, Some(_)) => return Err(ConstructionConfigError::WorkflowSourceConflict),
            (true, None) => return Err(ConstructionConfigError::WorkflowSourceMissing),
            (true, Some(path)) => {
                let workflows = compiler.compile(&path).map_err(|error| {
                    ConstructionConfigError::DslCompilation {
                        path: path.clone(),
                        error,
                    }
                })?;
                debug!(
                    path = %path.display(),
                    workflows = workflows.len(),
                    "Compiled constructor DSL file"
                );
                self.workflows = workflows;
                self.constructor_dsl_file = None;
                self.compiled_from = Some(path);
            }
            (false, None) => {}
        }

        for workflow in &self.workflows {
            if workflow.is_reserved() && workflow.concurrency != RESERVED_WORKFLOW_CONCURRENCY {
                return Err(ConstructionConfigError::ReservedConcurrency {
                    workflow: workflow.name.clone(),
                    concurrency: workflow.concurrency,
                    required: RESERVED_WORKFLOW_CONCURRENCY,
                });
            }
        }

        for (index, account) in self.prefunded_accounts.iter().enumerate() {
            account
                .validate(asserter)
                .map_err(|error| ConstructionConfigError::PrefundedAccount { index, error })?;
        }

        Ok(())
    }
}

impl PrefundedAccount {
    /// Key encoding, curve type, account identifier, currency; first failure wins.
    pub fn validate(&self, asserter: &dyn Asserter) -> Result<(), PrefundedAccountError> {
        hex::decode(&self.private_key_hex).map_err(PrefundedAccountError::PrivateKeyNotHex)?;

        asserter
            .curve_type(&self.curve_type)
            .map_err(PrefundedAccountError::CurveType)?;
        asserter
            .account_identifier(&self.account_identifier)
            .map_err(PrefundedAccountError::AccountIdentifier)?;
        asserter
            .currency(&self.currency)
            .map_err(PrefundedAccountError::Currency)?;

        Ok(())
    }
}
