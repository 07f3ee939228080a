//! In-memory runner adapter for export tests and dry runs.

use crate::export::ports::{
    ExportInvocation, ExportOutcome, ExportToolError, ExportToolResult, ExportToolRunner,
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Runner that records invocations instead of spawning `ovftool`.
///
/// Every run returns the scripted outcome, which defaults to a successful
/// exit with empty output.
#[derive(Debug, Clone, Default)]
pub struct RecordingExportToolRunner {
    state: Arc<RwLock<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    invocations: Vec<ExportInvocation>,
    outcome: ExportOutcome,
}

impl RecordingExportToolRunner {
    /// Creates a runner that reports success.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the outcome returned by subsequent runs.
    ///
    /// # Errors
    ///
    /// Returns runner runtime errors when lock acquisition fails.
    pub fn set_outcome(&self, outcome: ExportOutcome) -> ExportToolResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ExportToolError::runtime(std::io::Error::other(err.to_string())))?;
        state.outcome = outcome;
        Ok(())
    }

    /// Returns every invocation received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns runner runtime errors when lock acquisition fails.
    pub fn invocations(&self) -> ExportToolResult<Vec<ExportInvocation>> {
        let state = self
            .state
            .read()
            .map_err(|err| ExportToolError::runtime(std::io::Error::other(err.to_string())))?;
        Ok(state.invocations.clone())
    }
}

#[async_trait]
impl ExportToolRunner for RecordingExportToolRunner {
    async fn run(&self, invocation: &ExportInvocation) -> ExportToolResult<ExportOutcome> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ExportToolError::runtime(std::io::Error::other(err.to_string())))?;
        state.invocations.push(invocation.clone());
        Ok(state.outcome.clone())
    }
}
