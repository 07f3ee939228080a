//! Service layer that prepares and runs `ovftool` exports.

use crate::export::{
    domain::{
        ConnectionUri, ExportArguments, ExportConfig, ExportDomainError, select_source_artifact,
    },
    ports::{ExportInvocation, ExportOutcome, ExportToolError, ExportToolRunner},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Program name used when none is configured.
pub const DEFAULT_PROGRAM: &str = "ovftool";

/// Service-level errors for export operations.
#[derive(Debug, Error)]
pub enum ExportServiceError {
    /// Argument assembly or source selection failed.
    #[error(transparent)]
    Domain(#[from] ExportDomainError),
    /// The runner could not execute the tool.
    #[error(transparent)]
    Tool(#[from] ExportToolError),
    /// The tool ran and exited with a non-zero code.
    #[error("ovftool exited with code {exit_code}: {stderr}")]
    ToolFailed {
        /// Process exit code.
        exit_code: i32,
        /// Captured standard error.
        stderr: String,
    },
}

/// Result type for export service operations.
pub type ExportServiceResult<T> = Result<T, ExportServiceError>;

/// Export orchestration service.
#[derive(Clone)]
pub struct ExportService<R>
where
    R: ExportToolRunner,
{
    runner: Arc<R>,
    program: String,
}

impl<R> ExportService<R>
where
    R: ExportToolRunner,
{
    /// Creates a service that runs [`DEFAULT_PROGRAM`].
    #[must_use]
    pub fn new(runner: Arc<R>) -> Self {
        Self {
            runner,
            program: DEFAULT_PROGRAM.to_owned(),
        }
    }

    /// Overrides the program path handed to the runner.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Returns the program path handed to the runner.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Builds the invocation for exporting the first usable artifact.
    ///
    /// # Errors
    ///
    /// Returns [`ExportServiceError::Domain`] when no artifact is usable or
    /// argument assembly rejects the configuration.
    pub fn prepare<S: AsRef<str>>(
        &self,
        config: &ExportConfig,
        artifact_files: &[S],
    ) -> ExportServiceResult<ExportInvocation> {
        let source = select_source_artifact(artifact_files)?;
        debug!(source, "selected export source artifact");

        let uri = ConnectionUri::from_config(config);
        let arguments = ExportArguments::build(source, &uri, config)?;
        Ok(ExportInvocation::new(self.program.as_str(), arguments))
    }

    /// Prepares the invocation and runs it through the runner.
    ///
    /// # Errors
    ///
    /// Returns [`ExportServiceError::Domain`] when preparation fails,
    /// [`ExportServiceError::Tool`] when the runner cannot execute the tool,
    /// or [`ExportServiceError::ToolFailed`] when the tool exits non-zero.
    pub async fn export<S: AsRef<str> + Sync>(
        &self,
        config: &ExportConfig,
        artifact_files: &[S],
    ) -> ExportServiceResult<ExportOutcome> {
        let invocation = self.prepare(config, artifact_files)?;
        info!(
            program = %invocation.program(),
            command = %invocation.redacted_command_line(),
            "running export tool"
        );

        let outcome = self.runner.run(&invocation).await?;
        if !outcome.succeeded() {
            warn!(exit_code = outcome.exit_code, "export tool failed");
            return Err(ExportServiceError::ToolFailed {
                exit_code: outcome.exit_code,
                stderr: outcome.stderr,
            });
        }
        Ok(outcome)
    }
}
