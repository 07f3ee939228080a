//! Runner port for executing `ovftool`.

use crate::export::domain::ExportArguments;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for export tool runner operations.
pub type ExportToolResult<T> = Result<T, ExportToolError>;

/// A fully prepared tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportInvocation {
    program: String,
    arguments: ExportArguments,
}

impl ExportInvocation {
    /// Creates an invocation of `program` with `arguments`.
    #[must_use]
    pub fn new(program: impl Into<String>, arguments: ExportArguments) -> Self {
        Self {
            program: program.into(),
            arguments,
        }
    }

    /// Returns the program to execute.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the ordered arguments.
    #[must_use]
    pub const fn arguments(&self) -> &ExportArguments {
        &self.arguments
    }

    /// Renders the program and arguments as one line with the password
    /// masked.
    #[must_use]
    pub fn redacted_command_line(&self) -> String {
        format!(
            "{} {}",
            self.program,
            self.arguments.redacted_command_line()
        )
    }
}

/// Exit status and captured output of a finished tool run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportOutcome {
    /// Process exit code.
    pub exit_code: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ExportOutcome {
    /// Creates an outcome with exit code zero and the given stdout.
    #[must_use]
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Creates an outcome with a non-zero exit code and the given stderr.
    #[must_use]
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Returns `true` when the process exited with code zero.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Execution contract for the external export tool.
///
/// Implementations spawn (or simulate) the process and report its outcome.
/// Retrying a failed run is the implementation's concern.
#[async_trait]
pub trait ExportToolRunner: Send + Sync {
    /// Runs the invocation to completion.
    async fn run(&self, invocation: &ExportInvocation) -> ExportToolResult<ExportOutcome>;
}

/// Errors returned by export tool runner adapters.
#[derive(Debug, Clone, Error)]
pub enum ExportToolError {
    /// The tool could not be started.
    #[error("export tool '{0}' is unavailable")]
    Unavailable(String),

    /// Generic runtime failure.
    #[error("export tool runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl ExportToolError {
    /// Wraps a runtime error from the runner adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
