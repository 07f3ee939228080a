//! Port contracts for handing export invocations to a process runner.

mod runner;

pub use runner::{
    ExportInvocation, ExportOutcome, ExportToolError, ExportToolResult, ExportToolRunner,
};
