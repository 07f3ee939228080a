//! Application services for vSphere exports.

mod export;

pub use export::{DEFAULT_PROGRAM, ExportService, ExportServiceError, ExportServiceResult};
