//! Domain model for building `ovftool` export invocations.
//!
//! The domain covers credential escaping, connection URI construction,
//! argument assembly, and source artifact selection. Everything here is a
//! pure function of its inputs; process execution stays outside this
//! boundary.

mod args;
mod config;
mod disk_mode;
mod error;
mod escape;
mod source;
mod uri;

pub use args::ExportArguments;
pub use config::{ExportConfig, ExportConfigError};
pub use disk_mode::DiskMode;
pub use error::{ExportDomainError, ParseDiskModeError};
pub use escape::escape_credential;
pub use source::{SOURCE_EXTENSIONS, select_source_artifact};
pub use uri::{ConnectionUri, VI_SCHEME};
