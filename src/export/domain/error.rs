//! Error types for export argument assembly and parsing.

use thiserror::Error;

/// Errors returned while building export domain values.
///
/// Upstream configuration validation should make every variant unreachable;
/// they surface internal invariant violations rather than user mistakes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportDomainError {
    /// The target VM name is empty.
    #[error("VM name must not be empty")]
    EmptyVmName,

    /// The target datastore is empty.
    #[error("datastore must not be empty")]
    EmptyDatastore,

    /// The source artifact path is empty.
    #[error("source path must not be empty")]
    EmptySourcePath,

    /// A network mapping has an empty source or target network name.
    #[error("network mapping '{source_network}' -> '{target_network}' has an empty side")]
    InvalidNetworkMapping {
        /// Network name in the source artifact.
        source_network: String,
        /// Network name on the target host.
        target_network: String,
    },

    /// An extra tool option is empty.
    #[error("extra ovftool option at position {0} must not be empty")]
    EmptyExtraOption(usize),

    /// No file in the artifact list can be read by `ovftool`.
    #[error("no .vmx, .ovf or .ova file found among {0} artifact file(s)")]
    NoSourceArtifact(usize),
}

/// Error returned while parsing a disk mode from configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown ovftool disk mode: {0}")]
pub struct ParseDiskModeError(pub String);
