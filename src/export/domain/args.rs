//! Ordered `ovftool` argument vector.

use super::config::non_empty;
use super::{ConnectionUri, ExportConfig, ExportDomainError};
use std::fmt;
use std::iter;

/// Arguments for one `ovftool` run.
///
/// Flags come first in a fixed order, followed by the source path and the
/// connection URI as the last two positional arguments. `Debug` output masks
/// the password carried in the URI.
#[derive(Clone, PartialEq, Eq)]
pub struct ExportArguments {
    args: Vec<String>,
    redacted_uri: String,
}

impl ExportArguments {
    /// Assembles the argument vector for exporting `source` to `uri`.
    ///
    /// Flag order: `--acceptAllEulas`, `--overwrite`, `--name`,
    /// `--datastore`, `--noSSLVerify`, `--diskMode`, `--vmFolder`,
    /// `--network`, `--net:<source>`, `--maxVirtualHardwareVersion`,
    /// `--powerOn`, then extra options. Unset fields add nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ExportDomainError::EmptySourcePath`],
    /// [`ExportDomainError::EmptyVmName`] or
    /// [`ExportDomainError::EmptyDatastore`] when a required value is empty,
    /// [`ExportDomainError::InvalidNetworkMapping`] when either side of a
    /// mapping is empty, or [`ExportDomainError::EmptyExtraOption`] when an
    /// extra option is empty.
    pub fn build(
        source: &str,
        uri: &ConnectionUri,
        config: &ExportConfig,
    ) -> Result<Self, ExportDomainError> {
        if source.is_empty() {
            return Err(ExportDomainError::EmptySourcePath);
        }
        if config.vm_name.is_empty() {
            return Err(ExportDomainError::EmptyVmName);
        }
        if config.datastore.is_empty() {
            return Err(ExportDomainError::EmptyDatastore);
        }

        let mut args = vec!["--acceptAllEulas".to_owned()];
        if config.overwrite {
            args.push("--overwrite".to_owned());
        }
        args.push(format!("--name={}", config.vm_name));
        args.push(format!("--datastore={}", config.datastore));
        if config.insecure {
            args.push("--noSSLVerify=true".to_owned());
        }
        if let Some(mode) = config.disk_mode {
            args.push(format!("--diskMode={mode}"));
        }
        if let Some(folder) = non_empty(config.vm_folder.as_deref()) {
            args.push(format!("--vmFolder={folder}"));
        }
        if let Some(network) = non_empty(config.vm_network.as_deref()) {
            args.push(format!("--network={network}"));
        }
        for (source_network, target_network) in &config.network_mappings {
            if source_network.is_empty() || target_network.is_empty() {
                return Err(ExportDomainError::InvalidNetworkMapping {
                    source_network: source_network.clone(),
                    target_network: target_network.clone(),
                });
            }
            args.push(format!("--net:{source_network}={target_network}"));
        }
        if let Some(version) = config.hardware_version {
            args.push(format!("--maxVirtualHardwareVersion={version}"));
        }
        if config.power_on {
            args.push("--powerOn".to_owned());
        }
        for (position, option) in config.options.iter().enumerate() {
            if option.is_empty() {
                return Err(ExportDomainError::EmptyExtraOption(position));
            }
            args.push(option.clone());
        }

        args.push(source.to_owned());
        args.push(uri.as_str().to_owned());

        Ok(Self {
            args,
            redacted_uri: uri.redacted().to_owned(),
        })
    }

    /// Returns the arguments in invocation order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    /// Consumes the value and returns the arguments in invocation order.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.args
    }

    /// Returns the arguments with the URI replaced by its redacted form.
    #[must_use]
    pub fn redacted(&self) -> Vec<&str> {
        self.args
            .split_last()
            .map_or_else(Vec::new, |(_, leading)| {
                leading
                    .iter()
                    .map(String::as_str)
                    .chain(iter::once(self.redacted_uri.as_str()))
                    .collect()
            })
    }

    /// Renders the arguments as one space-separated line, safe for logs.
    #[must_use]
    pub fn redacted_command_line(&self) -> String {
        self.redacted().join(" ")
    }
}

impl fmt::Debug for ExportArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExportArguments")
            .field(&self.redacted())
            .finish()
    }
}
