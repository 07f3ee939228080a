//! Connection and placement settings for a vSphere export.

use super::DiskMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Settings that drive URI construction and argument assembly.
///
/// The record is read-only for the builders. Optional string fields holding
/// an empty string are treated exactly like `None`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// vCenter login name.
    pub username: String,
    /// vCenter password.
    pub password: String,
    /// vCenter host name.
    pub host: String,
    /// Datacenter holding the target cluster.
    pub datacenter: String,
    /// Cluster the VM is placed in.
    pub cluster: String,
    /// Resource pool below the cluster.
    pub resource_pool: Option<String>,
    /// Specific ESXi host within the cluster.
    pub esxi_host: Option<String>,
    /// Name given to the imported VM.
    pub vm_name: String,
    /// Datastore receiving the VM disks.
    pub datastore: String,
    /// Skip TLS certificate verification.
    pub insecure: bool,
    /// Disk provisioning mode.
    pub disk_mode: Option<DiskMode>,
    /// Inventory folder receiving the VM.
    pub vm_folder: Option<String>,
    /// Target network for every source network.
    pub vm_network: Option<String>,
    /// Per-network mapping from source network name to target network name.
    pub network_mappings: BTreeMap<String, String>,
    /// Replace an existing VM with the same name.
    pub overwrite: bool,
    /// Power the VM on after import.
    pub power_on: bool,
    /// Upper bound for the virtual hardware version.
    pub hardware_version: Option<u32>,
    /// Extra `ovftool` options, passed through verbatim.
    pub options: Vec<String>,
}

impl ExportConfig {
    /// Decodes a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ExportConfigError::Decode`] when the document is malformed,
    /// contains unknown keys, or names an unknown disk mode.
    pub fn from_json(document: &str) -> Result<Self, ExportConfigError> {
        Ok(serde_json::from_str(document)?)
    }
}

impl fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportConfig")
            .field("username", &self.username)
            .field("password", &"<password>")
            .field("host", &self.host)
            .field("datacenter", &self.datacenter)
            .field("cluster", &self.cluster)
            .field("resource_pool", &self.resource_pool)
            .field("esxi_host", &self.esxi_host)
            .field("vm_name", &self.vm_name)
            .field("datastore", &self.datastore)
            .field("insecure", &self.insecure)
            .field("disk_mode", &self.disk_mode)
            .field("vm_folder", &self.vm_folder)
            .field("vm_network", &self.vm_network)
            .field("network_mappings", &self.network_mappings)
            .field("overwrite", &self.overwrite)
            .field("power_on", &self.power_on)
            .field("hardware_version", &self.hardware_version)
            .field("options", &self.options)
            .finish()
    }
}

/// Errors returned while decoding an [`ExportConfig`].
#[derive(Debug, Error)]
pub enum ExportConfigError {
    /// The JSON document could not be decoded.
    #[error("invalid export configuration: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Returns the value when it is set and non-empty.
pub(super) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|inner| !inner.is_empty())
}
