//! `vi://` connection locator for `ovftool`.

use super::config::non_empty;
use super::{ExportConfig, escape_credential};
use std::fmt;

/// Locator scheme `ovftool` uses for vCenter targets.
pub const VI_SCHEME: &str = "vi";

const REDACTED_PASSWORD: &str = "<password>";

/// Connection URI of the form
/// `vi://user:pass@host/datacenter/host/cluster[/esxi][/Resources/pool]`.
///
/// Only the credentials are escaped. Host, datacenter, cluster, ESXi host
/// and resource pool are inserted as given, and empty values still yield a
/// well-formed string. `Debug` output masks the password.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionUri {
    value: String,
    redacted: String,
}

impl ConnectionUri {
    /// Builds the connection URI for `config`.
    #[must_use]
    pub fn from_config(config: &ExportConfig) -> Self {
        let username = escape_credential(&config.username);
        let location = location_path(config);
        Self {
            value: format!(
                "{VI_SCHEME}://{username}:{password}@{location}",
                password = escape_credential(&config.password),
            ),
            redacted: format!("{VI_SCHEME}://{username}:{REDACTED_PASSWORD}@{location}"),
        }
    }

    /// Returns the full URI, including the escaped password.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the URI with the password replaced by `<password>`.
    #[must_use]
    pub fn redacted(&self) -> &str {
        &self.redacted
    }

    /// Consumes the URI and returns the full string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

fn location_path(config: &ExportConfig) -> String {
    let mut path = format!(
        "{}/{}/host/{}",
        config.host, config.datacenter, config.cluster
    );
    if let Some(esxi_host) = non_empty(config.esxi_host.as_deref()) {
        path.push('/');
        path.push_str(esxi_host);
    }
    if let Some(pool) = non_empty(config.resource_pool.as_deref()) {
        path.push_str("/Resources/");
        path.push_str(pool);
    }
    path
}

impl AsRef<str> for ConnectionUri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ConnectionUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Debug for ConnectionUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConnectionUri").field(&self.redacted).finish()
    }
}
