//! VM export to vSphere through the `ovftool` command line.
//!
//! This module turns a populated [`domain::ExportConfig`] into the connection
//! URI and ordered argument vector that `ovftool` expects. The module follows
//! hexagonal architecture:
//!
//! - Domain types and pure builders in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
