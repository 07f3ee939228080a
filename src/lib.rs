//! vSphere export: `ovftool` invocation building for VM exports.
//!
//! This crate turns structured vCenter connection settings into the
//! `vi://` connection URI and ordered argument vector that `ovftool` needs to
//! import a VM into a vSphere cluster. Credentials are escaped with a custom
//! allow-list because `ovftool` treats many URI-reserved characters as
//! locator delimiters.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure builders with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for running the external tool
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`export`]: Credential escaping, URI and argument building, and export
//!   orchestration

pub mod export;
