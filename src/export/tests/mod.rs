//! Unit tests for the export module.
//!
//! Tests are organised by component: credential escaping, connection URI
//! construction, argument assembly, source selection, configuration
//! decoding, and service orchestration.

mod escape_tests;
mod uri_tests;
