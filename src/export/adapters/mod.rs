//! Adapter implementations for export ports.

pub mod memory;
