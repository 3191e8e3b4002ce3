//! High-level operations of the repokit toolkit.
//!
//! Each module wires one CLI command to the core and git subsystems. The
//! operations take fully resolved inputs: environment and manifest lookups
//! happen at the CLI boundary, not here.

pub mod ops_license;
pub mod ops_migrate;
pub mod ops_pom;
pub mod ops_publish;
