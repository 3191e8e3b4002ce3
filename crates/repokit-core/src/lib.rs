//! Core data types for the repokit toolkit.
//!
//! This crate defines the types shared by the repokit operations: manifest
//! parsing (`repokit.toml`), the resolved publish configuration, documentation
//! sets and their destination paths, the version catalog, and the git
//! committer identity.
//!
//! This crate is intentionally free of process spawning and network I/O.

pub mod catalog;
pub mod config;
pub mod docs;
pub mod manifest;
pub mod user;
