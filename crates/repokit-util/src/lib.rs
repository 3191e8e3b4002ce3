//! Shared utilities for the repokit toolkit.
//!
//! This crate provides cross-cutting concerns used by all other repokit
//! crates: error types, filesystem helpers, process spawning, bounded retry
//! with backoff, and terminal status output.

pub mod errors;
pub mod fs;
pub mod process;
pub mod progress;
pub mod retry;
