//! Git plumbing for the repokit toolkit.
//!
//! All interaction with git happens through the `git` command-line tool
//! rather than an in-process library, so the behaviour matches what a CI
//! runner's shell would do, including honouring the user's SSH configuration.

pub mod repo;
pub mod ssh;
