use std::path::Path;

use tempfile::TempDir;

use repokit_core::user::UserInfo;
use repokit_util::errors::RepokitError;
use repokit_util::process::CommandBuilder;
use repokit_util::retry::{retry, Backoff};

/// An owned handle over a temporary clone of a remote repository.
///
/// The handle is single-use: one clone maps to one working copy and one
/// publishing run. The working copy lives in a fresh temporary directory
/// that is removed by [`Repository::close`], or on drop as a backstop if
/// `close` was never called.
#[derive(Debug)]
pub struct Repository {
    remote_url: String,
    workdir: Option<TempDir>,
    current_branch: Option<String>,
}

impl Repository {
    /// Clone `remote_url` into a fresh temporary directory.
    pub fn clone(remote_url: &str) -> Result<Self, RepokitError> {
        let workdir = TempDir::with_prefix("repokit-pages-")?;
        tracing::debug!(
            "Cloning `{remote_url}` into `{}`",
            workdir.path().display()
        );
        let cloned = CommandBuilder::new("git")
            .args(["clone", remote_url, "."])
            .cwd(workdir.path())
            .run();
        if let Err(e) = cloned {
            return Err(RepokitError::CloneFailed {
                remote: remote_url.to_string(),
                message: e.to_string(),
            });
        }
        Ok(Self {
            remote_url: remote_url.to_string(),
            workdir: Some(workdir),
            current_branch: None,
        })
    }

    /// The URL this working copy was cloned from.
    pub fn remote_url(&self) -> &str {
        &self.remote_url
    }

    /// The branch checked out by [`Repository::checkout`], if any.
    pub fn current_branch(&self) -> Option<&str> {
        self.current_branch.as_deref()
    }

    /// Path of the working copy.
    pub fn path(&self) -> Result<&Path, RepokitError> {
        self.workdir
            .as_ref()
            .map(TempDir::path)
            .ok_or(RepokitError::RepositoryClosed)
    }

    /// Check out `branch` and pull to bring it up to date.
    ///
    /// The branch must already exist upstream; this never creates one.
    pub fn checkout(&mut self, branch: &str) -> Result<(), RepokitError> {
        let result = self
            .git(&["checkout", branch])
            .and_then(|_| self.git(&["pull"]));
        if let Err(e) = result {
            return Err(RepokitError::CheckoutFailed {
                branch: branch.to_string(),
                message: e.to_string(),
            });
        }
        self.current_branch = Some(branch.to_string());
        Ok(())
    }

    /// Set the local `user.name` and `user.email` used for commits in this
    /// working copy.
    pub fn configure_user(&self, user: &UserInfo) -> Result<(), RepokitError> {
        self.git(&["config", "user.name", user.name()])?;
        self.git(&["config", "user.email", user.email()])?;
        Ok(())
    }

    /// Stage every working-copy change and commit with `message`.
    ///
    /// Empty commits are allowed, so publishing unchanged documentation
    /// still leaves a traceable commit on the branch.
    pub fn commit_all(&self, message: &str) -> Result<(), RepokitError> {
        self.git(&["add", "--all"])?;
        self.git(&["commit", "--allow-empty", "--message", message])?;
        Ok(())
    }

    /// Push the current branch, retrying per `backoff` when the remote moved.
    ///
    /// Each attempt rebases onto the remote first (`git pull --rebase`),
    /// which resolves the common case of another publisher racing on the
    /// shared branch. The failure of the final attempt propagates.
    pub fn push(&self, backoff: &Backoff) -> Result<(), RepokitError> {
        let branch = self.current_branch.as_deref().unwrap_or("HEAD");
        let description = format!("Push to `{}` (branch `{branch}`)", self.remote_url);
        retry(backoff, &description, || {
            self.git(&["pull", "--rebase"])
                .and_then(|_| self.git(&["push"]))
                .map_err(|e| RepokitError::PushFailed {
                    remote: self.remote_url.clone(),
                    message: e.to_string(),
                })?;
            Ok(())
        })
    }

    /// Remove the temporary working copy.
    ///
    /// Safe to call more than once; the directory is deleted the first time
    /// and later calls are no-ops.
    pub fn close(&mut self) -> Result<(), RepokitError> {
        if let Some(dir) = self.workdir.take() {
            tracing::debug!("Removing working copy at `{}`", dir.path().display());
            dir.close()?;
        }
        Ok(())
    }

    /// Execute a git subcommand inside the working copy, returning stdout.
    fn git(&self, args: &[&str]) -> Result<String, RepokitError> {
        let dir = self.path()?;
        CommandBuilder::new("git")
            .args(args.iter().copied())
            .cwd(dir)
            .run()
    }
}
