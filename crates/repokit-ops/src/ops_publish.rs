//! Operation: publish generated documentation to the GitHub Pages branch.
//!
//! One run produces one commit. Every configured documentation set is copied
//! into its most-recent and versioned destinations first, and only then are
//! the changes staged, committed and pushed, so a failure mid-copy leaves no
//! partial commit on the branch. The temporary working copy is removed on
//! every exit path.

use std::path::Path;

use repokit_core::config::PublishConfig;
use repokit_core::docs::{DocSet, PublishTarget};
use repokit_git::repo::Repository;
use repokit_git::ssh::SshKey;
use repokit_util::errors::RepokitError;
use repokit_util::fs::copy_dir_recursive;

/// Outcome of a successful publish run.
#[derive(Debug)]
pub struct PublishOutcome {
    /// The commit message placed on the pages branch.
    pub commit_message: String,
    /// Files copied per documentation set, in configuration order.
    pub copied: Vec<(String, usize)>,
}

/// Publish all configured documentation sets as a single commit.
///
/// The publish steps are:
///
/// 1. Verify every doc set's source directory exists.
/// 2. Register the SSH deploy key.
/// 3. Clone the repository and check out the pages branch.
/// 4. Copy each doc set into its most-recent and versioned destinations.
/// 5. Commit everything at once and push, rebasing over concurrent updates.
pub fn publish(config: &PublishConfig) -> miette::Result<PublishOutcome> {
    if config.doc_sets.is_empty() {
        return Err(RepokitError::Manifest {
            message: "No [[docs]] sets configured; nothing to publish".to_string(),
        }
        .into());
    }
    for set in &config.doc_sets {
        if !set.source.is_dir() {
            return Err(RepokitError::InvalidArgument {
                message: format!(
                    "Generated {} documentation not found at `{}`; \
                     run the documentation build first",
                    set.tool,
                    set.source.display()
                ),
            }
            .into());
        }
    }

    SshKey::new(&config.ssh).register()?;

    let mut repo = Repository::clone(&config.remote_url)?;
    let outcome = update_working_copy(&mut repo, config);
    // The working copy is removed whether or not the update succeeded.
    let closed = repo.close();
    let outcome = outcome?;
    closed?;
    Ok(outcome)
}

fn update_working_copy(
    repo: &mut Repository,
    config: &PublishConfig,
) -> Result<PublishOutcome, RepokitError> {
    repo.checkout(&config.branch)?;
    repo.configure_user(&config.committer)?;

    let workdir = repo.path()?.to_path_buf();
    let mut copied = Vec::with_capacity(config.doc_sets.len());
    for set in &config.doc_sets {
        let count = copy_doc_set(&workdir, set, &config.project, &config.version)?;
        copied.push((set.tool.clone(), count));
    }

    let commit_message = format!(
        "Update documentation for `{}` as of version `{}`",
        config.project, config.version
    );
    repo.commit_all(&commit_message)?;
    repo.push(&config.backoff)?;

    Ok(PublishOutcome {
        commit_message,
        copied,
    })
}

/// Copy one doc set into both of its destinations under `workdir`.
///
/// The most-recent destination is updated in place; later files win over
/// earlier ones with the same name. The versioned destination is written the
/// same way, but nothing ever publishes to the same version twice in normal
/// operation, so it stays an immutable snapshot.
fn copy_doc_set(
    workdir: &Path,
    set: &DocSet,
    project: &str,
    version: &str,
) -> Result<usize, RepokitError> {
    let target = PublishTarget::new(&set.root, project, version);
    let (most_recent, versioned) = target.under(workdir);

    tracing::debug!(
        "Replacing the most recent {} docs in `{}`",
        set.tool,
        most_recent.display()
    );
    let count = copy_dir_recursive(&set.source, &most_recent)?;

    tracing::debug!(
        "Storing the {} docs of version {version} in `{}`",
        set.tool,
        versioned.display()
    );
    copy_dir_recursive(&set.source, &versioned)?;

    Ok(count)
}
