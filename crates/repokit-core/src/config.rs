use std::path::{Path, PathBuf};

use repokit_util::errors::RepokitError;
use repokit_util::retry::Backoff;

use crate::docs::DocSet;
use crate::manifest::Manifest;
use crate::user::UserInfo;

/// Environment variable naming the `owner/repository` slug of the repository
/// whose documentation is published. Exported by the CI workflow.
pub const REPO_SLUG_VAR: &str = "REPO_SLUG";

/// Environment variable with the email used for authoring pages commits.
pub const AUTHOR_EMAIL_VAR: &str = "PAGES_AUTHOR_EMAIL";

/// Host alias the deploy key is registered under in the SSH client
/// configuration. Using an alias keeps the runner's default `github.com`
/// identity untouched.
pub const PUBLISH_HOST: &str = "github.com-publish";

/// Everything the publish operation needs, resolved up front at the CLI
/// boundary so the operation itself never consults the environment.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Clone and push URL of the repository carrying the pages branch.
    pub remote_url: String,
    /// The branch serving the documentation site.
    pub branch: String,
    pub project: String,
    pub version: String,
    pub committer: UserInfo,
    /// Documentation sets to publish, in manifest order.
    pub doc_sets: Vec<DocSet>,
    pub ssh: SshSettings,
    pub backoff: Backoff,
}

/// File locations involved in registering the deploy key.
#[derive(Debug, Clone)]
pub struct SshSettings {
    /// Private deploy key, expected to be decrypted on the CI runner
    /// before publishing starts.
    pub key_file: PathBuf,
    /// SSH client configuration file receiving the host-alias stanza.
    pub config_file: PathBuf,
    /// Script handing the deploy key to the SSH agent.
    pub register_script: PathBuf,
}

impl PublishConfig {
    /// Assemble the publish configuration from a parsed manifest, the project
    /// root, the home directory, and an environment lookup.
    ///
    /// The lookup is a parameter so tests can supply fixed values instead of
    /// mutating the process environment.
    pub fn resolve(
        manifest: &Manifest,
        root: &Path,
        home: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, RepokitError> {
        let slug = require_env(&env, REPO_SLUG_VAR)?;
        let email = require_env(&env, AUTHOR_EMAIL_VAR)?;

        let project = require_value(&manifest.project.name, "[project] name")?;
        let version = require_value(&manifest.project.version, "[project] version")?;
        let committer = UserInfo::new(&manifest.pages.committer_name, email)?;

        let doc_sets = manifest
            .docs
            .iter()
            .map(|d| DocSet {
                tool: d.tool.clone(),
                source: root.join(&d.source),
                root: d.root.clone(),
            })
            .collect();

        Ok(Self {
            remote_url: remote_url_for(&slug),
            branch: manifest.pages.branch.clone(),
            project,
            version,
            committer,
            doc_sets,
            ssh: SshSettings {
                key_file: root.join(&manifest.pages.key_file),
                config_file: home.join(".ssh").join("config"),
                register_script: root.join(&manifest.pages.register_script),
            },
            backoff: Backoff::default(),
        })
    }
}

/// SSH clone URL for an `owner/repository` slug, routed through the publish
/// host alias.
pub fn remote_url_for(slug: &str) -> String {
    format!("git@{PUBLISH_HOST}:{slug}.git")
}

/// Whether a version string denotes a snapshot build.
///
/// Snapshot documentation is never published; the site only carries releases.
pub fn is_snapshot(version: &str) -> bool {
    version.to_ascii_lowercase().contains("snapshot")
}

/// Returns the home directory, from `HOME` or `USERPROFILE`.
pub fn home_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
}

fn require_env(
    env: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<String, RepokitError> {
    match env(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(RepokitError::EnvironmentNotSet {
            name: name.to_string(),
        }),
    }
}

fn require_value(value: &str, what: &str) -> Result<String, RepokitError> {
    if value.trim().is_empty() {
        return Err(RepokitError::InvalidArgument {
            message: format!("{what} cannot be blank"),
        });
    }
    Ok(value.to_string())
}
