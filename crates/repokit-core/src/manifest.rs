use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Name of the manifest file marking the root of a repokit-managed project.
pub const MANIFEST_FILE: &str = "repokit.toml";

/// The parsed representation of a `repokit.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub project: ProjectMetadata,

    #[serde(default)]
    pub pages: PagesConfig,

    #[serde(default)]
    pub docs: Vec<DocSetConfig>,

    #[serde(default)]
    pub catalog: Option<CatalogConfig>,

    #[serde(default)]
    pub migrate: Option<MigrateConfig>,

    #[serde(default)]
    pub report: Option<ReportConfig>,
}

/// Project identity from the `[project]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub group: Option<String>,
}

/// GitHub Pages publishing settings from the `[pages]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    /// The branch serving the documentation site.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Human-readable name used for authoring pages commits.
    #[serde(default = "default_committer_name", rename = "committer-name")]
    pub committer_name: String,

    /// Private deploy key, relative to the project root.
    #[serde(default = "default_key_file", rename = "key-file")]
    pub key_file: String,

    /// Script handing the deploy key to the SSH agent, relative to the
    /// project root.
    #[serde(default = "default_register_script", rename = "register-script")]
    pub register_script: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            branch: default_branch(),
            committer_name: default_committer_name(),
            key_file: default_key_file(),
            register_script: default_register_script(),
        }
    }
}

fn default_branch() -> String {
    "gh-pages".to_string()
}

fn default_committer_name() -> String {
    "Continuous Integration".to_string()
}

fn default_key_file() -> String {
    "deploy_key_rsa".to_string()
}

fn default_register_script() -> String {
    "config/scripts/register-ssh-key.sh".to_string()
}

/// One kind of generated documentation, from a `[[docs]]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocSetConfig {
    /// Label of the generating tool, e.g. `javadoc` or `dokka`.
    pub tool: String,

    /// Directory holding the generated output, relative to the project root.
    pub source: String,

    /// Destination root on the pages branch, e.g. `reference` or
    /// `dokka-reference`.
    #[serde(default = "default_doc_root")]
    pub root: String,
}

fn default_doc_root() -> String {
    "reference".to_string()
}

/// Version catalog configuration from `[catalog]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub versions: BTreeMap<String, String>,
    #[serde(default)]
    pub libraries: BTreeMap<String, CatalogLibrary>,
}

/// A library entry in the version catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogLibrary {
    pub group: String,
    pub artifact: String,
    #[serde(default, rename = "version.ref")]
    pub version_ref: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub scope: DependencyScope,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default, rename = "license-url")]
    pub license_url: Option<String>,
}

/// Whether a catalog entry ships with the project or only supports building it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    #[default]
    Runtime,
    Tooling,
}

/// Import-migration settings from the `[migrate]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MigrateConfig {
    /// Fully-qualified names mapped to their replacements.
    #[serde(default)]
    pub imports: BTreeMap<String, String>,

    /// Glob patterns excluded from the walk, in addition to the built-in
    /// build-output directories.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// File extensions considered source files.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string(), "kt".to_string()]
}

/// Report output settings from the `[report]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory receiving generated reports, relative to the project root.
    #[serde(default, rename = "output-dir")]
    pub output_dir: Option<String>,
}

impl Manifest {
    /// Load and parse a `repokit.toml` from the given project root.
    pub fn from_dir(root: &Path) -> miette::Result<Self> {
        let path = root.join(MANIFEST_FILE);
        tracing::debug!("Loading manifest from `{}`", path.display());
        let content = std::fs::read_to_string(&path).map_err(|e| {
            repokit_util::errors::RepokitError::Manifest {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        Self::from_str(&content)
    }

    /// Parse a `repokit.toml` from a string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            repokit_util::errors::RepokitError::Manifest {
                message: format!("Failed to parse repokit.toml: {e}"),
            }
            .into()
        })
    }

    /// The `group:name` coordinate prefix, falling back to the bare name
    /// when no group is configured.
    pub fn coordinate(&self) -> String {
        match self.project.group.as_deref() {
            Some(group) => format!("{group}:{}", self.project.name),
            None => self.project.name.clone(),
        }
    }
}
