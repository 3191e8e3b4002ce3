use std::path::{Path, PathBuf};

/// A single kind of generated documentation to publish, with its source
/// directory resolved against the project root.
#[derive(Debug, Clone)]
pub struct DocSet {
    /// Label of the generating tool, used in logs.
    pub tool: String,
    /// Directory holding the generated output.
    pub source: PathBuf,
    /// Destination root on the pages branch.
    pub root: String,
}

/// The two destination directories for one project and version.
///
/// `most_recent` always mirrors the latest published documentation;
/// `versioned` is a per-release snapshot that is never overwritten by later
/// versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    pub most_recent: PathBuf,
    pub versioned: PathBuf,
}

impl PublishTarget {
    /// Compute the destination paths `<root>/<project>` and
    /// `<root>/<project>/v/<version>`, relative to the pages branch root.
    pub fn new(doc_root: &str, project: &str, version: &str) -> Self {
        let most_recent = Path::new(doc_root).join(project);
        let versioned = most_recent.join("v").join(version);
        Self {
            most_recent,
            versioned,
        }
    }

    /// The same paths resolved under a working-copy directory.
    pub fn under(&self, workdir: &Path) -> (PathBuf, PathBuf) {
        (
            workdir.join(&self.most_recent),
            workdir.join(&self.versioned),
        )
    }
}
