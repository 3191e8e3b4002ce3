use serde::Serialize;

use repokit_util::errors::RepokitError;

use crate::manifest::{CatalogConfig, CatalogLibrary, DependencyScope};

/// A catalog library with its version reference substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDependency {
    pub name: String,
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub scope: DependencyScope,
    pub url: Option<String>,
    pub license: Option<String>,
    pub license_url: Option<String>,
}

impl ResolvedDependency {
    /// The `group:artifact:version` dependency notation.
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// Resolve every library in the catalog by substituting version refs.
///
/// Entries come back sorted by name. A `version.ref` naming no entry in
/// `[catalog.versions]` is an error, as is a library declaring neither
/// `version` nor `version.ref`.
pub fn resolve_catalog(catalog: &CatalogConfig) -> Result<Vec<ResolvedDependency>, RepokitError> {
    let mut entries = Vec::with_capacity(catalog.libraries.len());
    for (name, lib) in &catalog.libraries {
        entries.push(resolve_library(catalog, name, lib)?);
    }
    Ok(entries)
}

fn resolve_library(
    catalog: &CatalogConfig,
    name: &str,
    lib: &CatalogLibrary,
) -> Result<ResolvedDependency, RepokitError> {
    let version = match (&lib.version_ref, &lib.version) {
        (Some(vref), _) => catalog.versions.get(vref).cloned().ok_or_else(|| {
            RepokitError::Manifest {
                message: format!("Library `{name}` references unknown version `{vref}`"),
            }
        })?,
        (None, Some(version)) => version.clone(),
        (None, None) => {
            return Err(RepokitError::Manifest {
                message: format!("Library `{name}` declares neither `version` nor `version.ref`"),
            })
        }
    };
    Ok(ResolvedDependency {
        name: name.to_string(),
        group: lib.group.clone(),
        artifact: lib.artifact.clone(),
        version,
        scope: lib.scope,
        url: lib.url.clone(),
        license: lib.license.clone(),
        license_url: lib.license_url.clone(),
    })
}
