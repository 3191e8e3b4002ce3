//! Operation: rewrite import statements across a source tree.
//!
//! Supports one-off migrations such as moving a repository family from
//! `javax.annotation` to JSpecify: `[migrate.imports]` maps fully-qualified
//! names to their replacements, and every `import` statement mentioning a
//! mapped name is rewritten. Only the import prefix is matched, so other
//! mentions of the old name in code or comments stay untouched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use repokit_core::manifest::MigrateConfig;
use repokit_util::errors::RepokitError;

/// Directories never descended into, regardless of configuration.
const EXCLUDED_DIRS: &[&str] = &[".git", ".github", ".gradle", ".idea", "build", "gradle", "out"];

/// A single rewritten file.
#[derive(Debug)]
pub struct FileChange {
    pub path: PathBuf,
    pub replacements: usize,
}

/// Outcome of a migration run.
#[derive(Debug)]
pub struct MigrationReport {
    /// Source files inspected.
    pub scanned: usize,
    /// Files with at least one rewritten import.
    pub changes: Vec<FileChange>,
    /// Whether changes were written to disk or only reported.
    pub applied: bool,
}

/// Walk `root` and rewrite import statements per the mapping in `config`.
///
/// With `apply == false` the report lists would-be changes without touching
/// any file.
pub fn migrate(root: &Path, config: &MigrateConfig, apply: bool) -> miette::Result<MigrationReport> {
    if config.imports.is_empty() {
        return Err(RepokitError::Manifest {
            message: "No [migrate.imports] mapping configured; nothing to migrate".to_string(),
        }
        .into());
    }
    let exclusions = build_exclusions(&config.exclude)?;
    let mut report = MigrationReport {
        scanned: 0,
        changes: Vec::new(),
        applied: apply,
    };
    visit_dir(root, root, config, &exclusions, apply, &mut report)?;
    Ok(report)
}

fn build_exclusions(patterns: &[String]) -> Result<GlobSet, RepokitError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| RepokitError::Manifest {
            message: format!("Invalid [migrate] exclude pattern `{pattern}`: {e}"),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| RepokitError::Manifest {
        message: format!("Invalid [migrate] exclude patterns: {e}"),
    })
}

fn visit_dir(
    root: &Path,
    dir: &Path,
    config: &MigrateConfig,
    exclusions: &GlobSet,
    apply: bool,
    report: &mut MigrationReport,
) -> Result<(), RepokitError> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(&path);
        if exclusions.is_match(relative) {
            continue;
        }
        if entry.file_type()?.is_dir() {
            let name = entry.file_name();
            if EXCLUDED_DIRS.iter().any(|d| name == *d) {
                continue;
            }
            visit_dir(root, &path, config, exclusions, apply, report)?;
        } else if has_wanted_extension(&path, &config.extensions) {
            report.scanned += 1;
            if let Some(change) = rewrite_file(&path, &config.imports, apply)? {
                report.changes.push(change);
            }
        }
    }
    Ok(())
}

fn has_wanted_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|wanted| wanted == e))
        .unwrap_or(false)
}

fn rewrite_file(
    path: &Path,
    mapping: &BTreeMap<String, String>,
    apply: bool,
) -> Result<Option<FileChange>, RepokitError> {
    let Ok(mut content) = std::fs::read_to_string(path) else {
        // Binary or non-UTF-8 content; not a source file we can rewrite.
        tracing::warn!("Skipping non-UTF-8 file `{}`", path.display());
        return Ok(None);
    };

    // Longest names first, so `a.B` cannot clobber an `import a.B2` line.
    let mut pairs: Vec<(&String, &String)> = mapping.iter().collect();
    pairs.sort_by_key(|(old, _)| std::cmp::Reverse(old.len()));

    let mut replacements = 0;
    for (old, new) in pairs {
        let needle = format!("import {old}");
        let count = content.matches(&needle).count();
        if count > 0 {
            content = content.replace(&needle, &format!("import {new}"));
            replacements += count;
        }
    }
    if replacements == 0 {
        return Ok(None);
    }
    if apply {
        std::fs::write(path, content)?;
    }
    Ok(Some(FileChange {
        path: path.to_path_buf(),
        replacements,
    }))
}
