//! Operation: render the dependency license report.
//!
//! Produces a markdown document listing the resolved version catalog, split
//! into a runtime section and a tooling section, each sorted by dependency
//! name. The report is a human-readable record of what ships with a release.

use std::path::{Path, PathBuf};

use chrono::Utc;

use repokit_core::catalog::{resolve_catalog, ResolvedDependency};
use repokit_core::manifest::{DependencyScope, Manifest};
use repokit_util::errors::RepokitError;

/// Default file name of the generated report.
pub const REPORT_FILE: &str = "dependency-report.md";

/// The default report location: `[report] output-dir` (or `build/reports`)
/// under the project root.
pub fn default_output(root: &Path, manifest: &Manifest) -> PathBuf {
    let dir = manifest
        .report
        .as_ref()
        .and_then(|r| r.output_dir.as_deref())
        .unwrap_or("build/reports");
    root.join(dir).join(REPORT_FILE)
}

/// Render the license report for `manifest` and write it to `output`.
pub fn write_report(manifest: &Manifest, output: &Path) -> miette::Result<()> {
    let text = render_report(manifest)?;
    if let Some(parent) = output.parent() {
        repokit_util::fs::ensure_dir(parent).map_err(RepokitError::Io)?;
    }
    std::fs::write(output, text).map_err(RepokitError::Io)?;
    tracing::debug!("License report written to `{}`", output.display());
    Ok(())
}

/// Render the license report as markdown text.
pub fn render_report(manifest: &Manifest) -> miette::Result<String> {
    let catalog = manifest.catalog.clone().unwrap_or_default();
    let deps = resolve_catalog(&catalog)?;

    let runtime: Vec<&ResolvedDependency> = deps
        .iter()
        .filter(|d| d.scope == DependencyScope::Runtime)
        .collect();
    let tooling: Vec<&ResolvedDependency> = deps
        .iter()
        .filter(|d| d.scope == DependencyScope::Tooling)
        .collect();

    let mut out = String::new();
    out.push_str(&format!(
        "# Dependencies of `{}:{}`\n",
        manifest.coordinate(),
        manifest.project.version
    ));
    push_section(&mut out, "Runtime", &runtime);
    push_section(&mut out, "Compile, tests and tooling", &tooling);
    push_footer(&mut out);
    Ok(out)
}

fn push_section(out: &mut String, title: &str, deps: &[&ResolvedDependency]) {
    out.push_str(&format!("\n## {title}\n"));
    for (index, dep) in deps.iter().enumerate() {
        push_entry(out, index + 1, dep);
    }
}

fn push_entry(out: &mut String, number: usize, dep: &ResolvedDependency) {
    out.push_str(&format!(
        "\n{number}. **Group:** {} **Name:** {} **Version:** {}",
        dep.group, dep.artifact, dep.version
    ));
    if dep.url.is_none() && dep.license.is_none() && dep.license_url.is_none() {
        out.push_str(" **No license information found**\n");
        return;
    }
    if let Some(ref url) = dep.url {
        out.push_str(&format!("\n    * **Project URL:** [{url}]({url})"));
    }
    match (&dep.license, &dep.license_url) {
        (Some(license), Some(url)) => {
            out.push_str(&format!("\n    * **License:** {license} - [{url}]({url})"));
        }
        (Some(license), None) => {
            out.push_str(&format!("\n    * **License:** {license}"));
        }
        (None, Some(url)) => {
            out.push_str(&format!("\n    * **License:** [{url}]({url})"));
        }
        (None, None) => {}
    }
    out.push('\n');
}

fn push_footer(out: &mut String) {
    let generated_on = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    out.push_str(
        "\nThe dependencies distributed under several licenses are used \
         according to their commercial-use-friendly license.\n",
    );
    out.push_str(&format!(
        "\nThis report was generated on **{generated_on}** by the `repokit license-report` \
         command from the version catalog in `repokit.toml`.\n"
    ));
}
