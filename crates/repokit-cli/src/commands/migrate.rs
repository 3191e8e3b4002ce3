use miette::Result;

use repokit_core::manifest::Manifest;
use repokit_ops::ops_migrate;

pub fn exec(apply: bool, extensions: Vec<String>) -> Result<()> {
    let root = super::project_root()?;
    let manifest = Manifest::from_dir(&root)?;
    let mut config = manifest.migrate.unwrap_or_default();
    if !extensions.is_empty() {
        config.extensions = extensions;
    }

    let report = ops_migrate::migrate(&root, &config, apply)?;
    if report.changes.is_empty() {
        println!(
            "Scanned {} file(s); all imports are already up to date",
            report.scanned
        );
        return Ok(());
    }

    for change in &report.changes {
        let path = change.path.strip_prefix(&root).unwrap_or(&change.path);
        println!("  {}: {} import(s)", path.display(), change.replacements);
    }
    let total: usize = report.changes.iter().map(|c| c.replacements).sum();
    if report.applied {
        println!(
            "Rewrote {} import(s) across {} file(s)",
            total,
            report.changes.len()
        );
    } else {
        println!(
            "{} file(s) would change; run again with --apply to rewrite them",
            report.changes.len()
        );
    }
    Ok(())
}
