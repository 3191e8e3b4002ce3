use std::path::Path;

use miette::Result;

use repokit_core::manifest::Manifest;
use repokit_ops::ops_license;

pub fn exec(output: Option<&Path>) -> Result<()> {
    let root = super::project_root()?;
    let manifest = Manifest::from_dir(&root)?;
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => ops_license::default_output(&root, &manifest),
    };

    ops_license::write_report(&manifest, &output)?;
    println!("Wrote dependency report to {}", output.display());
    Ok(())
}
