use std::path::Path;

use miette::Result;

use repokit_core::manifest::Manifest;
use repokit_ops::ops_pom;

pub fn exec(output: Option<&Path>) -> Result<()> {
    let root = super::project_root()?;
    let manifest = Manifest::from_dir(&root)?;
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => root.join("pom.xml"),
    };

    ops_pom::write_pom(&manifest, &output)?;
    println!("Wrote pom report to {}", output.display());
    Ok(())
}
