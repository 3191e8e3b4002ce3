use miette::Result;

use repokit_core::catalog::resolve_catalog;
use repokit_core::manifest::{DependencyScope, Manifest};
use repokit_util::errors::RepokitError;

pub fn exec(format: &str) -> Result<()> {
    let root = super::project_root()?;
    let manifest = Manifest::from_dir(&root)?;
    let catalog = manifest.catalog.unwrap_or_default();
    let deps = resolve_catalog(&catalog)?;

    match format {
        "table" => {
            if deps.is_empty() {
                println!("The version catalog is empty.");
                return Ok(());
            }
            let name_width = deps.iter().map(|d| d.name.len()).max().unwrap_or(0);
            for dep in &deps {
                let scope = match dep.scope {
                    DependencyScope::Runtime => "runtime",
                    DependencyScope::Tooling => "tooling",
                };
                println!(
                    "{:<name_width$}  {:<7}  {}",
                    dep.name,
                    scope,
                    dep.coordinate()
                );
            }
            Ok(())
        }
        "json" => {
            let rendered =
                serde_json::to_string_pretty(&deps).map_err(|e| RepokitError::Generic {
                    message: format!("Failed to render the catalog as JSON: {e}"),
                })?;
            println!("{rendered}");
            Ok(())
        }
        other => Err(RepokitError::InvalidArgument {
            message: format!("Unknown catalog format `{other}`; expected `table` or `json`"),
        }
        .into()),
    }
}
