use miette::Result;

use repokit_core::config::{home_path, is_snapshot, PublishConfig};
use repokit_core::manifest::Manifest;
use repokit_util::progress::{status, status_info, status_warn};

pub fn exec() -> Result<()> {
    let root = super::project_root()?;
    let manifest = Manifest::from_dir(&root)?;
    let config = PublishConfig::resolve(&manifest, &root, &home_path(), |name| {
        std::env::var(name).ok()
    })?;

    if is_snapshot(&config.version) {
        status_warn(
            "Skipping",
            &format!(
                "documentation publishing for snapshot version `{}`",
                config.version
            ),
        );
        return Ok(());
    }

    status(
        "Publishing",
        &format!(
            "documentation for `{}` version `{}`",
            config.project, config.version
        ),
    );
    let outcome = repokit_ops::ops_publish::publish(&config)?;
    for (tool, files) in &outcome.copied {
        status_info("Copied", &format!("{files} file(s) from the {tool} set"));
    }
    status("Published", &outcome.commit_message);
    Ok(())
}
