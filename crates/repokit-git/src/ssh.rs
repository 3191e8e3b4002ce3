use std::io::Write;

use repokit_core::config::{SshSettings, PUBLISH_HOST};
use repokit_util::errors::RepokitError;
use repokit_util::process::CommandBuilder;

/// Registers the deploy key that authorizes pushes to the pages branch.
///
/// CI runners come with a default SSH identity that has no write access to
/// the documentation repository. The deploy key is decrypted on the runner
/// out-of-band; this type appends a host-alias stanza for it to the SSH
/// client configuration and hands the key to the provisioning script that
/// loads it into the agent.
pub struct SshKey<'a> {
    settings: &'a SshSettings,
}

impl<'a> SshKey<'a> {
    pub fn new(settings: &'a SshSettings) -> Self {
        Self { settings }
    }

    /// Verify the key exists on disk, append the host stanza, and run the
    /// registration script with the key path as its argument.
    ///
    /// Each call appends a fresh stanza. SSH uses the first matching `Host`
    /// entry, so repeated runs leave inert duplicates behind; invoke once
    /// per process.
    pub fn register(&self) -> Result<(), RepokitError> {
        let key = &self.settings.key_file;
        if !key.is_file() {
            return Err(RepokitError::MissingCredential {
                message: format!(
                    "Deploy key `{}` does not exist. It is expected to be decrypted \
                     on the CI runner before publishing.",
                    key.display()
                ),
            });
        }

        self.append_host_stanza()?;
        tracing::debug!(
            "Registering deploy key via `{}`",
            self.settings.register_script.display()
        );
        let mut script = CommandBuilder::new(self.settings.register_script.to_string_lossy())
            .arg(key.to_string_lossy());
        if let Some(root) = key.parent() {
            script = script.cwd(root);
        }
        script.run()?;
        Ok(())
    }

    /// Append the `Host` alias stanza pointing SSH at the deploy key.
    fn append_host_stanza(&self) -> Result<(), RepokitError> {
        let config = &self.settings.config_file;
        if let Some(parent) = config.parent() {
            repokit_util::fs::ensure_dir(parent)?;
        }
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(config)?;
        writeln!(file)?;
        writeln!(file, "Host {PUBLISH_HOST}")?;
        writeln!(file, "User git")?;
        writeln!(file, "IdentityFile {}", self.settings.key_file.display())?;
        Ok(())
    }
}
