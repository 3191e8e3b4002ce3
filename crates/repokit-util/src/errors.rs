use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all repokit operations.
#[derive(Debug, Error, Diagnostic)]
pub enum RepokitError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. repokit.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your repokit.toml for syntax errors"))]
    Manifest { message: String },

    /// A required configuration value was blank or otherwise unusable.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A required environment variable is missing or empty.
    #[error("Environment variable `{name}` is not set")]
    #[diagnostic(help("`{name}` must be exported by the CI job before publishing"))]
    EnvironmentNotSet { name: String },

    /// A credential file expected on disk was not found.
    #[error("Missing credential: {message}")]
    MissingCredential { message: String },

    /// An external command exited with a non-zero status.
    #[error("Command `{command}` exited with code {code}\nstderr: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },

    /// Cloning a remote repository failed.
    #[error("Failed to clone `{remote}`: {message}")]
    CloneFailed { remote: String, message: String },

    /// Checking out a branch failed, usually because it does not exist upstream.
    #[error("Failed to check out branch `{branch}`: {message}")]
    CheckoutFailed { branch: String, message: String },

    /// Pushing to a remote failed after the configured retries.
    #[error("Failed to push to `{remote}`: {message}")]
    PushFailed { remote: String, message: String },

    /// An operation was attempted on a repository handle after `close`.
    #[error("The repository working copy has already been removed")]
    RepositoryClosed,

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type RepokitResult<T> = miette::Result<T>;
