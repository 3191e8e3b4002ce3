use repokit_util::errors::RepokitError;

/// The name and email pair determining the author and committer of commits
/// made on the pages branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    name: String,
    email: String,
}

impl UserInfo {
    /// Validate and construct a committer identity.
    ///
    /// Both fields must contain at least one non-whitespace character; the
    /// values themselves are stored unmodified.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, RepokitError> {
        let name = name.into();
        let email = email.into();
        if name.trim().is_empty() {
            return Err(RepokitError::InvalidArgument {
                message: "Committer name cannot be blank".to_string(),
            });
        }
        if email.trim().is_empty() {
            return Err(RepokitError::InvalidArgument {
                message: "Committer email cannot be blank".to_string(),
            });
        }
        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
