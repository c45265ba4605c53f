//! Ambient inputs supplied by the calling workflow environment.

use std::path::PathBuf;

use crate::domain::AUTH_TOKEN_ENV;

/// Action input carrying an explicit owner.
pub const OWNER_INPUT_ENV: &str = "INPUT_OWNER";
/// Owner of the repository running the workflow.
pub const REPOSITORY_OWNER_ENV: &str = "GITHUB_REPOSITORY_OWNER";
/// `owner/repo` slug of the repository running the workflow.
pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
/// File collecting the current step's outputs.
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Snapshot of every environment value the configure command consumes.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ActionEnvironment {
    pub owner_input: Option<String>,
    pub repository_owner: Option<String>,
    pub auth_token: Option<String>,
    pub github_output: Option<PathBuf>,
}

impl ActionEnvironment {
    /// Read from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let repository_owner = non_empty(REPOSITORY_OWNER_ENV).or_else(|| {
            non_empty(REPOSITORY_ENV).and_then(|slug| {
                slug.split_once('/').map(|(owner, _)| owner.to_string()).filter(|o| !o.is_empty())
            })
        });

        Self {
            owner_input: non_empty(OWNER_INPUT_ENV),
            repository_owner,
            auth_token: lookup(AUTH_TOKEN_ENV),
            github_output: non_empty(GITHUB_OUTPUT_ENV).map(PathBuf::from),
        }
    }
}

impl std::fmt::Debug for ActionEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionEnvironment")
            .field("owner_input", &self.owner_input)
            .field("repository_owner", &self.repository_owner)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "***"))
            .field("github_output", &self.github_output)
            .finish()
    }
}
