//! Credentials injected for each authenticated source.

use std::fmt;

use super::AppError;

/// Environment variable holding the feed's secret token.
pub const AUTH_TOKEN_ENV: &str = "NUGET_AUTH_TOKEN";

/// Secret token written as `ClearTextPassword`.
///
/// `Debug` is redacted so the value never leaks through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Accept the raw environment value; unset or empty is fatal.
    pub fn from_env_value(raw: Option<&str>) -> Result<Self, AppError> {
        match raw {
            Some(value) if !value.is_empty() => Ok(Self(value.to_string())),
            _ => Err(AppError::MissingAuthToken),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Username/password pair attached to every matched source key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: AuthToken,
}

/// Pick the owner: a non-empty explicit input wins over the repository owner.
pub fn resolve_owner(
    explicit: Option<&str>,
    repository_owner: Option<&str>,
) -> Result<String, AppError> {
    explicit
        .filter(|owner| !owner.is_empty())
        .or(repository_owner.filter(|owner| !owner.is_empty()))
        .map(str::to_string)
        .ok_or(AppError::OwnerUnresolved)
}
