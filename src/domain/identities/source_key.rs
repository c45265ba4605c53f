use super::validation::validate_source_key;
use crate::domain::AppError;

/// A validated package source key.
///
/// Guarantees:
/// - Non-empty
/// - Contains only ASCII letters, digits, `_`, `-`, or `.`
///
/// Safe to use as an element name inside `packageSourceCredentials`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceKey(String);

impl SourceKey {
    /// Key given to the entry synthesized when no existing source matches.
    pub const DEFAULT: &'static str = "Source";

    /// Validate and create a new `SourceKey`.
    pub fn new(key: &str) -> Result<Self, AppError> {
        if validate_source_key(key) {
            Ok(Self(key.to_string()))
        } else {
            Err(AppError::InvalidSourceKey(key.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SourceKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for SourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
