/// Validates a package source key.
///
/// Checks:
/// - Non-empty
/// - Characters are ASCII alphanumeric, '_', '-', or '.'
pub fn validate_source_key(key: &str) -> bool {
    !key.is_empty()
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
}
