//! Machine-readable command output.
//!
//! The outcome is rendered once as compact JSON; the same line goes to the
//! given sink and, inside a workflow run, is appended to the step's
//! `GITHUB_OUTPUT` file as `json=<...>`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::domain::AppError;

/// Write `output` as one JSON line to `sink`, mirroring it into `github_output`.
///
/// # Errors
/// Returns an error if serialization fails or either destination cannot be written.
pub fn write_json_output<T: Serialize, W: Write>(
    output: &T,
    sink: &mut W,
    github_output: Option<&Path>,
) -> Result<(), AppError> {
    let line = serde_json::to_string(output)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize outcome: {}", e)))?;
    debug_assert!(!line.contains('\n'), "compact JSON never spans lines");

    writeln!(sink, "{}", line)?;

    if let Some(path) = github_output {
        append_github_output(path, &line)?;
    }
    Ok(())
}

fn append_github_output(path: &Path, line: &str) -> Result<(), AppError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path).map_err(|e| {
        AppError::InternalError(format!("Failed to open {}: {}", path.display(), e))
    })?;
    writeln!(file, "json={}", line)
        .map_err(|e| AppError::InternalError(format!("Failed to write {}: {}", path.display(), e)))
}
