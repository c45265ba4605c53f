//! Filesystem access needed to read an existing NuGet.config and write the
//! authenticated one.

use std::path::Path;

use crate::domain::AppError;

/// Port for the handful of file operations the configure command performs.
///
/// Paths are absolute or relative to the process working directory; the
/// command resolves them before calling in.
pub trait ConfigFilesystem {
    /// List file names (not full paths) directly inside `dir`.
    fn list_dir(&self, dir: &Path) -> Result<Vec<String>, AppError>;

    /// Check whether a file exists at `path`.
    fn file_exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Write UTF-8 content, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
