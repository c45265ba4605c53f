use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ConfigFilesystem;

/// `ConfigFilesystem` backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigFilesystem for LocalFilesystem {
    fn list_dir(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(path)?)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content)?;
        Ok(())
    }
}
