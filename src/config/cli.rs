use crate::core::Storage;
use crate::utils::error::{HelperError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: Option<PathBuf>,
}

impl LocalStorage {
    /// Resolves relative paths against `base_path` instead of the working directory.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: Some(base_path.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(path),
            None => path.to_path_buf(),
        }
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(self.resolve(path)).map_err(|source| HelperError::ReadInput {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_string(&self, path: &Path, data: &str) -> Result<()> {
        fs::write(self.resolve(path), data).map_err(|source| HelperError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
    }
}
