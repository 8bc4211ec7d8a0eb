use crate::domain::model::Invocation;
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn exists(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write_string(&self, path: &Path, data: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_file(&self) -> &Path;
    fn output(&self) -> Option<&Path>;
    fn verbose(&self) -> bool;
}

/// Skill-specific content processing. Real skills replace the placeholder
/// implementation with their own.
pub trait Processor {
    fn process(&self, content: &str) -> Result<String>;
}

impl ConfigProvider for Invocation {
    fn input_file(&self) -> &Path {
        &self.input_file
    }

    fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}
