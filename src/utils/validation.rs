use crate::core::Storage;
use crate::utils::error::{HelperError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(HelperError::ConfigValidationError {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.to_string_lossy().contains('\0') {
        return Err(HelperError::ConfigValidationError {
            field: field_name.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_no_null_bytes(field_name: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(HelperError::ConfigValidationError {
            field: field_name.to_string(),
            reason: "Value contains null bytes".to_string(),
        });
    }
    Ok(())
}

/// The input must exist and be a regular file before anything is read.
pub fn validate_input_file<S: Storage>(storage: &S, path: &Path) -> Result<()> {
    if !storage.exists(path) {
        return Err(HelperError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    if !storage.is_file(path) {
        return Err(HelperError::InvalidInput {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
