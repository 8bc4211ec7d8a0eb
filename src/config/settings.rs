use crate::utils::error::{HelperError, Result};
use crate::utils::validation::{validate_no_null_bytes, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PREFIX: &str = "Processed: ";

/// Optional settings file for the helper.
///
/// ```toml
/// [transform]
/// prefix = "Processed: "
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperSettings {
    #[serde(default)]
    pub transform: TransformSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformSettings {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

impl HelperSettings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| HelperError::ConfigError {
            message: format!("cannot read settings file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| HelperError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads the settings file when one is given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for HelperSettings {
    fn validate(&self) -> Result<()> {
        validate_no_null_bytes("transform.prefix", &self.transform.prefix)
    }
}
