use crate::config::settings::{HelperSettings, DEFAULT_PREFIX};
use crate::core::Processor;
use crate::utils::error::Result;

/// Placeholder transform: prepends a fixed prefix to the input text.
#[derive(Debug, Clone)]
pub struct PrefixProcessor {
    prefix: String,
}

impl PrefixProcessor {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn from_settings(settings: &HelperSettings) -> Self {
        Self::new(settings.transform.prefix.clone())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for PrefixProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl Processor for PrefixProcessor {
    fn process(&self, content: &str) -> Result<String> {
        let mut out = String::with_capacity(self.prefix.len() + content.len());
        out.push_str(&self.prefix);
        out.push_str(content);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix() {
        let processor = PrefixProcessor::default();
        assert_eq!(processor.process("hello").unwrap(), "Processed: hello");
    }

    #[test]
    fn test_content_is_preserved_exactly() {
        let processor = PrefixProcessor::default();
        let content = "line one\r\n\tline two\n\nünïcödé ✓\n";
        let out = processor.process(content).unwrap();
        assert_eq!(out.strip_prefix("Processed: "), Some(content));
    }

    #[test]
    fn test_empty_content() {
        let processor = PrefixProcessor::default();
        assert_eq!(processor.process("").unwrap(), "Processed: ");
    }

    #[test]
    fn test_from_settings() {
        let mut settings = HelperSettings::default();
        settings.transform.prefix = "Draft: ".to_string();
        let processor = PrefixProcessor::from_settings(&settings);
        assert_eq!(processor.prefix(), "Draft: ");
        assert_eq!(processor.process("x").unwrap(), "Draft: x");
    }
}
