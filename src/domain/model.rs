use std::path::{Path, PathBuf};

/// Parsed values for a single run of the helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub input_file: PathBuf,
    pub output: Option<PathBuf>,
    pub verbose: bool,
}

impl Invocation {
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output: None,
            verbose: false,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedOutput {
    pub text: String,
}

impl ProcessedOutput {
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

/// Where the processed text ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitTarget {
    Stdout,
    File(PathBuf),
}

impl EmitTarget {
    pub fn path(&self) -> Option<&Path> {
        match self {
            EmitTarget::Stdout => None,
            EmitTarget::File(path) => Some(path),
        }
    }
}
