use crate::core::{ConfigProvider, EmitTarget, ProcessedOutput, Processor, Storage};
use crate::utils::error::Result;
use crate::utils::validation::validate_input_file;
use std::io::Write;

/// Runs one invocation: validate, transform, emit.
pub struct HelperEngine<S: Storage, C: ConfigProvider, P: Processor> {
    storage: S,
    config: C,
    processor: P,
}

impl<S: Storage, C: ConfigProvider, P: Processor> HelperEngine<S, C, P> {
    pub fn new(storage: S, config: C, processor: P) -> Self {
        Self {
            storage,
            config,
            processor,
        }
    }

    /// `stdout` receives the result when no output file is configured, plus
    /// the progress lines in verbose mode.
    pub fn run<W: Write>(&self, stdout: &mut W) -> Result<EmitTarget> {
        let input = self.config.input_file();
        validate_input_file(&self.storage, input)?;

        if self.config.verbose() {
            writeln!(stdout, "Processing {}...", input.display())?;
        }

        let result = self.transform()?;
        self.emit(result, stdout)
    }

    fn transform(&self) -> Result<ProcessedOutput> {
        let input = self.config.input_file();
        let content = self.storage.read_to_string(input)?;
        tracing::debug!("Read {} bytes from {}", content.len(), input.display());

        let text = self.processor.process(&content)?;
        Ok(ProcessedOutput::new(text))
    }

    fn emit<W: Write>(&self, result: ProcessedOutput, stdout: &mut W) -> Result<EmitTarget> {
        match self.config.output() {
            Some(path) => {
                self.storage.write_string(path, &result.text)?;
                tracing::debug!("Wrote {} bytes to {}", result.text.len(), path.display());
                if self.config.verbose() {
                    writeln!(stdout, "Wrote output to {}", path.display())?;
                }
                Ok(EmitTarget::File(path.to_path_buf()))
            }
            None => {
                writeln!(stdout, "{}", result.text)?;
                stdout.flush()?;
                Ok(EmitTarget::Stdout)
            }
        }
    }
}
