pub mod cli;
pub mod settings;

#[cfg(feature = "cli")]
mod args {
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "example-helper", version)]
    #[command(about = "Example helper script for [Skill Name]")]
    pub struct CliConfig {
        /// Input file to process
        pub input_file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        pub output: Option<PathBuf>,

        /// Enable verbose output
        #[arg(short, long)]
        pub verbose: bool,

        /// Optional TOML settings file
        #[arg(short, long)]
        pub config: Option<PathBuf>,
    }

    impl ConfigProvider for CliConfig {
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

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("input_file", &self.input_file)?;
            if let Some(output) = &self.output {
                validate_path("output", output)?;
            }
            if let Some(config) = &self.config {
                validate_path("config", config)?;
            }
            Ok(())
        }
    }

}

#[cfg(feature = "cli")]
pub use args::CliConfig;
