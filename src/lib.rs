pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, settings::HelperSettings};
pub use core::{helper::HelperEngine, processor::PrefixProcessor};
pub use domain::model::{EmitTarget, Invocation, ProcessedOutput};
pub use utils::error::{HelperError, Result};
