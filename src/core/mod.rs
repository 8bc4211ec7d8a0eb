pub mod helper;
pub mod processor;

pub use crate::domain::model::{EmitTarget, Invocation, ProcessedOutput};
pub use crate::domain::ports::{ConfigProvider, Processor, Storage};
pub use crate::utils::error::Result;
