pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConsoleSink, MemorySink};
pub use crate::core::classfile::ClassFile;
pub use crate::core::{checker::Checker, demo::DemoEngine, inspect::InspectEngine};
pub use domain::ports::{BaseChecker, ConfigProvider, MessageSink};
pub use utils::error::{CheckerError, Result};
