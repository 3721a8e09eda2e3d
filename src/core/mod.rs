pub mod checker;
pub mod classfile;
pub mod demo;
pub mod inspect;

pub use crate::domain::ports::{BaseChecker, ConfigProvider, MessageSink};
pub use crate::utils::error::Result;
