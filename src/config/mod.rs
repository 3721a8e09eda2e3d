use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "checker-demo")]
#[command(about = "A small checker demo that greets and prints sums")]
pub struct CliConfig {
    #[arg(long, default_value = "Create the object")]
    pub message: String,

    #[arg(long, help = "Parse the given .class file and print its summary")]
    pub class_file: Option<std::path::PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn message(&self) -> &str {
        &self.message
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("message", &self.message)
    }
}
