// Adapters layer: concrete MessageSink implementations.

use crate::domain::ports::MessageSink;
use crate::utils::error::Result;
use std::io::Write;

/// Writes each line to stdout, unbuffered between lines.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl MessageSink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }
}

/// Collects lines in memory; used by tests and embedders that want to
/// inspect the demo output.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl MessageSink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
