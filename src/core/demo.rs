use crate::core::checker::Checker;
use crate::core::{BaseChecker, ConfigProvider, MessageSink, Result};

/// Drives the demonstration sequence: construct, add, base add, print sums.
pub struct DemoEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> DemoEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn run<S: MessageSink>(&self, sink: S) -> Result<S> {
        let mut checker = Checker::new(sink, self.config.message())?;

        let added = checker.add();
        tracing::debug!("add() returned {}", added);

        let base_sum = checker.base_add(5, 4);
        tracing::debug!("base_add(5, 4) returned {}", base_sum);

        checker.print_nums(4, 5)?;

        Ok(checker.into_sink())
    }
}
