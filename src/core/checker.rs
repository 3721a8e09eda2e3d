use crate::core::{BaseChecker, MessageSink, Result};
use crate::utils::validation::validate_non_empty_string;

/// The demonstration entity. Construction greets through the sink; the
/// numeric operations come from `BaseChecker`, with `add` overridden.
pub struct Checker<S: MessageSink> {
    sink: S,
}

impl<S: MessageSink> Checker<S> {
    /// Prints `MESSAGE: {message}` on construction. An empty or
    /// whitespace-only message is rejected.
    pub fn new(mut sink: S, message: &str) -> Result<Self> {
        validate_non_empty_string("message", message)?;

        sink.write_line(&format!("MESSAGE: {}", message))?;
        Ok(Self { sink })
    }

    /// Sums the two numbers and prints them alongside the result.
    ///
    /// The line reads `Number 1: {x}, Number 2:{y}, sum: {sum}`; the missing
    /// space after the second colon is kept for output compatibility.
    pub(crate) fn print_nums(&mut self, x: i32, y: i32) -> Result<()> {
        let sum = x.wrapping_add(y);
        self.sink
            .write_line(&format!("Number 1: {}, Number 2:{}, sum: {}", x, y, sum))?;
        Ok(())
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: MessageSink> BaseChecker for Checker<S> {
    fn add(&self) -> i32 {
        5 + 6
    }
}
